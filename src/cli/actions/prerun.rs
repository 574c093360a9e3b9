//! Patch the harness config and report what changed

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::patcher;

/// Execute the prerun action
pub fn execute(ctx: &Context) -> Result<()> {
    if let Some(rules_file) = &ctx.rules_file {
        ctx.print_info(&format!("Using rules from {}", rules_file.display()));
    }
    ctx.print_info(&format!("Reading {}", ctx.paths.template.display()));

    let outcome = patcher::run(&ctx.paths, &ctx.rules, ctx.dry_run)?;

    if outcome.filled.is_empty() {
        ctx.print_warning("All options already set, nothing filled");
    }
    for filled in &outcome.filled {
        ctx.print_success(&format!(
            "[{}] {} = {}",
            filled.section.cyan(),
            filled.key.yellow(),
            filled.value
        ));
    }

    match &outcome.written {
        Some(path) => ctx.print_success(&format!("Wrote {}", path.display())),
        None => print!("{}", outcome.rendered),
    }

    Ok(())
}
