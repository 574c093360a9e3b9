//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::model::RuleSet;
use crate::patcher::PrerunPaths;
use crate::utils::path::resolve_dir;

/// Common context for command execution
pub struct Context {
    pub paths: PrerunPaths,
    pub rules: RuleSet,
    pub rules_file: Option<PathBuf>,
    pub dry_run: bool,
    pub quiet: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        let work_dir = match cli.dir.as_deref() {
            Some(dir) => resolve_dir(dir, &cwd),
            None => cwd,
        };

        let rules = match &cli.rules {
            Some(path) => RuleSet::load(path)?,
            None => RuleSet::default(),
        };

        Ok(Self {
            paths: PrerunPaths::new(work_dir),
            rules,
            rules_file: cli.rules.clone(),
            dry_run: cli.dry_run,
            quiet: cli.quiet,
        })
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    /// Print an informational message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "→".cyan(), message.dimmed());
        }
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "⚠".yellow(), message);
        }
    }
}
