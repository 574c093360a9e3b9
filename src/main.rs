//! riscof-prerun - prepare riscof-test/config.ini for a compliance run

use anyhow::Result;
use clap::Parser;

use riscof_prerun::cli::{actions, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;
    actions::prerun::execute(&ctx)
}
