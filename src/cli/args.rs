//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "riscof-prerun")]
#[command(about = "Fill path settings in riscof-test/template.ini and write riscof-test/config.ini")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Working directory containing riscof-test/ (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// TOML file replacing the built-in fill rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Print the patched config instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}
