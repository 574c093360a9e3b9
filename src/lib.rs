//! riscof-prerun - RISCOF config preparation
//!
//! Reads `riscof-test/template.ini` under a working directory, fills in
//! the path options the compliance harness expects when they are absent,
//! and writes `riscof-test/config.ini`.
//!
//! # Features
//!
//! - INI parsing with sections, `DEFAULT` inheritance and continuation lines
//! - `%(name)s` interpolation when copying values between sections
//! - Rule-driven filling that never overwrites an existing option
//! - Optional TOML rule file replacing the built-in rules

pub mod cli;
pub mod error;
pub mod formatter;
pub mod interpolation;
pub mod model;
pub mod parser;
pub mod patcher;
pub mod utils;

pub use error::{InterpolationError, ParseError, PatchError};
pub use formatter::format_document;
pub use model::{FillRule, FillSource, IniDocument, RuleSet, Section};
pub use parser::IniParser;
pub use patcher::{run, Patcher, PrerunPaths};
