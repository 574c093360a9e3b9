//! Core data models for riscof-prerun

mod document;
mod rules;

pub use document::{IniDocument, Section, DEFAULT_SECTION};
pub use rules::{FillRule, FillSource, RuleSet, TEST_DIR_NAME};
