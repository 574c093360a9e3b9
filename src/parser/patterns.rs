//! # INI Regex Patterns
//!
//! All patterns are matched against a line with surrounding whitespace
//! already stripped. Indentation is measured separately because it decides
//! whether a line continues the previous value.
//!
//! ## Adding New Patterns
//!
//! 1. Add pattern to `lazy_static!` block below
//! 2. Use it from the line loop in `mod.rs`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a full-line comment: `# text` or `; text`
    pub static ref COMMENT_RE: Regex = Regex::new(r"^[#;]").unwrap();

    /// Matches a section header: `[name]`
    ///
    /// Captures:
    /// - `header`: section name (anything up to the last `]`)
    ///
    /// Text after the closing bracket is ignored.
    pub static ref SECTION_RE: Regex = Regex::new(r"^\[(?P<header>.+)\]").unwrap();

    /// Matches an option: `key = value` or `key: value`
    ///
    /// Captures:
    /// - `key`: option name, trailing whitespace excluded (may be empty)
    /// - `value`: everything after the first delimiter
    ///
    /// The lazy `key` group makes the first `=` or `:` the delimiter, so
    /// values may contain either character.
    pub static ref OPTION_RE: Regex =
        Regex::new(r"^(?P<key>.*?)\s*[=:]\s*(?P<value>.*)$").unwrap();
}
