//! # Parser Module
//!
//! Reads INI text into an [`IniDocument`].
//!
//! ## Dialect
//!
//! | Line | Meaning |
//! |------|---------|
//! | `[name]` | starts a section (`[DEFAULT]` holds inherited options) |
//! | `key = value` / `key: value` | option in the current section |
//! | indented deeper than the option | continuation of the option value |
//! | `# ...` / `; ...` | comment, dropped; the open value stays open |
//! | blank | empty line inside a continued value, dropped when trailing |
//!
//! Option names are unique per section ignoring case; section names are
//! unique and case-sensitive. Any violation is a [`ParseError`] carrying the
//! 1-based line number.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use riscof_prerun::parser::IniParser;
//!
//! let doc = IniParser::new().parse("[RISCOF]\nDUTPluginPath = /a/b\n")?;
//! assert_eq!(doc.get("RISCOF", "DUTPluginPath"), Some("/a/b"));
//! ```

pub mod patterns;

use std::path::Path;

use crate::error::ParseError;
use crate::model::{IniDocument, DEFAULT_SECTION};
use patterns::{COMMENT_RE, OPTION_RE, SECTION_RE};

/// Option whose value may still receive continuation lines
struct OpenOption {
    section: String,
    key: String,
    indent: usize,
    /// Blank lines seen since the last line of the value
    blanks: usize,
}

/// INI file parser
pub struct IniParser;

impl IniParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<IniDocument, ParseError> {
        let mut doc = IniDocument::new();
        let mut current: Option<String> = None;
        let mut open: Option<OpenOption> = None;

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                if let Some(opt) = open.as_mut() {
                    opt.blanks += 1;
                }
                continue;
            }
            if COMMENT_RE.is_match(trimmed) {
                continue;
            }

            let indent = line.len() - line.trim_start().len();

            if let Some(opt) = open.as_mut().filter(|o| indent > o.indent) {
                if let Some(value) = doc
                    .section_mut(&opt.section)
                    .and_then(|s| s.value_mut(&opt.key))
                {
                    for _ in 0..=opt.blanks {
                        value.push('\n');
                    }
                    value.push_str(trimmed);
                }
                opt.blanks = 0;
                continue;
            }
            open = None;

            if let Some(caps) = SECTION_RE.captures(trimmed) {
                let name = caps["header"].to_string();
                if name != DEFAULT_SECTION && doc.add_section(&name).is_none() {
                    return Err(ParseError::DuplicateSection {
                        line: line_num,
                        section: name,
                    });
                }
                current = Some(name);
                continue;
            }

            let Some(section_name) = current.as_deref() else {
                return Err(ParseError::MissingSectionHeader {
                    line: line_num,
                    raw: line.to_string(),
                });
            };

            let Some(caps) = OPTION_RE.captures(trimmed) else {
                return Err(ParseError::Malformed {
                    line: line_num,
                    raw: line.to_string(),
                });
            };

            let key = caps["key"].to_string();
            if key.is_empty() {
                return Err(ParseError::Malformed {
                    line: line_num,
                    raw: line.to_string(),
                });
            }

            let section = match doc.section_mut(section_name) {
                Some(s) => s,
                None => {
                    return Err(ParseError::Malformed {
                        line: line_num,
                        raw: line.to_string(),
                    })
                }
            };
            if section.contains(&key) {
                return Err(ParseError::DuplicateOption {
                    line: line_num,
                    section: section_name.to_string(),
                    key,
                });
            }
            section.set(key.clone(), caps["value"].trim_end());

            open = Some(OpenOption {
                section: section_name.to_string(),
                key,
                indent,
                blanks: 0,
            });
        }

        Ok(doc)
    }

    /// Read and parse a file. A missing file is reported as
    /// [`ParseError::NotFound`] rather than as an I/O failure.
    pub fn parse_file(&self, path: &Path) -> Result<IniDocument, ParseError> {
        if !path.is_file() {
            return Err(ParseError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content)
    }
}

impl Default for IniParser {
    fn default() -> Self {
        Self::new()
    }
}
