//! `%(name)s` value interpolation
//!
//! References are looked up in the same section, then in `DEFAULT`, and
//! expanded recursively. `%%` is a literal percent sign. Values are stored
//! raw; interpolation happens only when a value is read for copying.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::InterpolationError;
use crate::model::IniDocument;

/// Maximum nesting of references before giving up
pub const MAX_DEPTH: usize = 10;

lazy_static! {
    // %(name)s at the start of the remaining input
    static ref REFERENCE_RE: Regex = Regex::new(r"^%\(([^)]+)\)s").unwrap();
}

/// Interpolated value of `section.key`, or `None` if the option is absent.
pub fn resolve(
    doc: &IniDocument,
    section: &str,
    key: &str,
) -> Result<Option<String>, InterpolationError> {
    let Some(raw) = doc.get(section, key) else {
        return Ok(None);
    };
    let mut out = String::new();
    expand(doc, section, key, raw, 1, &mut out)?;
    Ok(Some(out))
}

/// Escape literal `%` so the value reads back unchanged after interpolation.
pub fn escape(value: &str) -> String {
    value.replace('%', "%%")
}

fn expand(
    doc: &IniDocument,
    section: &str,
    key: &str,
    value: &str,
    depth: usize,
    out: &mut String,
) -> Result<(), InterpolationError> {
    if depth > MAX_DEPTH {
        return Err(InterpolationError::TooDeep {
            section: section.to_string(),
            key: key.to_string(),
            max_depth: MAX_DEPTH,
        });
    }

    let syntax_error = || InterpolationError::Syntax {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    };

    let mut rest = value;
    while let Some(p) = rest.find('%') {
        out.push_str(&rest[..p]);
        rest = &rest[p..];

        if let Some(after) = rest.strip_prefix("%%") {
            out.push('%');
            rest = after;
            continue;
        }

        let caps = REFERENCE_RE.captures(rest).ok_or_else(syntax_error)?;
        let name = &caps[1];
        let matched = caps[0].len();

        let referenced =
            doc.get(section, name)
                .ok_or_else(|| InterpolationError::MissingOption {
                    section: section.to_string(),
                    key: key.to_string(),
                    reference: name.to_string(),
                })?;

        if referenced.contains('%') {
            expand(doc, section, key, referenced, depth + 1, out)?;
        } else {
            out.push_str(referenced);
        }
        rest = &rest[matched..];
    }
    out.push_str(rest);
    Ok(())
}
