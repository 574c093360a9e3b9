//! Formatter module: serialize an [`IniDocument`] back to INI text

use crate::model::{IniDocument, Section};

/// Delimiter written between option name and value
const DELIMITER: &str = " = ";

/// Render the whole document.
///
/// `DEFAULT` comes first when it has options; every section is followed by
/// a blank line. Multi-line values continue on tab-indented lines.
pub fn format_document(doc: &IniDocument) -> String {
    let mut out = String::new();
    if !doc.defaults().is_empty() {
        format_section(doc.defaults(), &mut out);
    }
    for section in doc.sections() {
        format_section(section, &mut out);
    }
    out
}

fn format_section(section: &Section, out: &mut String) {
    out.push('[');
    out.push_str(&section.name);
    out.push_str("]\n");
    for (key, value) in section.iter() {
        out.push_str(key);
        out.push_str(DELIMITER);
        out.push_str(&value.replace('\n', "\n\t"));
        out.push('\n');
    }
    out.push('\n');
}
