//! In-memory INI document

use crate::error::PatchError;

/// Name of the section whose options every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A named section holding ordered options
///
/// Option names are matched case-insensitively; the spelling used when an
/// option was first inserted is the one written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    options: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.options[i].1.as_str())
    }

    /// Insert or replace an option value. Returns the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.options[i].1, value)),
            None => {
                self.options.push((key, value));
                None
            }
        }
    }

    /// Mutable access to an existing value, used for continuation lines
    pub(crate) fn value_mut(&mut self, key: &str) -> Option<&mut String> {
        self.position(key).map(move |i| &mut self.options[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Ordered collection of sections plus the `DEFAULT` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    defaults: Section,
    sections: Vec<Section>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self {
            defaults: Section::new(DEFAULT_SECTION),
            sections: Vec::new(),
        }
    }

    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Look up a section by exact name. `DEFAULT` resolves to the defaults.
    pub fn section(&self, name: &str) -> Option<&Section> {
        if name == DEFAULT_SECTION {
            return Some(&self.defaults);
        }
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        if name == DEFAULT_SECTION {
            return Some(&mut self.defaults);
        }
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Append a new empty section. Returns `None` if the name is taken.
    pub fn add_section(&mut self, name: &str) -> Option<&mut Section> {
        if self.has_section(name) {
            return None;
        }
        self.sections.push(Section::new(name));
        self.sections.last_mut()
    }

    /// True when `key` is set in `section` itself or inherited from `DEFAULT`.
    /// A missing section has no options.
    pub fn has_option(&self, section: &str, key: &str) -> bool {
        match self.section(section) {
            Some(s) => s.contains(key) || self.defaults.contains(key),
            None => false,
        }
    }

    /// Raw (uninterpolated) value, falling back to `DEFAULT`
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let s = self.section(section)?;
        s.get(key).or_else(|| self.defaults.get(key))
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) -> Result<(), PatchError> {
        let s = self
            .section_mut(section)
            .ok_or_else(|| PatchError::MissingSection {
                section: section.to_string(),
            })?;
        s.set(key, value);
        Ok(())
    }
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        let mut doc = IniDocument::new();
        doc.section_mut(DEFAULT_SECTION).unwrap().set("shared", "yes");
        doc.add_section("RISCOF").unwrap().set("DUTPluginPath", "/a/b");
        doc.add_section("riscv_emulator");
        doc
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let doc = sample();
        assert!(doc.has_option("RISCOF", "dutpluginpath"));
        assert_eq!(doc.get("RISCOF", "DUTPLUGINPATH"), Some("/a/b"));
    }

    #[test]
    fn test_set_keeps_original_spelling() {
        let mut doc = sample();
        doc.set("RISCOF", "dutpluginpath", "/x").unwrap();
        let keys: Vec<_> = doc.section("RISCOF").unwrap().iter().collect();
        assert_eq!(keys, vec![("DUTPluginPath", "/x")]);
    }

    #[test]
    fn test_defaults_are_inherited() {
        let doc = sample();
        assert!(doc.has_option("riscv_emulator", "shared"));
        assert_eq!(doc.get("riscv_emulator", "shared"), Some("yes"));
        assert!(!doc.has_option("nope", "shared"));
    }

    #[test]
    fn test_set_on_missing_section_fails() {
        let mut doc = sample();
        let err = doc.set("sail_cSim", "k", "v").unwrap_err();
        assert!(matches!(err, PatchError::MissingSection { section } if section == "sail_cSim"));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut doc = sample();
        assert!(doc.add_section("RISCOF").is_none());
        assert!(doc.add_section("DEFAULT").is_none());
    }
}
