//! Fill rules: which option to set when absent, and where its value comes from

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory under the working directory that holds the harness configs
pub const TEST_DIR_NAME: &str = "riscof-test";

/// Where a filled value comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FillSource {
    /// The working directory of the run
    WorkDir,
    /// `<workdir>/riscof-test`
    TestDir,
    /// The (interpolated) value of another option
    Copy { section: String, key: String },
    /// A fixed string
    Literal { value: String },
}

/// Set `section.key` from `source` unless the option already exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRule {
    pub section: String,
    pub key: String,
    pub source: FillSource,
}

impl FillRule {
    pub fn new(section: &str, key: &str, source: FillSource) -> Self {
        Self {
            section: section.to_string(),
            key: key.to_string(),
            source,
        }
    }
}

/// Ordered rule list; later rules see the results of earlier ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "rule", default)]
    pub rules: Vec<FillRule>,
}

impl RuleSet {
    /// Load a rule set from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = crate::utils::path::read_file(path)?;
        let rules: RuleSet = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid rules file {}: {}", path.display(), e))?;
        Ok(rules)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        let copy = |section: &str, key: &str| FillSource::Copy {
            section: section.to_string(),
            key: key.to_string(),
        };
        RuleSet {
            rules: vec![
                FillRule::new("RISCOF", "riscof-test-path", FillSource::TestDir),
                FillRule::new(
                    "riscv_emulator",
                    "DUTPluginPath",
                    copy("RISCOF", "DUTPluginPath"),
                ),
                FillRule::new("riscv_emulator", "PWD", FillSource::WorkDir),
                FillRule::new(
                    "sail_cSim",
                    "ReferencePluginPath",
                    copy("RISCOF", "ReferencePluginPath"),
                ),
            ],
        }
    }
}
