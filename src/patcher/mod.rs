//! Config patching: fill absent options and write the harness config

use std::path::{Path, PathBuf};

use crate::error::{PatchError, Result};
use crate::formatter::format_document;
use crate::interpolation;
use crate::model::{FillSource, IniDocument, RuleSet, TEST_DIR_NAME};
use crate::parser::IniParser;

/// Input file name inside the test directory
pub const TEMPLATE_FILE: &str = "template.ini";
/// Output file name inside the test directory
pub const OUTPUT_FILE: &str = "config.ini";

/// Paths derived from the working directory of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerunPaths {
    pub work_dir: PathBuf,
    pub test_dir: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl PrerunPaths {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        let work_dir = work_dir.into();
        let test_dir = work_dir.join(TEST_DIR_NAME);
        Self {
            template: test_dir.join(TEMPLATE_FILE),
            output: test_dir.join(OUTPUT_FILE),
            work_dir,
            test_dir,
        }
    }
}

/// An option the patcher set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filled {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Applies a [`RuleSet`] to a document
pub struct Patcher<'a> {
    rules: &'a RuleSet,
    paths: &'a PrerunPaths,
}

impl<'a> Patcher<'a> {
    pub fn new(rules: &'a RuleSet, paths: &'a PrerunPaths) -> Self {
        Self { rules, paths }
    }

    /// Set every rule's option that is not already present (directly or via
    /// `DEFAULT`). Existing values are never touched.
    pub fn apply(&self, doc: &mut IniDocument) -> Result<Vec<Filled>> {
        let mut filled = Vec::new();

        for rule in &self.rules.rules {
            if doc.has_option(&rule.section, &rule.key) {
                continue;
            }

            let value = self.source_value(doc, &rule.source)?;
            doc.set(&rule.section, &rule.key, value.clone())?;
            filled.push(Filled {
                section: rule.section.clone(),
                key: rule.key.clone(),
                value,
            });
        }

        Ok(filled)
    }

    /// Value to store for a rule, escaped for interpolation
    fn source_value(&self, doc: &IniDocument, source: &FillSource) -> Result<String> {
        match source {
            FillSource::WorkDir => Ok(path_value(&self.paths.work_dir)),
            FillSource::TestDir => Ok(path_value(&self.paths.test_dir)),
            FillSource::Literal { value } => Ok(value.clone()),
            FillSource::Copy { section, key } => interpolation::resolve(doc, section, key)?
                .map(|v| interpolation::escape(&v))
                .ok_or_else(|| PatchError::MissingKey {
                    section: section.clone(),
                    key: key.clone(),
                }),
        }
    }
}

fn path_value(path: &Path) -> String {
    interpolation::escape(&path.to_string_lossy())
}

/// Result of a full run
#[derive(Debug)]
pub struct PatchOutcome {
    pub filled: Vec<Filled>,
    pub rendered: String,
    /// `None` for a dry run
    pub written: Option<PathBuf>,
}

/// Read the template, fill it, and write the output unless `dry_run`.
///
/// The output is overwritten unconditionally. Its parent directory is not
/// created.
pub fn run(paths: &PrerunPaths, rules: &RuleSet, dry_run: bool) -> Result<PatchOutcome> {
    let mut doc = IniParser::new().parse_file(&paths.template)?;
    let filled = Patcher::new(rules, paths).apply(&mut doc)?;
    let rendered = format_document(&doc);

    let written = if dry_run {
        None
    } else {
        std::fs::write(&paths.output, &rendered).map_err(|source| PatchError::Write {
            path: paths.output.clone(),
            source,
        })?;
        Some(paths.output.clone())
    };

    Ok(PatchOutcome {
        filled,
        rendered,
        written,
    })
}
