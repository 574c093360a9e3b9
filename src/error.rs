//! Error types for parsing, interpolation and patching

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse an INI document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: option outside of any section: {raw:?}")]
    MissingSectionHeader { line: usize, raw: String },

    #[error("line {line}: section [{section}] already exists")]
    DuplicateSection { line: usize, section: String },

    #[error("line {line}: option '{key}' in section [{section}] already exists")]
    DuplicateOption {
        line: usize,
        section: String,
        key: String,
    },

    #[error("line {line}: expected `key = value` or `[section]`: {raw:?}")]
    Malformed { line: usize, raw: String },
}

/// Failure to expand `%(name)s` references in a value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("[{section}] {key}: reference to missing option '{reference}'")]
    MissingOption {
        section: String,
        key: String,
        reference: String,
    },

    #[error("[{section}] {key}: bad interpolation syntax in {value:?}")]
    Syntax {
        section: String,
        key: String,
        value: String,
    },

    #[error("[{section}] {key}: interpolation nested deeper than {max_depth}")]
    TooDeep {
        section: String,
        key: String,
        max_depth: usize,
    },
}

/// Any failure of a patch run
#[derive(Debug, Error)]
pub enum PatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("section [{section}] not found")]
    MissingSection { section: String },

    #[error("required option '{key}' not found in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = PatchError> = std::result::Result<T, E>;
