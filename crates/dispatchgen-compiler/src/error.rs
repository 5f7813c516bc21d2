//! Errors raised while parsing mappings and generating artifacts.

use std::io;
use std::path::PathBuf;

use dispatchgen_core::{Identifier, IdentifierWidth};

/// Errors that can occur during generation.
///
/// None of these are retried: generation is deterministic and offline, so the
/// same input fails the same way every time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed mapping line.
    #[error("{mapping}:{line}: {kind}")]
    Format {
        mapping: String,
        line: usize,
        kind: FormatError,
    },

    /// Mapping without entries, fatal only for the sparse array strategy.
    #[error("mapping '{mapping}' has no entries, cannot build a sparse table")]
    EmptyMapping { mapping: String },

    #[error(
        "{mapping}:{line}: identifier {identifier:#x} is already mapped on line {first_line}"
    )]
    DuplicateIdentifier {
        mapping: String,
        identifier: Identifier,
        line: usize,
        first_line: usize,
    },

    #[error("{mapping}:{line}: slot name '{name}' is already used on line {first_line}")]
    NameCollision {
        mapping: String,
        name: String,
        line: usize,
        first_line: usize,
    },

    #[error("{mapping}:{line}: slot name '{name}' is reserved in generated code")]
    ReservedName {
        mapping: String,
        name: String,
        line: usize,
    },

    #[error("mapping name '{name}' cannot form a class name (use [A-Za-z0-9_])")]
    MappingName { name: String },

    /// Two mapping files in one run would write the same artifacts.
    #[error(
        "'{}' and '{}' both generate {class_name}",
        first.display(),
        second.display()
    )]
    ClassNameCollision {
        class_name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Input path missing or not a regular file.
    #[error("'{}' {problem}", path.display())]
    Path { path: PathBuf, problem: PathProblem },

    #[error("mapping '{mapping}' needs a sparse table of {len} slots (limit is {limit})")]
    TableTooLarge { mapping: String, len: u64, limit: u64 },

    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Line number the error points at, if it is tied to a mapping line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. }
            | Self::DuplicateIdentifier { line, .. }
            | Self::NameCollision { line, .. }
            | Self::ReservedName { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// What is wrong with a single mapping line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("line is empty")]
    EmptyLine,

    #[error("expected `<identifier> <handler>`, found {found} field(s)")]
    FieldCount { found: usize },

    #[error("identifier '{field}' is not hexadecimal")]
    InvalidHex { field: String },

    #[error("identifier '{field}' does not fit in {width}")]
    IdentifierTooWide { field: String, width: IdentifierWidth },

    #[error("handler name '{name}' is not a valid identifier")]
    InvalidHandlerName { name: String },

    #[error("first line must contain the marker '{expected}'")]
    MissingMarker { expected: String },
}

/// Why an input path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathProblem {
    #[error("does not exist")]
    Missing,
    #[error("is not a regular file")]
    NotAFile,
    #[error("is not a directory")]
    NotADirectory,
}
