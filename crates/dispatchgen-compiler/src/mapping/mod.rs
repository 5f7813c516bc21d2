//! Identifier-to-handler mappings.
//!
//! A mapping file has a marker line followed by one `<hex-id> <HandlerType>`
//! pair per line. [`parse`] turns the text into entries in file order;
//! [`Mapping`] adds the validation every emitter relies on (unique
//! identifiers, unique slot names).

mod parser;
mod validate;


use std::fs;
use std::path::Path;

use dispatchgen_core::Identifier;
use dispatchgen_core::utils::is_identifier_tail;

use crate::{Config, Error, Result};

pub use parser::{parse, parse_identifier};
pub use validate::{check_duplicates, check_slot_names};

/// One parsed row of a mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub identifier: Identifier,
    pub type_name: String,
    /// 1-based line number in the mapping file (the marker is line 1).
    pub line: usize,
}

impl Entry {
    pub fn new(identifier: Identifier, type_name: impl Into<String>, line: usize) -> Self {
        Self {
            identifier,
            type_name: type_name.into(),
            line,
        }
    }
}

/// A validated mapping: entries in file order, no duplicate identifiers,
/// no clashing slot names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    name: String,
    entries: Vec<Entry>,
}

impl Mapping {
    /// Validate `entries` and wrap them under `name`.
    pub fn new(name: impl Into<String>, entries: Vec<Entry>) -> Result<Self> {
        let name = name.into();
        if !is_identifier_tail(&name) {
            return Err(Error::MappingName { name });
        }
        check_duplicates(&name, &entries)?;
        check_slot_names(&name, &entries)?;
        Ok(Self { name, entries })
    }

    /// Parse and validate mapping text.
    pub fn from_source(name: impl Into<String>, source: &str, config: &Config) -> Result<Self> {
        let name = name.into();
        if !is_identifier_tail(&name) {
            return Err(Error::MappingName { name });
        }
        let entries = parse(&name, source, config)?;
        Self::new(name, entries)
    }

    /// Read, parse and validate a mapping file.
    ///
    /// The mapping is named after the file stem.
    pub fn load(path: &Path, config: &Config) -> Result<Self> {
        let name = mapping_name(path);
        let source = fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
        Self::from_source(name, &source, config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mapping name derived from a path: the file name without extension.
pub fn mapping_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
