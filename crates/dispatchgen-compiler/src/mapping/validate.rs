//! Whole-mapping checks run after parsing.

use std::collections::HashMap;
use std::collections::hash_map;

use dispatchgen_core::Identifier;

use super::Entry;
use crate::naming::CanonicalName;
use crate::{Error, Result};

/// Reject a mapping that lists the same identifier twice.
///
/// Reports the second occurrence and the line of the first.
pub fn check_duplicates(mapping: &str, entries: &[Entry]) -> Result<()> {
    let mut seen: HashMap<Identifier, usize> = HashMap::with_capacity(entries.len());
    for entry in entries {
        match seen.entry(entry.identifier) {
            hash_map::Entry::Vacant(e) => {
                e.insert(entry.line);
            }
            hash_map::Entry::Occupied(e) => {
                return Err(Error::DuplicateIdentifier {
                    mapping: mapping.to_string(),
                    identifier: entry.identifier,
                    line: entry.line,
                    first_line: *e.get(),
                });
            }
        }
    }
    Ok(())
}

/// Reject slot names that clash with each other or with generated code.
///
/// Distinct identifiers can still produce the same name (`A1`/`0x1` and
/// `A`/`0x11` both give `a11`), and a name can spell a C++ keyword
/// (`I`/`0xf` gives `if`).
pub fn check_slot_names(mapping: &str, entries: &[Entry]) -> Result<()> {
    let mut seen: HashMap<CanonicalName, usize> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let name = CanonicalName::of(entry);
        if name.is_reserved() {
            return Err(Error::ReservedName {
                mapping: mapping.to_string(),
                name: name.into_string(),
                line: entry.line,
            });
        }
        if let Some(&first_line) = seen.get(&name) {
            return Err(Error::NameCollision {
                mapping: mapping.to_string(),
                name: name.into_string(),
                line: entry.line,
                first_line,
            });
        }
        seen.insert(name, entry.line);
    }
    Ok(())
}
