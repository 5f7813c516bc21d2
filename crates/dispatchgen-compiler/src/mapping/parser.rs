//! Line parser for mapping files.

use dispatchgen_core::utils::is_identifier;
use dispatchgen_core::{Identifier, IdentifierWidth};

use super::Entry;
use crate::{Config, Error, FormatError, Result};

/// Parse mapping text into entries, in file order.
///
/// Line 1 is the format marker and is skipped (checked only when
/// `Config::marker` is set). Every other line must hold exactly two
/// whitespace-separated fields. Duplicates are *not* rejected here, see
/// [`super::check_duplicates`].
pub fn parse(mapping: &str, source: &str, config: &Config) -> Result<Vec<Entry>> {
    let format_error = |line: usize, kind: FormatError| Error::Format {
        mapping: mapping.to_string(),
        line,
        kind,
    };

    let mut lines = source.lines().enumerate().map(|(i, text)| (i + 1, text));

    let marker_line = lines.next().map(|(_, text)| text);
    if let Some(expected) = &config.marker
        && !marker_line.is_some_and(|text| text.contains(expected.as_str()))
    {
        return Err(format_error(
            1,
            FormatError::MissingMarker {
                expected: expected.clone(),
            },
        ));
    }

    let mut entries = Vec::new();
    for (line, text) in lines {
        let (identifier, type_name) =
            parse_line(text, config.width).map_err(|kind| format_error(line, kind))?;
        entries.push(Entry::new(identifier, type_name, line));
    }
    Ok(entries)
}

fn parse_line(
    text: &str,
    width: IdentifierWidth,
) -> std::result::Result<(Identifier, &str), FormatError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[id_field, type_name] = fields.as_slice() else {
        return Err(if fields.is_empty() {
            FormatError::EmptyLine
        } else {
            FormatError::FieldCount {
                found: fields.len(),
            }
        });
    };

    let identifier = parse_identifier(id_field, width)?;
    if !is_identifier(type_name) {
        return Err(FormatError::InvalidHandlerName {
            name: type_name.to_string(),
        });
    }
    Ok((identifier, type_name))
}

/// Parse a base-16 identifier, with or without `0x`, bounded by `width`.
pub fn parse_identifier(
    field: &str,
    width: IdentifierWidth,
) -> std::result::Result<Identifier, FormatError> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);

    // from_str_radix would also take a sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidHex {
            field: field.to_string(),
        });
    }

    match u64::from_str_radix(digits, 16) {
        Ok(value) if width.contains(value) => Ok(value as Identifier),
        _ => Err(FormatError::IdentifierTooWide {
            field: field.to_string(),
            width,
        }),
    }
}
