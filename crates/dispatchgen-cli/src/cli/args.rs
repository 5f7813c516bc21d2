//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so generation flags are defined once and reused (hidden where a command
//! ignores them).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use dispatchgen_compiler::mapping::parse_identifier;
use dispatchgen_compiler::{Identifier, IdentifierWidth, Indent};

/// Mapping file (positional, required).
pub fn mapping_arg() -> Arg {
    Arg::new("mapping")
        .value_name("MAPPING")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Mapping file (`<hex-id> <Handler>` per line after a marker line)")
}

/// Mapping directory for `all` (positional, optional).
pub fn mapping_dir_arg() -> Arg {
    Arg::new("mapping_dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory of mapping files [default: <OUT_DIR>/input/analyzers]")
}

/// Strategy selector for dump/resolve (positional).
pub fn strategy_arg() -> Arg {
    Arg::new("strategy")
        .value_name("STRATEGY")
        .required(true)
        .value_parser(["if", "switch", "array"])
        .help("Dispatch strategy")
}

/// Identifiers to look up (positional, one or more).
pub fn identifiers_arg() -> Arg {
    Arg::new("identifiers")
        .value_name("ID")
        .required(true)
        .num_args(1..)
        .value_parser(parse_hex_identifier)
        .help("Hexadecimal identifiers to resolve")
}

/// Output root (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value(".")
        .value_parser(value_parser!(PathBuf))
        .help("Output root (units go to include/ and src/ below it)")
}

/// Identifier width (--width).
pub fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_name("WIDTH")
        .default_value("u16")
        .value_parser(["u8", "u16", "u32"])
        .help("Width of identifier_t; wider identifiers are rejected")
}

/// Indentation of generated code (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("INDENT")
        .default_value("tab")
        .value_parser(parse_indent)
        .help("Indentation: `tab` or a number of spaces")
}

/// Required marker on line 1 (--marker).
pub fn marker_arg() -> Arg {
    Arg::new("marker")
        .long("marker")
        .value_name("TEXT")
        .help("Require the first line of each mapping to contain TEXT")
}

/// Sparse table limit (--max-table-len).
pub fn max_table_len_arg() -> Arg {
    Arg::new("max_table_len")
        .long("max-table-len")
        .value_name("N")
        .value_parser(value_parser!(u64).range(1..))
        .help("Largest sparse table the array strategy may emit [default: 16777216]")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v lists files, -vv adds mapping details)")
}

pub(super) fn parse_width(name: &str) -> IdentifierWidth {
    IdentifierWidth::from_name(name).unwrap_or_default()
}

fn parse_indent(value: &str) -> Result<Indent, String> {
    match Indent::from_name(value) {
        Some(Indent::Spaces(0)) | None => {
            Err("expected `tab` or a number of spaces (1-255)".to_string())
        }
        Some(indent) => Ok(indent),
    }
}

fn parse_hex_identifier(value: &str) -> Result<Identifier, String> {
    parse_identifier(value, IdentifierWidth::U32).map_err(|e| e.to_string())
}
