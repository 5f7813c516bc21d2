//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use dispatchgen_compiler::{Config, Identifier, IdentifierWidth, Indent, Strategy};

use super::ColorChoice;
use super::args::parse_width;
use crate::commands::check::CheckArgs;
use crate::commands::clean::CleanArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::{GenerateArgs, Mode};
use crate::commands::resolve::ResolveArgs;

/// Flags that end up in the compiler `Config`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub width: IdentifierWidth,
    pub indent: Indent,
    pub marker: Option<String>,
    pub max_table_len: Option<u64>,
}

impl ConfigParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            width: m
                .get_one::<String>("width")
                .map(|s| parse_width(s))
                .unwrap_or_default(),
            indent: m.get_one::<Indent>("indent").copied().unwrap_or_default(),
            marker: m.get_one::<String>("marker").cloned(),
            max_table_len: m.get_one::<u64>("max_table_len").copied(),
        }
    }
}

impl From<ConfigParams> for Config {
    fn from(p: ConfigParams) -> Self {
        let config = Config::new()
            .width(p.width)
            .indent(p.indent)
            .marker(p.marker);
        match p.max_table_len {
            Some(limit) => config.max_table_len(limit),
            None => config,
        }
    }
}

pub struct GenerateParams {
    pub strategy: Strategy,
    pub mapping: PathBuf,
    pub out_dir: PathBuf,
    pub config: ConfigParams,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl GenerateParams {
    /// `strategy` comes from the subcommand name (`if`, `switch`, `array`).
    pub fn from_matches(strategy: Strategy, m: &ArgMatches) -> Self {
        Self {
            strategy,
            mapping: required(m, "mapping"),
            out_dir: out_dir(m),
            config: ConfigParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            mode: Mode::One {
                strategy: p.strategy,
                mapping: p.mapping,
            },
            out_dir: p.out_dir,
            config: p.config.into(),
            verbosity: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AllParams {
    pub mapping_dir: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub config: ConfigParams,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl AllParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            mapping_dir: m.get_one::<PathBuf>("mapping_dir").cloned(),
            out_dir: out_dir(m),
            config: ConfigParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<AllParams> for GenerateArgs {
    fn from(p: AllParams) -> Self {
        Self {
            mode: Mode::All { dir: p.mapping_dir },
            out_dir: p.out_dir,
            config: p.config.into(),
            verbosity: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CleanParams {
    pub out_dir: PathBuf,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl CleanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            out_dir: out_dir(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CleanParams> for CleanArgs {
    fn from(p: CleanParams) -> Self {
        Self {
            out_dir: p.out_dir,
            verbosity: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub mapping: PathBuf,
    pub config: ConfigParams,
    pub verbose: u8,
    pub color: ColorChoice,
    // Note: out_dir, indent, max_table_len are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            mapping: required(m, "mapping"),
            config: ConfigParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            mapping: p.mapping,
            config: p.config.into(),
            verbosity: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub strategy: Strategy,
    pub mapping: PathBuf,
    pub config: ConfigParams,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            strategy: parse_strategy(m),
            mapping: required(m, "mapping"),
            config: ConfigParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            strategy: p.strategy,
            mapping: p.mapping,
            config: p.config.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub strategy: Strategy,
    pub mapping: PathBuf,
    pub identifiers: Vec<Identifier>,
    pub config: ConfigParams,
    pub color: ColorChoice,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            strategy: parse_strategy(m),
            mapping: required(m, "mapping"),
            identifiers: m
                .get_many::<Identifier>("identifiers")
                .map(|ids| ids.copied().collect())
                .unwrap_or_default(),
            config: ConfigParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            strategy: p.strategy,
            mapping: p.mapping,
            identifiers: p.identifiers,
            config: p.config.into(),
            color: p.color.should_colorize(),
        }
    }
}

/// Value of an argument clap has already required.
fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> T {
    match m.get_one::<T>(id) {
        Some(value) => value.clone(),
        None => unreachable!("clap should have required '{id}'"),
    }
}

fn out_dir(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("out_dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_strategy(m: &ArgMatches) -> Strategy {
    let name: String = required(m, "strategy");
    match Strategy::from_name(&name) {
        Some(strategy) => strategy,
        None => unreachable!("clap should have rejected strategy '{name}'"),
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
