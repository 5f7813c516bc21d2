use std::path::PathBuf;

use dispatchgen_compiler::generate::check_file;
use dispatchgen_compiler::{Config, Mapping};

use super::run_common::Reporter;

pub struct CheckArgs {
    pub mapping: PathBuf,
    pub config: Config,
    pub verbosity: u8,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let reporter = Reporter::new(args.color, args.verbosity);

    let mapping = check_file(&args.mapping)
        .and_then(|()| Mapping::load(&args.mapping, &args.config))
        .unwrap_or_else(|e| reporter.fail(e));

    let entries = mapping.entries();
    match (
        entries.iter().map(|e| e.identifier).min(),
        entries.iter().map(|e| e.identifier).max(),
    ) {
        (Some(lo), Some(hi)) => reporter.note(
            1,
            format_args!(
                "{}: {} entries, identifiers {lo:#x}..={hi:#x}",
                mapping.name(),
                entries.len()
            ),
        ),
        _ => reporter.note(1, format_args!("{}: no entries", mapping.name())),
    }

    // Silent on success (like cargo check)
}
