use std::path::PathBuf;

use dispatchgen_compiler::{Config, Generator};

use super::run_common::Reporter;

pub struct CleanArgs {
    pub out_dir: PathBuf,
    pub verbosity: u8,
    pub color: bool,
}

pub fn run(args: CleanArgs) {
    let reporter = Reporter::new(args.color, args.verbosity);
    let generator = Generator::new(Config::default(), args.out_dir);

    let removed = generator.clean().unwrap_or_else(|e| reporter.fail(e));
    for path in &removed {
        reporter.removed(path);
    }
    if removed.is_empty() {
        reporter.note(1, "nothing to clean");
    }
}
