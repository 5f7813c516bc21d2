use std::path::PathBuf;

use dispatchgen_compiler::{Config, Generator, Strategy};

use super::run_common::Reporter;

/// What to generate.
pub enum Mode {
    /// One strategy for one mapping file.
    One { strategy: Strategy, mapping: PathBuf },
    /// Every strategy for every mapping in a directory
    /// (`<out-dir>/input/analyzers` when not given).
    All { dir: Option<PathBuf> },
}

pub struct GenerateArgs {
    pub mode: Mode,
    pub out_dir: PathBuf,
    pub config: Config,
    pub verbosity: u8,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let reporter = Reporter::new(args.color, args.verbosity);
    let generator = Generator::new(args.config, args.out_dir);

    let result = match args.mode {
        Mode::One { strategy, mapping } => generator.generate(&mapping, &[strategy]),
        Mode::All { dir } => {
            let dir = dir.unwrap_or_else(|| generator.layout().mapping_dir());
            generator.generate_dir(&dir)
        }
    };
    let written = result.unwrap_or_else(|e| reporter.fail(e));

    for artifact in &written {
        reporter.written(artifact);
    }
}
