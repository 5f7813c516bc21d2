use std::path::PathBuf;

use dispatchgen_compiler::{Config, Generator, Strategy};

use super::run_common::Reporter;

pub struct DumpArgs {
    pub strategy: Strategy,
    pub mapping: PathBuf,
    pub config: Config,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let reporter = Reporter::new(args.color, 0);
    let indent = args.config.get_indent();
    // Relative root: headers show paths as they would appear under --out-dir.
    let generator = Generator::new(args.config, "");

    let artifact = generator
        .render(&args.mapping, args.strategy)
        .unwrap_or_else(|e| reporter.fail(e));

    let c = reporter.colors();
    let layout = generator.layout();
    println!(
        "{}// {}{}",
        c.dim,
        layout.interface_path(&artifact.class_name).display(),
        c.reset
    );
    print!("{}", artifact.render_interface(indent));
    println!();
    println!(
        "{}// {}{}",
        c.dim,
        layout.implementation_path(&artifact.class_name).display(),
        c.reset
    );
    print!("{}", artifact.render_implementation(indent));
}
