use std::path::PathBuf;

use dispatchgen_compiler::{Config, Generator, Identifier, Plan, Strategy};
use serde::Serialize;

use super::run_common::Reporter;

pub struct ResolveArgs {
    pub strategy: Strategy,
    pub mapping: PathBuf,
    pub identifiers: Vec<Identifier>,
    pub config: Config,
    pub color: bool,
}

/// One lookup result; `handler` and `slot` are null on a miss.
#[derive(Debug, Serialize)]
pub struct Resolution<'a> {
    pub identifier: String,
    pub handler: Option<&'a str>,
    pub slot: Option<&'a str>,
}

pub fn resolve<'a>(plan: &'a Plan, identifier: Identifier) -> Resolution<'a> {
    let slot = plan.lookup(identifier);
    Resolution {
        identifier: format!("{identifier:#x}"),
        handler: slot.map(|s| s.type_name.as_str()),
        slot: slot.map(|s| s.name.as_str()),
    }
}

pub fn run(args: ResolveArgs) {
    let reporter = Reporter::new(args.color, 0);
    let generator = Generator::new(args.config, "");

    let plan = generator
        .load(&args.mapping)
        .and_then(|mapping| Plan::build(args.strategy, &mapping, generator.config()))
        .unwrap_or_else(|e| reporter.fail(e));

    for &identifier in &args.identifiers {
        match serde_json::to_string(&resolve(&plan, identifier)) {
            Ok(json) => println!("{}", json),
            Err(e) => reporter.fail(format_args!("JSON serialization failed: {e}")),
        }
    }
}
