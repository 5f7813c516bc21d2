mod cli;
mod commands;

use clap::ArgMatches;
use cli::{
    AllParams, CheckParams, CleanParams, DumpParams, GenerateParams, ResolveParams, build_cli,
};
use dispatchgen_compiler::Strategy;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("if", m)) => generate(Strategy::Chain, m),
        Some(("switch", m)) => generate(Strategy::Switch, m),
        Some(("array", m)) => generate(Strategy::Array, m),
        Some(("all", m)) => {
            let params = AllParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("clean", m)) => {
            let params = CleanParams::from_matches(m);
            commands::clean::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("resolve", m)) => {
            let params = ResolveParams::from_matches(m);
            commands::resolve::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn generate(strategy: Strategy, m: &ArgMatches) {
    let params = GenerateParams::from_matches(strategy, m);
    commands::generate::run(params.into());
}
