//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every mapping-reading command accepts the full set of generation flags,
//! with the ones it ignores hidden from `--help`.

use clap::Command;
use dispatchgen_compiler::Strategy;

use super::args::*;

/// Flags that decide how mappings are read.
fn with_mapping_args(cmd: Command) -> Command {
    cmd.arg(width_arg()).arg(marker_arg())
}

/// Flags that decide what is emitted and where.
fn with_output_args(cmd: Command) -> Command {
    cmd.arg(out_dir_arg())
        .arg(indent_arg())
        .arg(max_table_len_arg())
}

/// Output flags accepted but unused (commands that don't write).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(out_dir_arg().hide(true))
        .arg(indent_arg().hide(true))
        .arg(max_table_len_arg().hide(true))
}

fn with_reporting_args(cmd: Command) -> Command {
    cmd.arg(color_arg()).arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dispatchgen")
        .about("Generate switch, if-chain and sparse-array dispatchers from identifier mappings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(strategy_command(Strategy::Chain))
        .subcommand(strategy_command(Strategy::Switch))
        .subcommand(strategy_command(Strategy::Array))
        .subcommand(all_command())
        .subcommand(clean_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(resolve_command())
}

/// Generate one strategy for one mapping (`if`, `switch`, `array`).
pub fn strategy_command(strategy: Strategy) -> Command {
    let about = match strategy {
        Strategy::Switch => "Generate a switch dispatcher for a mapping",
        Strategy::Chain => "Generate an if/else-if chain dispatcher for a mapping",
        Strategy::Array => "Generate a sparse-array dispatcher for a mapping",
    };
    let name = strategy.name();
    let cmd = Command::new(name)
        .about(about)
        .after_help(format!(
            "EXAMPLES:
  dispatchgen {name} input/analyzers/zeek            # writes include/ and src/ under .
  dispatchgen {name} zeek -o build --indent 4        # custom root, 4-space indent
  dispatchgen {name} zeek --marker '# ANALYZERS'     # require the marker line"
        ))
        .arg(mapping_arg());

    with_reporting_args(with_output_args(with_mapping_args(cmd)))
}

/// Generate every strategy for every mapping in a directory.
pub fn all_command() -> Command {
    let cmd = Command::new("all")
        .about("Generate all strategies for every mapping in a directory")
        .after_help(
            r#"EXAMPLES:
  dispatchgen all                        # mappings from ./input/analyzers
  dispatchgen all mappings/ -o build     # explicit directory and output root"#,
        )
        .arg(mapping_dir_arg());

    with_reporting_args(with_output_args(with_mapping_args(cmd)))
}

/// Remove previously generated units.
pub fn clean_command() -> Command {
    let cmd = Command::new("clean")
        .about("Remove generated units (Generated{If,Switch,Array}*)")
        .arg(out_dir_arg());

    with_reporting_args(cmd)
}

/// Validate a mapping without generating anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a mapping")
        .after_help(
            r#"EXAMPLES:
  dispatchgen check zeek                 # silent on success
  dispatchgen check zeek --width u8      # also require 8-bit identifiers"#,
        )
        .arg(mapping_arg());

    with_reporting_args(with_hidden_output_args(with_mapping_args(cmd)))
}

/// Print the generated units instead of writing them.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the generated units of one strategy")
        .after_help(
            r#"EXAMPLES:
  dispatchgen dump array zeek            # interface, then implementation
  dispatchgen dump switch zeek --indent 2"#,
        )
        .arg(strategy_arg())
        .arg(mapping_arg())
        .arg(indent_arg())
        .arg(max_table_len_arg())
        .arg(out_dir_arg().hide(true))
        .arg(color_arg());

    with_mapping_args(cmd)
}

/// Resolve identifiers through a strategy's lookup plan.
pub fn resolve_command() -> Command {
    let cmd = Command::new("resolve")
        .about("Look up identifiers and print one JSON record per identifier")
        .after_help(
            r#"EXAMPLES:
  dispatchgen resolve array zeek 800 86dd 1234
  dispatchgen resolve if zeek 0x6"#,
        )
        .arg(strategy_arg())
        .arg(mapping_arg())
        .arg(identifiers_arg())
        .arg(max_table_len_arg())
        .arg(out_dir_arg().hide(true))
        .arg(indent_arg().hide(true))
        .arg(color_arg());

    with_mapping_args(cmd)
}
