//! Command builders for the CLI.
//!
//! Every command takes the same input and limit flags; only the output
//! options differ.

use clap::Command;

use super::args::*;

/// Input and limit flags shared by all commands.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg())
        .arg(source_text_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("strelka")
        .about("Recognizer for the strelka language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(trace_command())
        .subcommand(tree_command())
        .subcommand(check_command())
}

/// Print the span trace of a program.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Print the span trace of a program")
        .override_usage(
            "\
  strelka trace <FILE>
  strelka trace -s <TEXT>
  strelka trace -s <TEXT> --rule <KIND>",
        )
        .after_help(
            r#"EXAMPLES:
  strelka trace main.str                   # one line per span
  strelka trace main.str --json            # spans as JSON
  strelka trace -s 'a + b * 2' --rule expr # a single production
  cat main.str | strelka trace -           # from stdin"#,
        )
        .arg(rule_arg())
        .arg(json_arg());

    with_input_args(cmd)
}

/// Print the nested outline rebuilt from the trace.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Print the nested outline of a program")
        .override_usage(
            "\
  strelka tree <FILE>
  strelka tree -s <TEXT> [--raw]",
        )
        .after_help(
            r#"EXAMPLES:
  strelka tree main.str                  # nested spans
  strelka tree main.str --raw            # with punctuation and whitespace
  strelka tree -s 'repr f() {}'          # inline program"#,
        )
        .arg(raw_arg());

    with_input_args(cmd)
}

/// Validate a program.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a program")
        .override_usage(
            "\
  strelka check <FILE>
  strelka check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  strelka check main.str                 # silent on success
  strelka check -s '#g { a -> b }'       # prints where it stopped"#,
        );

    with_input_args(cmd)
}
