//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so `trace`, `tree` and `check` read their input and limits the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use strelka_lib::SpanKind;

/// Program file (positional, `-` for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Program file (use \"-\" for stdin)")
}

/// Inline program text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline program text")
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

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum number of production invocations (unlimited by default)")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum production nesting depth (unlimited by default)")
}

/// Single production to run instead of a whole program (--rule).
pub fn rule_arg() -> Arg {
    Arg::new("rule")
        .long("rule")
        .value_name("KIND")
        .value_parser(|s: &str| s.parse::<SpanKind>())
        .help("Run one production (e.g. EXPR, arrow-line) instead of PROGRAM")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print spans as a JSON array")
}

/// Include gap tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include text and whitespace between child spans")
}
