//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! the `Into<*Args>` impls resolve `--color` against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;
use strelka_lib::SpanKind;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::run_common::{Limits, SourceInput};
use crate::commands::trace::TraceArgs;
use crate::commands::tree::TreeArgs;

/// Input and limit flags every command carries.
pub struct InputParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub fuel: Option<u32>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            fuel: m.get_one::<u32>("fuel").copied(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: ColorChoice::from_flag(m.get_one::<String>("color").map(String::as_str)),
        }
    }

    fn source(&self) -> SourceInput {
        SourceInput {
            path: self.source_path.clone(),
            text: self.source_text.clone(),
        }
    }

    fn limits(&self) -> Limits {
        Limits {
            fuel: self.fuel,
            recursion_limit: self.recursion_limit,
        }
    }
}

pub struct TraceParams {
    pub input: InputParams,
    pub rule: Option<SpanKind>,
    pub json: bool,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            rule: m.get_one::<SpanKind>("rule").copied(),
            json: m.get_flag("json"),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            source: p.input.source(),
            limits: p.input.limits(),
            rule: p.rule,
            json: p.json,
            color: p.input.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub input: InputParams,
    pub raw: bool,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            raw: m.get_flag("raw"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source: p.input.source(),
            limits: p.input.limits(),
            raw: p.raw,
            color: p.input.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: p.input.source(),
            limits: p.input.limits(),
            color: p.input.color.should_colorize(),
        }
    }
}
