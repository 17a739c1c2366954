//! Print the span trace of a program or of one production.

use std::fmt::Write;

use strelka_core::Colors;
use strelka_lib::{Span, SpanKind};

use super::run_common::{self, Limits, SourceInput};

pub struct TraceArgs {
    pub source: SourceInput,
    pub limits: Limits,
    pub rule: Option<SpanKind>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let source = run_common::load_source_or_exit(&args.source);
    let mut recognizer = run_common::recognizer(&source, args.limits);

    let matched = match args.rule {
        Some(kind) => recognizer.parse_rule(kind),
        None => recognizer.parse_program(),
    };
    if !matched {
        run_common::exit_with_failure(&recognizer, &args.source, args.color);
    }

    let spans = recognizer.tokens();
    if args.json {
        let json = serde_json::to_string_pretty(spans).expect("spans serialize to JSON");
        println!("{json}");
        return;
    }
    print!("{}", render_spans(spans, Colors::new(args.color)));
}

/// `Parsed spans: N`, then one `KIND @row:col 'text'` line per span.
pub fn render_spans(spans: &[Span<'_>], colors: Colors) -> String {
    let mut out = String::new();
    writeln!(out, "Parsed spans: {}", spans.len()).expect("String write never fails");
    for span in spans {
        writeln!(
            out,
            "{blue}{kind}{reset} {dim}@{row}:{column}{reset} {green}'{text}'{reset}",
            kind = span.kind,
            row = span.row,
            column = span.column,
            text = span.text,
            blue = colors.blue,
            green = colors.green,
            dim = colors.dim,
            reset = colors.reset,
        )
        .expect("String write never fails");
    }
    out
}
