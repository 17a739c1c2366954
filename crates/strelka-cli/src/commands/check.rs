use super::run_common::{self, Limits, SourceInput};

pub struct CheckArgs {
    pub source: SourceInput,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = run_common::load_source_or_exit(&args.source);
    let mut recognizer = run_common::recognizer(&source, args.limits);

    if !recognizer.parse_program() {
        run_common::exit_with_failure(&recognizer, &args.source, args.color);
    }

    // Silent on success (like cargo check)
}
