//! Print the outline rebuilt from a program's trace.

use super::run_common::{self, Limits, SourceInput};

pub struct TreeArgs {
    pub source: SourceInput,
    pub limits: Limits,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: TreeArgs) {
    let source = run_common::load_source_or_exit(&args.source);
    let mut recognizer = run_common::recognizer(&source, args.limits);

    if !recognizer.parse_program() {
        run_common::exit_with_failure(&recognizer, &args.source, args.color);
    }

    // An accepted program always nests under its PROGRAM span.
    let root = strelka_lib::tree::build(recognizer.tokens())
        .expect("accepted program has a single root");
    print!("{}", strelka_lib::tree::dump(&root, args.raw));
}
