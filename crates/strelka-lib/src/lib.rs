//! Strelka: a backtracking recognizer for the strelka language.
//!
//! Recognition produces a flat, post-order trace of labeled spans: one per
//! matched production, each carrying its row, byte column and exact text.
//!
//! # Example
//!
//! ```
//! use strelka_lib::SpanKind;
//!
//! let trace = strelka_lib::parse("repr id(x:i32) -> i32 { return x; }").expect("valid program");
//! let root = trace.root().expect("accepted programs end with PROGRAM");
//! assert_eq!(root.kind, SpanKind::Program);
//! assert_eq!(trace.of_kind(SpanKind::Param).count(), 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod recognizer;
pub mod tree;


pub use diagnostics::{Diagnostic, DiagnosticPrinter, Expected};
pub use recognizer::{Position, Recognizer, Span, SpanKind, Trace};

/// Reasons a program yields no trace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not a program.
    #[error("invalid program at {0}")]
    Rejected(Diagnostic),

    /// Execution fuel exhausted (too many production invocations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion limit exceeded (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Recognizes `source` as a whole program with no limits.
pub fn parse(source: &str) -> Result<Trace<'_>> {
    Recognizer::new(source).parse()
}
