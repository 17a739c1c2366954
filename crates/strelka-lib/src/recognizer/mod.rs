//! The backtracking recognizer.
//!
//! # Architecture
//!
//! There is no separate tokenizer. Productions read bytes straight from the
//! source through a [`Cursor`], which is a plain `Copy` value: a snapshot is
//! a copy, and backing out of an alternative is an assignment plus a
//! truncation of the span vector.
//!
//! - Every production either fails with no observable effect, or succeeds and
//!   appends exactly one [`Span`] after the spans of everything it called.
//!   The resulting sequence is a post-order walk of the parse tree.
//! - Ordered choice commits to the first alternative that matches; repetition
//!   stops at the first failed attempt and is never an error by itself.
//! - `program` is all-or-nothing: the input must be consumed entirely.
//!
//! Failure is a `bool`. On the side, the recognizer remembers the furthest
//! offset at which a terminal failed and what it expected there, which is all
//! a [`Diagnostic`](crate::diagnostics::Diagnostic) needs.

pub mod cursor;
pub mod kind;
pub mod span;

mod core;
mod grammar;
mod invariants;


pub use self::core::{Checkpoint, Recognizer};
pub use cursor::{Cursor, Position};
pub use grammar::{PRIMITIVE_TYPES, RESERVED_WORDS, is_reserved};
pub use kind::{SpanKind, UnknownSpanKind};
pub use span::{Span, Trace};
