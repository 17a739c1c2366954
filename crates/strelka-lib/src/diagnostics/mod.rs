//! Furthest-failure diagnostics.
//!
//! Recognition itself only answers yes or no. While it runs, the recognizer
//! keeps the furthest byte offset at which a terminal failed to match and
//! the terminals it tried there. After a rejected program that is the most
//! useful place to point at.

mod printer;


use std::fmt;

use serde::Serialize;

pub use printer::DiagnosticPrinter;

use crate::recognizer::Position;

/// One terminal the recognizer tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expected {
    Text(&'static str),
    Keyword(&'static str),
    Identifier,
    Digit,
    /// A character allowed in a char or string literal body.
    LiteralChar,
    Letter,
    CyrillicLetter,
    AnyChar,
    Space,
    Newline,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Text(text) => write!(f, "`{text}`"),
            Expected::Keyword(word) => write!(f, "`{word}`"),
            Expected::Identifier => f.write_str("identifier"),
            Expected::Digit => f.write_str("digit"),
            Expected::LiteralChar => f.write_str("letter, digit or `_`"),
            Expected::Letter => f.write_str("letter"),
            Expected::CyrillicLetter => f.write_str("Cyrillic letter"),
            Expected::AnyChar => f.write_str("any character"),
            Expected::Space => f.write_str("space"),
            Expected::Newline => f.write_str("line break"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Why a program was rejected: the furthest position reached and what
/// would have let recognition continue there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub position: Position,
    pub expected: Vec<Expected>,
}

impl Diagnostic {
    pub fn new(position: Position, expected: Vec<Expected>) -> Self {
        Self { position, expected }
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn row(&self) -> u32 {
        self.position.row
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn message(&self) -> String {
        match self.expected.as_slice() {
            [] => "unexpected input".to_owned(),
            [only] => format!("expected {only}"),
            many => {
                let list: Vec<String> = many.iter().map(ToString::to_string).collect();
                format!("expected one of {}", list.join(", "))
            }
        }
    }

    pub fn printer(&self) -> DiagnosticPrinter<'_, '_> {
        DiagnosticPrinter::new(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.row(), self.column(), self.message())
    }
}
