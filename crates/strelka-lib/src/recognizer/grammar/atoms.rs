//! Lexical classes and literals.
//!
//! Single-character classes start exactly at the cursor. Identifiers and
//! literals skip leading whitespace but nothing inside them may be separated
//! by whitespace: `3 . 5` is not a float.

use strelka_core::chars::{
    is_ascii_digit, is_ascii_letter, is_cyrillic_letter, is_identifier_constituent,
};

use super::is_reserved;
use crate::diagnostics::Expected;
use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

const UNDERSCORE: u32 = b'_' as u32;

impl Recognizer<'_> {
    /// ASCII letter or `_`.
    pub(crate) fn parse_letter(&mut self) -> bool {
        self.raw_rule(SpanKind::Letter, |p| {
            p.expect_char(Expected::Letter, |c| is_ascii_letter(c) || c == UNDERSCORE)
        })
    }

    /// Basic Cyrillic letter or `_`.
    pub(crate) fn parse_ru_letter(&mut self) -> bool {
        self.raw_rule(SpanKind::RuLetter, |p| {
            p.expect_char(Expected::CyrillicLetter, |c| {
                is_cyrillic_letter(c) || c == UNDERSCORE
            })
        })
    }

    pub(crate) fn parse_digit(&mut self) -> bool {
        self.raw_rule(SpanKind::Digit, |p| {
            p.expect_char(Expected::Digit, is_ascii_digit)
        })
    }

    /// One whole codepoint, whatever it is.
    pub(crate) fn parse_any(&mut self) -> bool {
        self.raw_rule(SpanKind::Any, |p| p.expect_char(Expected::AnyChar, |_| true))
    }

    pub(crate) fn parse_space(&mut self) -> bool {
        self.raw_rule(SpanKind::Space, |p| {
            p.expect_char(Expected::Space, |c| c == u32::from(b' ') || c == u32::from(b'\t'))
        })
    }

    pub(crate) fn parse_newline(&mut self) -> bool {
        self.raw_rule(SpanKind::Newline, |p| {
            for newline in ["\r\n", "\n", "\r"] {
                if p.rest().starts_with(newline) {
                    p.cursor = p.cursor.advance_by(p.bytes, newline.len());
                    return true;
                }
            }
            p.note_failure(Expected::Newline);
            false
        })
    }

    pub(crate) fn parse_identifier(&mut self) -> bool {
        self.rule(SpanKind::Identifier, |p| {
            let start = p.cursor.offset();
            let starts_word = p.expect_char(Expected::Identifier, |c| {
                is_identifier_constituent(c) && !is_ascii_digit(c)
            });
            if !starts_word {
                return false;
            }
            while p.eat_char(is_identifier_constituent) {}

            if is_reserved(&p.source[start..p.cursor.offset()]) {
                p.note_failure_at(start, Expected::Identifier);
                return false;
            }
            true
        })
    }

    pub(crate) fn parse_integer_literal(&mut self) -> bool {
        self.rule(SpanKind::IntegerLiteral, |p| {
            p.parse_digit() && p.repeat(Self::parse_digit)
        })
    }

    /// `digits "." digits`, both runs non-empty.
    pub(crate) fn parse_float_literal(&mut self) -> bool {
        self.rule(SpanKind::FloatLiteral, |p| {
            p.parse_digit()
                && p.repeat(Self::parse_digit)
                && p.text_tight(".")
                && p.parse_digit()
                && p.repeat(Self::parse_digit)
        })
    }

    /// Exactly one identifier character between single quotes.
    pub(crate) fn parse_char_literal(&mut self) -> bool {
        self.rule(SpanKind::CharLiteral, |p| {
            p.text_tight("'")
                && p.expect_char(Expected::LiteralChar, is_identifier_constituent)
                && p.text_tight("'")
        })
    }

    /// Identifier characters only; spaces and punctuation end the literal.
    pub(crate) fn parse_string_literal(&mut self) -> bool {
        self.rule(SpanKind::StringLiteral, |p| {
            if !p.text_tight("\"") {
                return false;
            }
            while p.eat_char(is_identifier_constituent) {}
            if !p.text_tight("\"") {
                p.note_failure(Expected::LiteralChar);
                return false;
            }
            true
        })
    }

    pub(crate) fn parse_bool_literal(&mut self) -> bool {
        self.rule(SpanKind::BoolLiteral, |p| {
            p.keyword("true") || p.keyword("false")
        })
    }

    /// Float before integer, so `3.5` is never split after the `3`.
    pub(crate) fn parse_literal(&mut self) -> bool {
        self.rule(SpanKind::Literal, |p| {
            p.choice(&[
                Self::parse_float_literal,
                Self::parse_integer_literal,
                Self::parse_string_literal,
                Self::parse_char_literal,
                Self::parse_bool_literal,
            ])
        })
    }
}
