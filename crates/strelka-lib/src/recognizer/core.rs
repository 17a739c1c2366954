//! Recognizer state and the backtracking primitives every production uses.

use strelka_core::chars::is_identifier_constituent;
use strelka_core::decode_utf8;
use tracing::debug;

use super::cursor::{Cursor, Position};
use super::kind::SpanKind;
use super::span::{Span, Trace};
use crate::Error;
use crate::diagnostics::{Diagnostic, Expected};

/// Everything a failed probe has to undo: the cursor and the span count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub cursor: Cursor,
    pub spans_len: usize,
}

/// Backtracking recognizer over one program text.
///
/// Every production is a method returning `bool`. A production that fails
/// leaves the cursor and the span sequence exactly as it found them; one that
/// succeeds appends exactly one span covering the text it consumed, after the
/// spans of everything it called.
pub struct Recognizer<'src> {
    pub(super) source: &'src str,
    pub(super) bytes: &'src [u8],
    pub(super) cursor: Cursor,
    pub(super) spans: Vec<Span<'src>>,
    pub(super) depth: u32,
    furthest_offset: usize,
    expected: Vec<Expected>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_limit: Option<u32>,
    fatal_error: Option<Error>,
    last_outcome: Option<bool>,
}

impl<'src> Recognizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            cursor: Cursor::START,
            spans: Vec::with_capacity(source.len() / 2),
            depth: 0,
            furthest_offset: 0,
            expected: Vec::new(),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_limit: None,
            fatal_error: None,
            last_outcome: None,
        }
    }

    /// Caps the number of production invocations of one parse.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    /// Caps how deeply productions may nest.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Clears the cursor, the spans, the failure notes and the fuel counters.
    pub fn reset(&mut self) {
        self.cursor = Cursor::START;
        self.spans.clear();
        self.depth = 0;
        self.furthest_offset = 0;
        self.expected.clear();
        self.exec_fuel_remaining = self.exec_fuel_initial;
        self.fatal_error = None;
        self.last_outcome = None;
    }

    /// Recognizes the whole input as a program.
    ///
    /// Returns `true` only if every byte was consumed by top-level
    /// declarations and whitespace. On `false`, [`tokens`](Self::tokens)
    /// still holds the spans of the declarations that matched before the
    /// failure.
    pub fn parse_program(&mut self) -> bool {
        self.reset();
        debug!(len = self.source.len(), "recognizing program");
        let matched = self.parse_program_rule();
        self.last_outcome = Some(matched);
        debug!(
            matched,
            spans = self.spans.len(),
            offset = self.cursor.offset(),
            "program recognition finished"
        );
        matched
    }

    /// Runs one production at the start of the input.
    ///
    /// Unlike [`parse_program`](Self::parse_program) the input does not have
    /// to be consumed entirely; check [`position`](Self::position) for how far
    /// the match reached.
    pub fn parse_rule(&mut self, kind: SpanKind) -> bool {
        self.reset();
        debug!(%kind, len = self.source.len(), "recognizing single production");
        let matched = self.run_production(kind);
        self.last_outcome = Some(matched);
        matched
    }

    /// Spans recorded by the most recent `parse_program` or `parse_rule`.
    pub fn tokens(&self) -> &[Span<'src>] {
        &self.spans
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn fatal_error(&self) -> Option<&Error> {
        self.fatal_error.as_ref()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        }
    }

    /// Where and why the most recent attempt failed.
    ///
    /// `None` if nothing was attempted yet, the attempt succeeded, or it was
    /// stopped by a fuel limit.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        if self.last_outcome != Some(false) || self.fatal_error.is_some() {
            return None;
        }
        let at = Cursor::at(self.bytes, self.furthest_offset);
        Some(Diagnostic::new(at.position(), self.expected.clone()))
    }

    /// Recognizes the whole input and hands back the trace.
    pub fn parse(mut self) -> Result<Trace<'src>, Error> {
        if self.parse_program() {
            return Ok(Trace::new(self.source, self.spans));
        }
        if let Some(err) = self.fatal_error.take() {
            return Err(err);
        }
        let diagnostic = self
            .diagnostic()
            .unwrap_or_else(|| Diagnostic::new(self.cursor.position(), Vec::new()));
        Err(Error::Rejected(diagnostic))
    }

    // --- State ---

    pub(super) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor,
            spans_len: self.spans.len(),
        }
    }

    pub(super) fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.cursor;
        self.spans.truncate(checkpoint.spans_len);
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn at_end(&self) -> bool {
        self.cursor.offset() >= self.bytes.len()
    }

    pub(super) fn rest(&self) -> &'src str {
        &self.source[self.cursor.offset()..]
    }

    /// Appends the span of a production that started at `start`.
    pub(super) fn emit(&mut self, kind: SpanKind, start: Cursor) {
        let from = start.offset();
        let to = self.cursor.offset().max(from);
        self.assert_char_boundary(from);
        self.assert_char_boundary(to);
        self.spans.push(Span {
            kind,
            offset: from,
            row: start.row(),
            column: start.column(),
            text: &self.source[from..to],
        });
    }

    // --- Fuel ---

    fn consume_exec_fuel(&mut self) -> bool {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return false;
            }
            *remaining -= 1;
        }
        true
    }

    /// Fails once any limit has been hit, so that every later probe fails too.
    pub(super) fn enter_rule(&mut self) -> bool {
        if self.has_fatal_error() || !self.consume_exec_fuel() {
            return false;
        }
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            self.fatal_error = Some(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_rule(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // --- Failure notes ---

    pub(super) fn note_failure(&mut self, expected: Expected) {
        self.note_failure_at(self.cursor.offset(), expected);
    }

    /// Keeps the expectations of the furthest offset any terminal failed at.
    pub(super) fn note_failure_at(&mut self, offset: usize, expected: Expected) {
        if offset > self.furthest_offset {
            self.furthest_offset = offset;
            self.expected.clear();
        }
        if offset == self.furthest_offset && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    // --- Terminals ---

    pub(super) fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes.get(self.cursor.offset()) {
            if !matches!(byte, b' ' | b'\t' | b'\r' | b'\n') {
                break;
            }
            match self.cursor.advance(self.bytes) {
                Some(next) => self.cursor = next,
                None => break,
            }
        }
    }

    /// Matches `literal` after optional whitespace.
    pub(super) fn text(&mut self, literal: &'static str) -> bool {
        let saved = self.cursor;
        self.skip_whitespace();
        if self.text_tight(literal) {
            return true;
        }
        self.cursor = saved;
        false
    }

    /// Matches `literal` exactly at the cursor.
    pub(super) fn text_tight(&mut self, literal: &'static str) -> bool {
        if self.rest().starts_with(literal) {
            self.cursor = self.cursor.advance_by(self.bytes, literal.len());
            return true;
        }
        self.note_failure(Expected::Text(literal));
        false
    }

    /// Matches the first of `literals` that fits, after optional whitespace.
    pub(super) fn text_any(&mut self, literals: &[&'static str]) -> bool {
        literals.iter().any(|&literal| self.text(literal))
    }

    /// Matches `word` after optional whitespace, provided no identifier
    /// character follows it.
    pub(super) fn keyword(&mut self, word: &'static str) -> bool {
        let saved = self.cursor;
        self.skip_whitespace();
        let end = self.cursor.offset() + word.len();
        if self.rest().starts_with(word) && !self.is_constituent_at(end) {
            self.cursor = self.cursor.advance_by(self.bytes, word.len());
            return true;
        }
        self.note_failure(Expected::Keyword(word));
        self.cursor = saved;
        false
    }

    pub(super) fn is_constituent_at(&self, offset: usize) -> bool {
        decode_utf8(self.bytes, offset).is_some_and(|ch| is_identifier_constituent(ch.codepoint))
    }

    /// Consumes one codepoint if it satisfies `accept`.
    pub(super) fn eat_char(&mut self, accept: impl Fn(u32) -> bool) -> bool {
        match decode_utf8(self.bytes, self.cursor.offset()) {
            Some(ch) if accept(ch.codepoint) => {
                self.cursor = self.cursor.advance_by(self.bytes, ch.len);
                true
            }
            _ => false,
        }
    }

    /// Like [`eat_char`](Self::eat_char), noting `expected` on a miss.
    pub(super) fn expect_char(&mut self, expected: Expected, accept: impl Fn(u32) -> bool) -> bool {
        if self.eat_char(accept) {
            return true;
        }
        self.note_failure(expected);
        false
    }

    // --- Combinators ---

    /// A production: skips leading whitespace, runs `body`, and records one
    /// span on success. On failure nothing it did survives.
    pub(super) fn rule(&mut self, kind: SpanKind, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.production(kind, true, body)
    }

    /// A production whose span starts exactly at the cursor.
    pub(super) fn raw_rule(&mut self, kind: SpanKind, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.production(kind, false, body)
    }

    fn production(
        &mut self,
        kind: SpanKind,
        skip_leading: bool,
        body: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        let checkpoint = self.checkpoint();
        if !self.enter_rule() {
            return false;
        }
        if skip_leading {
            self.skip_whitespace();
        }
        let start = self.cursor;
        let matched = body(self) && !self.has_fatal_error();
        self.exit_rule();
        if matched {
            self.emit(kind, start);
        } else {
            self.restore(checkpoint);
        }
        matched
    }

    /// Runs `body` as one unit: on failure it leaves no trace.
    pub(super) fn attempt(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        if body(self) {
            return true;
        }
        self.restore(checkpoint);
        false
    }

    /// `body?`: always succeeds.
    pub(super) fn optional(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.attempt(body);
        true
    }

    /// `body*`: stops at the first failure or at the first match that did not
    /// move the cursor. Always succeeds.
    pub(super) fn repeat(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        loop {
            let before = self.cursor.offset();
            if !self.attempt(&mut body) || self.cursor.offset() == before {
                return true;
            }
        }
    }

    /// Ordered choice: the first alternative that matches wins.
    pub(super) fn choice(&mut self, alternatives: &[fn(&mut Self) -> bool]) -> bool {
        alternatives
            .iter()
            .any(|alternative| self.attempt(alternative))
    }

    /// `item (separator item)*`.
    pub(super) fn separated(&mut self, item: fn(&mut Self) -> bool, separator: &'static str) -> bool {
        item(self) && self.repeat(|p| p.text(separator) && item(p))
    }

    /// `operand (operator operand)*`, recorded as one `kind` span.
    pub(super) fn binary_level(
        &mut self,
        kind: SpanKind,
        operand: fn(&mut Self) -> bool,
        operators: &[&'static str],
    ) -> bool {
        self.rule(kind, |p| {
            operand(p) && p.repeat(|p| p.text_any(operators) && operand(p))
        })
    }
}
