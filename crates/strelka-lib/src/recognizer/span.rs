//! Span records and the trace they form.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use super::kind::SpanKind;
use crate::tree::{self, SyntaxNode};

/// One recognized production: its kind, where it starts, and the exact text
/// it consumed. Text borrows from the input, nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'src> {
    pub kind: SpanKind,
    pub offset: usize,
    pub row: u32,
    pub column: u32,
    pub text: &'src str,
}

impl Span<'_> {
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether `other` lies within this span. Equal ranges contain each other.
    #[inline]
    pub fn contains(&self, other: &Span<'_>) -> bool {
        self.offset <= other.offset && other.end() <= self.end()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @{}:{} '{}'",
            self.kind, self.row, self.column, self.text
        )
    }
}

/// The post-order span sequence of an accepted program.
///
/// Every span is emitted after the spans of the productions it called, so the
/// last span is the root (`PROGRAM`) and nesting follows from containment.
#[derive(Debug, Clone)]
pub struct Trace<'src> {
    source: &'src str,
    spans: Vec<Span<'src>>,
}

impl<'src> Trace<'src> {
    pub(crate) fn new(source: &'src str, spans: Vec<Span<'src>>) -> Self {
        Self { source, spans }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn spans(&self) -> &[Span<'src>] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span<'src>> {
        self.spans.iter()
    }

    pub fn root(&self) -> Option<&Span<'src>> {
        self.spans.last()
    }

    pub fn of_kind(&self, kind: SpanKind) -> impl Iterator<Item = &Span<'src>> + '_ {
        self.spans.iter().filter(move |span| span.kind == kind)
    }

    /// Rebuilds the nested tree by interval containment.
    pub fn tree(&self) -> Option<SyntaxNode> {
        tree::build(&self.spans)
    }

    /// One `KIND @row:col 'text'` line per span.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for span in self.iter() {
            out.push_str(&span.to_string());
            out.push('\n');
        }
        out
    }
}

impl<'a, 'src> IntoIterator for &'a Trace<'src> {
    type Item = &'a Span<'src>;
    type IntoIter = std::slice::Iter<'a, Span<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
