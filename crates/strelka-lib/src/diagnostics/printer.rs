//! Builder-pattern printer for rendering a diagnostic against its source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::Diagnostic;

pub struct DiagnosticPrinter<'d, 's> {
    diagnostic: &'d Diagnostic,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticPrinter<'d, 's> {
    pub fn new(diagnostic: &'d Diagnostic) -> Self {
        Self {
            diagnostic,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Without a source, falls back to the one-line `row:col: message` form.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.diagnostic);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.diagnostic.message();
        let range = highlight_range(source, self.diagnostic.offset());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// The codepoint at `offset`, or an empty range at the end of the input.
fn highlight_range(source: &str, offset: usize) -> std::ops::Range<usize> {
    let start = offset.min(source.len());
    let width = source[start..].chars().next().map_or(0, char::len_utf8);
    start..start + width
}
