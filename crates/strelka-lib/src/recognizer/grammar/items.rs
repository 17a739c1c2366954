//! Program and top-level declarations.

use tracing::trace;

use crate::diagnostics::Expected;
use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

impl Recognizer<'_> {
    /// `topLevelDecl*` followed by the end of the input.
    ///
    /// The one production that does not roll back its children when it
    /// fails: the cursor returns to the start, but the spans of declarations
    /// that matched before the stray input stay recorded.
    pub(crate) fn parse_program_rule(&mut self) -> bool {
        let before = self.cursor;
        if !self.enter_rule() {
            return false;
        }
        self.skip_whitespace();
        let start = self.cursor;
        self.repeat(Self::parse_top_level_decl);
        self.skip_whitespace();

        let complete = self.at_end();
        if !complete {
            self.note_failure(Expected::EndOfInput);
        }
        self.exit_rule();

        if complete && !self.has_fatal_error() {
            self.emit(SpanKind::Program, start);
            return true;
        }
        self.cursor = before;
        false
    }

    pub(crate) fn parse_top_level_decl(&mut self) -> bool {
        let matched = self.rule(SpanKind::TopLevelDecl, |p| {
            p.parse_repr_func() || p.parse_arrow_block()
        });
        if matched && let Some(decl) = self.spans.last() {
            trace!(
                row = decl.row,
                column = decl.column,
                len = decl.text.len(),
                "top-level declaration"
            );
        }
        matched
    }

    /// `repr name ( params? ) (-> types)? block`.
    pub(crate) fn parse_repr_func(&mut self) -> bool {
        self.rule(SpanKind::ReprFunc, |p| {
            p.keyword("repr")
                && p.parse_identifier()
                && p.text("(")
                && p.optional(Self::parse_param_list)
                && p.text(")")
                && p.optional(|p| p.text("->") && p.parse_return_type_list())
                && p.parse_block()
        })
    }

    pub(crate) fn parse_param_list(&mut self) -> bool {
        self.rule(SpanKind::ParamList, |p| p.separated(Self::parse_param, ","))
    }

    pub(crate) fn parse_param(&mut self) -> bool {
        self.rule(SpanKind::Param, |p| {
            p.parse_identifier() && p.text(":") && p.parse_type()
        })
    }

    pub(crate) fn parse_return_type_list(&mut self) -> bool {
        self.rule(SpanKind::ReturnTypeList, |p| {
            p.separated(Self::parse_type, ",")
        })
    }
}
