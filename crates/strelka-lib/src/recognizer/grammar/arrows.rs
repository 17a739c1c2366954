//! Arrow blocks: `#name { start -> f; f -(1, 2)> end; }`.

use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

impl Recognizer<'_> {
    /// `# name? { arrowLine* }`.
    pub(crate) fn parse_arrow_block(&mut self) -> bool {
        self.rule(SpanKind::ArrowBlock, |p| {
            p.text_tight("#")
                && p.optional(Self::parse_identifier)
                && p.text("{")
                && p.repeat(Self::parse_arrow_line)
                && p.text("}")
        })
    }

    pub(crate) fn parse_arrow_line(&mut self) -> bool {
        self.rule(SpanKind::ArrowLine, |p| {
            p.parse_arrow_node() && p.parse_arrow_op() && p.parse_arrow_node() && p.text(";")
        })
    }

    pub(crate) fn parse_arrow_node(&mut self) -> bool {
        self.rule(SpanKind::ArrowNode, |p| {
            p.keyword("start") || p.keyword("end") || p.parse_identifier()
        })
    }

    /// `->`, or `-(` literals `)>`. Neither operator may contain spaces.
    pub(crate) fn parse_arrow_op(&mut self) -> bool {
        self.rule(SpanKind::ArrowOp, |p| {
            p.text_tight("->")
                || p.attempt(|p| {
                    p.text_tight("-(") && p.parse_literal_list() && p.text(")>")
                })
        })
    }

    pub(crate) fn parse_literal_list(&mut self) -> bool {
        self.rule(SpanKind::LiteralList, |p| {
            p.separated(Self::parse_literal, ",")
        })
    }
}
