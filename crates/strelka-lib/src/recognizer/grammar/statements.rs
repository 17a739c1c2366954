//! Blocks and statements.

use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

impl Recognizer<'_> {
    /// `{ statement* }`. The repetition stops at the first statement that
    /// does not match; only then is `}` required.
    pub(crate) fn parse_block(&mut self) -> bool {
        self.rule(SpanKind::Block, |p| {
            p.text_tight("{") && p.repeat(Self::parse_statement) && p.text("}")
        })
    }

    /// Compound statements end with their block. The simple ones need a `;`,
    /// and the first simple form whose head matches commits the statement:
    /// if its `;` is missing, later forms are not tried.
    ///
    /// Because `x = 1` is already a complete declaration, a simple
    /// statement that starts with an identifier is always a `VAR_DECL`.
    pub(crate) fn parse_statement(&mut self) -> bool {
        self.rule(SpanKind::Statement, |p| {
            if p.choice(&[
                Self::parse_if_stmt,
                Self::parse_while_stmt,
                Self::parse_do_while_stmt,
                Self::parse_for_stmt,
            ]) {
                return true;
            }

            let simple: [fn(&mut Self) -> bool; 4] = [
                Self::parse_return_stmt,
                Self::parse_var_decl,
                Self::parse_assignment,
                Self::parse_expr,
            ];
            for head in simple {
                if head(p) {
                    return p.text(";");
                }
            }
            false
        })
    }

    /// `name (: type)? (= expr)?`. Either tail can be absent on its own.
    pub(crate) fn parse_var_decl(&mut self) -> bool {
        self.rule(SpanKind::VarDecl, |p| {
            p.parse_identifier()
                && p.optional(|p| p.text(":") && p.parse_type())
                && p.optional(|p| p.text("=") && p.parse_expr())
        })
    }

    pub(crate) fn parse_assignment(&mut self) -> bool {
        self.rule(SpanKind::Assignment, |p| {
            p.parse_identifier() && p.text("=") && p.parse_comma_expr()
        })
    }

    /// `if expr block (elif expr block)*`. There is no `else`.
    pub(crate) fn parse_if_stmt(&mut self) -> bool {
        self.rule(SpanKind::IfStmt, |p| {
            p.keyword("if")
                && p.parse_expr()
                && p.parse_block()
                && p.repeat(|p| p.keyword("elif") && p.parse_expr() && p.parse_block())
        })
    }

    pub(crate) fn parse_while_stmt(&mut self) -> bool {
        self.rule(SpanKind::WhileStmt, |p| {
            p.keyword("while") && p.parse_expr() && p.parse_block()
        })
    }

    /// `do block while expr ;`, the `;` included in the span.
    pub(crate) fn parse_do_while_stmt(&mut self) -> bool {
        self.rule(SpanKind::DoWhileStmt, |p| {
            p.keyword("do")
                && p.parse_block()
                && p.keyword("while")
                && p.parse_expr()
                && p.text(";")
        })
    }

    /// `[ from ; step? ; to ]`.
    pub(crate) fn parse_range(&mut self) -> bool {
        self.rule(SpanKind::Range, |p| {
            p.text_tight("[")
                && p.parse_expr()
                && p.text(";")
                && p.optional(Self::parse_expr)
                && p.text(";")
                && p.parse_expr()
                && p.text("]")
        })
    }

    pub(crate) fn parse_for_stmt(&mut self) -> bool {
        self.rule(SpanKind::ForStmt, |p| {
            p.keyword("for")
                && p.parse_identifier()
                && p.keyword("in")
                && p.parse_range()
                && p.parse_block()
        })
    }

    pub(crate) fn parse_return_stmt(&mut self) -> bool {
        self.rule(SpanKind::ReturnStmt, |p| {
            p.keyword("return") && p.parse_expr()
        })
    }
}
