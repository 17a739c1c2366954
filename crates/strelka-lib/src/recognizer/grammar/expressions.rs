//! Expressions, one production per precedence level.
//!
//! Every binary level is `next (op next)*` and left-associative. Operators
//! are tried in table order, so longer spellings that share a prefix
//! (`<=` before `<`) come first. A level with no operator still records its
//! span, which is why even a bare `1` is wrapped in the whole ladder.

use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

const COMMA: &[&str] = &[","];
const LOGIC_OR: &[&str] = &["||"];
const LOGIC_AND: &[&str] = &["&&"];
const BIT_OR: &[&str] = &["|"];
const BIT_XOR: &[&str] = &["^"];
const BIT_AND: &[&str] = &["&"];
const EQUALITY: &[&str] = &["==", "!="];
const REL: &[&str] = &["<=", ">=", "<", ">"];
const SHIFT: &[&str] = &["<<", ">>"];
const ADD: &[&str] = &["+", "-"];
const MUL: &[&str] = &["*", "/", "%"];
const PREFIX: &[&str] = &["+", "-", "!"];

impl Recognizer<'_> {
    pub(crate) fn parse_expr(&mut self) -> bool {
        self.rule(SpanKind::Expr, Self::parse_comma_expr)
    }

    pub(crate) fn parse_comma_expr(&mut self) -> bool {
        self.binary_level(SpanKind::CommaExpr, Self::parse_logic_or, COMMA)
    }

    pub(crate) fn parse_logic_or(&mut self) -> bool {
        self.binary_level(SpanKind::LogicOr, Self::parse_logic_and, LOGIC_OR)
    }

    pub(crate) fn parse_logic_and(&mut self) -> bool {
        self.binary_level(SpanKind::LogicAnd, Self::parse_bit_or, LOGIC_AND)
    }

    // `|` also matches the first half of `||`; the operand after it then
    // fails and the repetition backs off, leaving `||` to the level above.
    pub(crate) fn parse_bit_or(&mut self) -> bool {
        self.binary_level(SpanKind::BitOr, Self::parse_bit_xor, BIT_OR)
    }

    pub(crate) fn parse_bit_xor(&mut self) -> bool {
        self.binary_level(SpanKind::BitXor, Self::parse_bit_and, BIT_XOR)
    }

    pub(crate) fn parse_bit_and(&mut self) -> bool {
        self.binary_level(SpanKind::BitAnd, Self::parse_equality, BIT_AND)
    }

    pub(crate) fn parse_equality(&mut self) -> bool {
        self.binary_level(SpanKind::Equality, Self::parse_rel, EQUALITY)
    }

    pub(crate) fn parse_rel(&mut self) -> bool {
        self.binary_level(SpanKind::Rel, Self::parse_shift, REL)
    }

    pub(crate) fn parse_shift(&mut self) -> bool {
        self.binary_level(SpanKind::Shift, Self::parse_add, SHIFT)
    }

    pub(crate) fn parse_add(&mut self) -> bool {
        self.binary_level(SpanKind::Add, Self::parse_mul, ADD)
    }

    pub(crate) fn parse_mul(&mut self) -> bool {
        self.binary_level(SpanKind::Mul, Self::parse_unary, MUL)
    }

    /// Optional `+`, `-` or `!`, then a primary. A prefix without a primary
    /// fails the whole production.
    pub(crate) fn parse_unary(&mut self) -> bool {
        self.rule(SpanKind::Unary, |p| {
            p.optional(|p| p.text_any(PREFIX)) && p.parse_primary()
        })
    }

    /// Literal, call, identifier, array literal, or `( expr )`, in that order.
    pub(crate) fn parse_primary(&mut self) -> bool {
        self.rule(SpanKind::Primary, |p| {
            p.choice(&[
                Self::parse_literal,
                Self::parse_call_expr,
                Self::parse_identifier,
                Self::parse_array_literal,
                Self::parse_parenthesized,
            ])
        })
    }

    fn parse_parenthesized(&mut self) -> bool {
        self.text_tight("(") && self.parse_expr() && self.text(")")
    }

    pub(crate) fn parse_call_expr(&mut self) -> bool {
        self.rule(SpanKind::CallExpr, |p| {
            p.parse_identifier()
                && p.text("(")
                && p.optional(Self::parse_arg_list)
                && p.text(")")
        })
    }

    /// Each argument is a full `expr`, and `expr` already spans commas, so
    /// `f(1, 2)` has one argument whose text is `1, 2`.
    pub(crate) fn parse_arg_list(&mut self) -> bool {
        self.rule(SpanKind::ArgList, |p| p.separated(Self::parse_expr, ","))
    }

    /// `{ expr (, expr)* }`, never empty.
    pub(crate) fn parse_array_literal(&mut self) -> bool {
        self.rule(SpanKind::ArrayLiteral, |p| {
            p.text_tight("{") && p.separated(Self::parse_expr, ",") && p.text("}")
        })
    }
}
