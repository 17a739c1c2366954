//! Grammar productions, one `parse_*` method per span kind.
//!
//! Each file extends [`Recognizer`] with the productions of one part of the
//! language. Productions are free to call each other; mutual recursion
//! (expressions inside blocks inside expressions) is bounded only by the
//! input and the optional recursion limit.

mod arrows;
mod atoms;
mod expressions;
mod items;
mod statements;
mod types;

pub use types::PRIMITIVE_TYPES;

use super::core::Recognizer;
use super::kind::SpanKind;

/// Words that can never be identifiers.
pub const RESERVED_WORDS: [&str; 21] = [
    "if", "elif", "while", "do", "for", "in", "return", "repr", "true", "false", "start", "end",
    "i8", "i16", "i32", "i64", "f32", "f64", "char", "stringa", "bool",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

impl Recognizer<'_> {
    pub(in crate::recognizer) fn run_production(&mut self, kind: SpanKind) -> bool {
        match kind {
            SpanKind::Letter => self.parse_letter(),
            SpanKind::RuLetter => self.parse_ru_letter(),
            SpanKind::Digit => self.parse_digit(),
            SpanKind::Any => self.parse_any(),
            SpanKind::Identifier => self.parse_identifier(),
            SpanKind::IntegerLiteral => self.parse_integer_literal(),
            SpanKind::FloatLiteral => self.parse_float_literal(),
            SpanKind::CharLiteral => self.parse_char_literal(),
            SpanKind::StringLiteral => self.parse_string_literal(),
            SpanKind::BoolLiteral => self.parse_bool_literal(),
            SpanKind::Space => self.parse_space(),
            SpanKind::Newline => self.parse_newline(),
            SpanKind::PrimitiveType => self.parse_primitive_type(),
            SpanKind::ArrayType => self.parse_array_type(),
            SpanKind::Type => self.parse_type(),
            SpanKind::Block => self.parse_block(),
            SpanKind::Statement => self.parse_statement(),
            SpanKind::VarDecl => self.parse_var_decl(),
            SpanKind::Assignment => self.parse_assignment(),
            SpanKind::IfStmt => self.parse_if_stmt(),
            SpanKind::WhileStmt => self.parse_while_stmt(),
            SpanKind::DoWhileStmt => self.parse_do_while_stmt(),
            SpanKind::ForStmt => self.parse_for_stmt(),
            SpanKind::Range => self.parse_range(),
            SpanKind::ReturnStmt => self.parse_return_stmt(),
            SpanKind::Expr => self.parse_expr(),
            SpanKind::CommaExpr => self.parse_comma_expr(),
            SpanKind::LogicOr => self.parse_logic_or(),
            SpanKind::LogicAnd => self.parse_logic_and(),
            SpanKind::BitOr => self.parse_bit_or(),
            SpanKind::BitXor => self.parse_bit_xor(),
            SpanKind::BitAnd => self.parse_bit_and(),
            SpanKind::Equality => self.parse_equality(),
            SpanKind::Rel => self.parse_rel(),
            SpanKind::Shift => self.parse_shift(),
            SpanKind::Add => self.parse_add(),
            SpanKind::Mul => self.parse_mul(),
            SpanKind::Unary => self.parse_unary(),
            SpanKind::Primary => self.parse_primary(),
            SpanKind::CallExpr => self.parse_call_expr(),
            SpanKind::ArgList => self.parse_arg_list(),
            SpanKind::ArrayLiteral => self.parse_array_literal(),
            SpanKind::Literal => self.parse_literal(),
            SpanKind::Program => self.parse_program_rule(),
            SpanKind::TopLevelDecl => self.parse_top_level_decl(),
            SpanKind::ReprFunc => self.parse_repr_func(),
            SpanKind::ParamList => self.parse_param_list(),
            SpanKind::Param => self.parse_param(),
            SpanKind::ReturnTypeList => self.parse_return_type_list(),
            SpanKind::ArrowBlock => self.parse_arrow_block(),
            SpanKind::ArrowLine => self.parse_arrow_line(),
            SpanKind::ArrowNode => self.parse_arrow_node(),
            SpanKind::ArrowOp => self.parse_arrow_op(),
            SpanKind::LiteralList => self.parse_literal_list(),
        }
    }
}
