//! Span kinds: one label per grammar production.
//!
//! The order follows the grammar bottom-up (lexical classes, literals, types,
//! statements, expressions, declarations, arrow blocks). `#[repr(u16)]` lets
//! the tree pass hand kinds to Rowan as raw values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum SpanKind {
    // --- Lexical classes ---
    Letter = 0,
    RuLetter,
    Digit,
    Any,
    Identifier,

    // --- Literals ---
    IntegerLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    BoolLiteral,

    Space,
    Newline,

    // --- Types ---
    PrimitiveType,
    ArrayType,
    Type,

    // --- Statements ---
    Block,
    Statement,
    VarDecl,
    Assignment,
    IfStmt,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    Range,
    ReturnStmt,

    // --- Expressions, lowest precedence first ---
    Expr,
    CommaExpr,
    LogicOr,
    LogicAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Rel,
    Shift,
    Add,
    Mul,
    Unary,
    Primary,
    CallExpr,
    ArgList,
    ArrayLiteral,
    Literal,

    // --- Declarations ---
    Program,
    #[serde(rename = "TOPLEVEL_DECL")]
    TopLevelDecl,
    ReprFunc,
    ParamList,
    Param,
    ReturnTypeList,

    // --- Arrow blocks ---
    ArrowBlock,
    ArrowLine,
    ArrowNode,
    ArrowOp,
    LiteralList,
}

use SpanKind::*;

impl SpanKind {
    /// Every kind, indexed by its discriminant.
    pub const ALL: [SpanKind; 54] = [
        Letter,
        RuLetter,
        Digit,
        Any,
        Identifier,
        IntegerLiteral,
        FloatLiteral,
        CharLiteral,
        StringLiteral,
        BoolLiteral,
        Space,
        Newline,
        PrimitiveType,
        ArrayType,
        Type,
        Block,
        Statement,
        VarDecl,
        Assignment,
        IfStmt,
        WhileStmt,
        DoWhileStmt,
        ForStmt,
        Range,
        ReturnStmt,
        Expr,
        CommaExpr,
        LogicOr,
        LogicAnd,
        BitOr,
        BitXor,
        BitAnd,
        Equality,
        Rel,
        Shift,
        Add,
        Mul,
        Unary,
        Primary,
        CallExpr,
        ArgList,
        ArrayLiteral,
        Literal,
        Program,
        TopLevelDecl,
        ReprFunc,
        ParamList,
        Param,
        ReturnTypeList,
        ArrowBlock,
        ArrowLine,
        ArrowNode,
        ArrowOp,
        LiteralList,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter => "LETTER",
            RuLetter => "RU_LETTER",
            Digit => "DIGIT",
            Any => "ANY",
            Identifier => "IDENTIFIER",
            IntegerLiteral => "INTEGER_LITERAL",
            FloatLiteral => "FLOAT_LITERAL",
            CharLiteral => "CHAR_LITERAL",
            StringLiteral => "STRING_LITERAL",
            BoolLiteral => "BOOL_LITERAL",
            Space => "SPACE",
            Newline => "NEWLINE",
            PrimitiveType => "PRIMITIVE_TYPE",
            ArrayType => "ARRAY_TYPE",
            Type => "TYPE",
            Block => "BLOCK",
            Statement => "STATEMENT",
            VarDecl => "VAR_DECL",
            Assignment => "ASSIGNMENT",
            IfStmt => "IF_STMT",
            WhileStmt => "WHILE_STMT",
            DoWhileStmt => "DO_WHILE_STMT",
            ForStmt => "FOR_STMT",
            Range => "RANGE",
            ReturnStmt => "RETURN_STMT",
            Expr => "EXPR",
            CommaExpr => "COMMA_EXPR",
            LogicOr => "LOGIC_OR",
            LogicAnd => "LOGIC_AND",
            BitOr => "BIT_OR",
            BitXor => "BIT_XOR",
            BitAnd => "BIT_AND",
            Equality => "EQUALITY",
            Rel => "REL",
            Shift => "SHIFT",
            Add => "ADD",
            Mul => "MUL",
            Unary => "UNARY",
            Primary => "PRIMARY",
            CallExpr => "CALL_EXPR",
            ArgList => "ARG_LIST",
            ArrayLiteral => "ARRAY_LITERAL",
            Literal => "LITERAL",
            Program => "PROGRAM",
            TopLevelDecl => "TOPLEVEL_DECL",
            ReprFunc => "REPR_FUNC",
            ParamList => "PARAM_LIST",
            Param => "PARAM",
            ReturnTypeList => "RETURN_TYPE_LIST",
            ArrowBlock => "ARROW_BLOCK",
            ArrowLine => "ARROW_LINE",
            ArrowNode => "ARROW_NODE",
            ArrowOp => "ARROW_OP",
            LiteralList => "LITERAL_LIST",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown span kind `{0}`")]
pub struct UnknownSpanKind(pub String);

impl FromStr for SpanKind {
    type Err = UnknownSpanKind;

    /// Accepts the display label in any case, with `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownSpanKind(s.to_owned()))
    }
}
