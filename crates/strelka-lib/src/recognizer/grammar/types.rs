//! Type annotations: `i32`, `char[16]`.

use crate::recognizer::core::Recognizer;
use crate::recognizer::kind::SpanKind;

pub const PRIMITIVE_TYPES: [&str; 9] = [
    "i8", "i16", "i32", "i64", "f32", "f64", "char", "stringa", "bool",
];

impl Recognizer<'_> {
    pub(crate) fn parse_primitive_type(&mut self) -> bool {
        self.rule(SpanKind::PrimitiveType, |p| {
            PRIMITIVE_TYPES.iter().any(|&name| p.keyword(name))
        })
    }

    pub(crate) fn parse_array_type(&mut self) -> bool {
        self.rule(SpanKind::ArrayType, |p| {
            p.parse_primitive_type()
                && p.text("[")
                && p.parse_integer_literal()
                && p.text("]")
        })
    }

    /// Array first: it shares its prefix with the primitive it wraps.
    pub(crate) fn parse_type(&mut self) -> bool {
        self.rule(SpanKind::Type, |p| {
            p.parse_array_type() || p.parse_primitive_type()
        })
    }
}
