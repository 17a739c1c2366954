use crate::recognizer::tests::{expect_rule, expect_rule_fails, expect_spans, matched_len, texts};
use crate::recognizer::{PRIMITIVE_TYPES, SpanKind};

#[test]
fn every_primitive_type() {
    for name in PRIMITIVE_TYPES {
        assert_eq!(matched_len(SpanKind::PrimitiveType, name), name.len());
    }
}

#[test]
fn primitive_type_needs_word_boundary() {
    expect_rule_fails(SpanKind::PrimitiveType, "i32x");
    expect_rule_fails(SpanKind::PrimitiveType, "string");
    expect_rule_fails(SpanKind::PrimitiveType, "int");
}

#[test]
fn array_type() {
    let res = expect_rule(SpanKind::ArrayType, "i32[5]");

    insta::assert_snapshot!(res, @r"
    PRIMITIVE_TYPE @1:1 'i32'
    DIGIT @1:5 '5'
    INTEGER_LITERAL @1:5 '5'
    ARRAY_TYPE @1:1 'i32[5]'
    ");
}

#[test]
fn array_type_allows_inner_whitespace() {
    let spans = expect_spans(SpanKind::Type, "char [ 16 ]");

    assert_eq!(texts(&spans, SpanKind::ArrayType), ["char [ 16 ]"]);
    assert_eq!(texts(&spans, SpanKind::Type), ["char [ 16 ]"]);
}

#[test]
fn array_type_needs_integer_size() {
    expect_rule_fails(SpanKind::ArrayType, "i32[]");
    expect_rule_fails(SpanKind::ArrayType, "i32[n]");
    expect_rule_fails(SpanKind::ArrayType, "i32[1.5]");
}

#[test]
fn type_falls_back_to_primitive() {
    let res = expect_rule(SpanKind::Type, "bool");

    insta::assert_snapshot!(res, @r"
    PRIMITIVE_TYPE @1:1 'bool'
    TYPE @1:1 'bool'
    ");
}

#[test]
fn type_is_not_an_identifier() {
    expect_rule_fails(SpanKind::Type, "Point");
}
