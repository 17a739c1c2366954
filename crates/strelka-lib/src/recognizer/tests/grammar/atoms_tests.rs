use crate::recognizer::tests::{expect_rule, expect_rule_fails, expect_spans, matched_len, texts};
use crate::recognizer::{RESERVED_WORDS, SpanKind};

#[test]
fn identifier_ascii() {
    let res = expect_rule(SpanKind::Identifier, "total_1");

    insta::assert_snapshot!(res, @"IDENTIFIER @1:1 'total_1'");
}

#[test]
fn identifier_cyrillic() {
    let res = expect_rule(SpanKind::Identifier, "Переменная_2");

    insta::assert_snapshot!(res, @"IDENTIFIER @1:1 'Переменная_2'");
}

#[test]
fn identifier_skips_leading_whitespace() {
    let res = expect_rule(SpanKind::Identifier, "  \n\t foo");

    insta::assert_snapshot!(res, @"IDENTIFIER @2:3 'foo'");
}

#[test]
fn identifier_may_start_with_underscore() {
    assert_eq!(matched_len(SpanKind::Identifier, "_x+1"), 2);
}

#[test]
fn identifier_is_greedy() {
    assert_eq!(matched_len(SpanKind::Identifier, "foo+bar"), 3);
    assert_eq!(matched_len(SpanKind::Identifier, "ab12cd ef"), 6);
}

#[test]
fn identifier_rejects_leading_digit() {
    expect_rule_fails(SpanKind::Identifier, "1abc");
}

#[test]
fn identifier_rejects_reserved_words() {
    for word in RESERVED_WORDS {
        expect_rule_fails(SpanKind::Identifier, word);
    }
}

#[test]
fn identifier_may_extend_reserved_words() {
    for word in ["iffy", "ends", "i32x", "return_", "dot"] {
        assert_eq!(matched_len(SpanKind::Identifier, word), word.len());
    }
}

#[test]
fn identifier_stops_outside_basic_cyrillic() {
    // `ё` (U+0451) is outside the basic block.
    assert_eq!(matched_len(SpanKind::Identifier, "всё"), "вс".len());
}

#[test]
fn integer_literal_records_digits() {
    let res = expect_rule(SpanKind::IntegerLiteral, "42");

    insta::assert_snapshot!(res, @r"
    DIGIT @1:1 '4'
    DIGIT @1:2 '2'
    INTEGER_LITERAL @1:1 '42'
    ");
}

#[test]
fn float_literal() {
    let res = expect_rule(SpanKind::FloatLiteral, "3.5");

    insta::assert_snapshot!(res, @r"
    DIGIT @1:1 '3'
    DIGIT @1:3 '5'
    FLOAT_LITERAL @1:1 '3.5'
    ");
}

#[test]
fn float_literal_needs_both_digit_runs() {
    expect_rule_fails(SpanKind::FloatLiteral, "3.");
    expect_rule_fails(SpanKind::FloatLiteral, ".5");
    expect_rule_fails(SpanKind::FloatLiteral, "35");
}

#[test]
fn float_literal_has_no_inner_whitespace() {
    expect_rule_fails(SpanKind::FloatLiteral, "3 .5");
    expect_rule_fails(SpanKind::FloatLiteral, "3. 5");
}

#[test]
fn literal_tries_float_before_integer() {
    let spans = expect_spans(SpanKind::Literal, "3.5");

    assert_eq!(texts(&spans, SpanKind::FloatLiteral), ["3.5"]);
    assert!(texts(&spans, SpanKind::IntegerLiteral).is_empty());
    assert_eq!(texts(&spans, SpanKind::Literal), ["3.5"]);
}

#[test]
fn literal_falls_back_to_integer() {
    let res = expect_rule(SpanKind::Literal, "12;");

    insta::assert_snapshot!(res, @r"
    DIGIT @1:1 '1'
    DIGIT @1:2 '2'
    INTEGER_LITERAL @1:1 '12'
    LITERAL @1:1 '12'
    ");
}

#[test]
fn integer_before_dangling_dot() {
    assert_eq!(matched_len(SpanKind::Literal, "3."), 1);
}

#[test]
fn char_literal() {
    let res = expect_rule(SpanKind::CharLiteral, "'ж'");

    insta::assert_snapshot!(res, @"CHAR_LITERAL @1:1 ''ж''");
}

#[test]
fn char_literal_needs_exactly_one_character() {
    expect_rule_fails(SpanKind::CharLiteral, "'ab'");
    expect_rule_fails(SpanKind::CharLiteral, "''");
}

#[test]
fn char_literal_body_is_identifier_character() {
    expect_rule_fails(SpanKind::CharLiteral, "' '");
    expect_rule_fails(SpanKind::CharLiteral, "'+'");
    assert_eq!(matched_len(SpanKind::CharLiteral, "'_'"), 3);
}

#[test]
fn string_literal() {
    let spans = expect_spans(SpanKind::StringLiteral, r#""hello_мир42""#);

    assert_eq!(texts(&spans, SpanKind::StringLiteral), [r#""hello_мир42""#]);
}

#[test]
fn string_literal_may_be_empty() {
    assert_eq!(matched_len(SpanKind::StringLiteral, r#""""#), 2);
}

#[test]
fn string_literal_rejects_spaces_and_punctuation() {
    expect_rule_fails(SpanKind::StringLiteral, r#""hello world""#);
    expect_rule_fails(SpanKind::StringLiteral, r#""a,b""#);
    expect_rule_fails(SpanKind::StringLiteral, r#""open"#);
}

#[test]
fn bool_literal() {
    let spans = expect_spans(SpanKind::Literal, "false");

    assert_eq!(texts(&spans, SpanKind::BoolLiteral), ["false"]);
    expect_rule_fails(SpanKind::BoolLiteral, "trueish");
    expect_rule_fails(SpanKind::BoolLiteral, "True");
}

#[test]
fn letter_classes() {
    assert_eq!(matched_len(SpanKind::Letter, "a"), 1);
    assert_eq!(matched_len(SpanKind::Letter, "_"), 1);
    expect_rule_fails(SpanKind::Letter, "ж");
    expect_rule_fails(SpanKind::Letter, "1");

    assert_eq!(matched_len(SpanKind::RuLetter, "ж"), 2);
    assert_eq!(matched_len(SpanKind::RuLetter, "_"), 1);
    expect_rule_fails(SpanKind::RuLetter, "z");
}

#[test]
fn lexical_classes_do_not_skip_whitespace() {
    expect_rule_fails(SpanKind::Letter, " a");
    expect_rule_fails(SpanKind::Digit, " 1");
}

#[test]
fn any_takes_one_whole_codepoint() {
    let spans = expect_spans(SpanKind::Any, "жx");

    assert_eq!(texts(&spans, SpanKind::Any), ["ж"]);
    expect_rule_fails(SpanKind::Any, "");
}

#[test]
fn space_and_newline() {
    assert_eq!(matched_len(SpanKind::Space, "\t"), 1);
    expect_rule_fails(SpanKind::Space, "\n");

    let spans = expect_spans(SpanKind::Newline, "\r\nx");
    assert_eq!(texts(&spans, SpanKind::Newline), ["\r\n"]);
    assert_eq!(matched_len(SpanKind::Newline, "\n\n"), 1);
    assert_eq!(matched_len(SpanKind::Newline, "\r"), 1);
    expect_rule_fails(SpanKind::Newline, " \n");
}
