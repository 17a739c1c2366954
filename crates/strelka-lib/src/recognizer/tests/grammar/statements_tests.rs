use indoc::indoc;

use crate::recognizer::SpanKind;
use crate::recognizer::tests::{expect_rule, expect_rule_fails, expect_spans, matched_len, texts};

#[test]
fn var_decl_forms() {
    for input in ["x", "x: i32", "x = 1", "x: i32 = 1", "имя:char='я'"] {
        let spans = expect_spans(SpanKind::VarDecl, input);
        assert_eq!(texts(&spans, SpanKind::VarDecl), [input]);
    }
}

#[test]
fn var_decl_with_array_type() {
    let spans = expect_spans(SpanKind::Statement, "x: i32[5];");

    assert_eq!(texts(&spans, SpanKind::ArrayType), ["i32[5]"]);
    assert_eq!(texts(&spans, SpanKind::Statement), ["x: i32[5];"]);
}

#[test]
fn var_decl_drops_only_the_failed_tail() {
    let spans = expect_spans(SpanKind::VarDecl, "x: = 1");

    assert_eq!(texts(&spans, SpanKind::VarDecl), ["x"]);
    assert_eq!(matched_len(SpanKind::VarDecl, "x: = 1"), 1);
    assert_eq!(matched_len(SpanKind::VarDecl, "x: i32 = ;"), 6);
}

#[test]
fn simple_statement_needs_semicolon() {
    expect_rule_fails(SpanKind::Statement, "x = 1");
    expect_rule_fails(SpanKind::Statement, "return x");
    expect_rule_fails(SpanKind::Statement, "1 + 2");
}

#[test]
fn identifier_statement_is_a_declaration() {
    let res = expect_rule(SpanKind::Statement, "x = y;");

    insta::assert_snapshot!(res, @r"
    IDENTIFIER @1:1 'x'
    IDENTIFIER @1:5 'y'
    PRIMARY @1:5 'y'
    UNARY @1:5 'y'
    MUL @1:5 'y'
    ADD @1:5 'y'
    SHIFT @1:5 'y'
    REL @1:5 'y'
    EQUALITY @1:5 'y'
    BIT_AND @1:5 'y'
    BIT_XOR @1:5 'y'
    BIT_OR @1:5 'y'
    LOGIC_AND @1:5 'y'
    LOGIC_OR @1:5 'y'
    COMMA_EXPR @1:5 'y'
    EXPR @1:5 'y'
    VAR_DECL @1:1 'x = y'
    STATEMENT @1:1 'x = y;'
    ");
}

#[test]
fn declaration_head_commits_the_statement() {
    // `f` alone is a complete declaration, so `;` is required right after it.
    expect_rule_fails(SpanKind::Statement, "f(1);");
}

#[test]
fn expression_statement() {
    let spans = expect_spans(SpanKind::Statement, "(f(1));");
    assert_eq!(texts(&spans, SpanKind::CallExpr), ["f(1)"]);
    assert!(texts(&spans, SpanKind::VarDecl).is_empty());

    let spans = expect_spans(SpanKind::Statement, "-x * 2;");
    assert_eq!(texts(&spans, SpanKind::Expr), ["-x * 2"]);
}

#[test]
fn assignment_production() {
    let spans = expect_spans(SpanKind::Assignment, "x = 1, 2");

    assert_eq!(texts(&spans, SpanKind::Assignment), ["x = 1, 2"]);
    assert_eq!(texts(&spans, SpanKind::CommaExpr), ["1, 2"]);
    assert!(texts(&spans, SpanKind::Expr).is_empty());
    expect_rule_fails(SpanKind::Assignment, "x");
    expect_rule_fails(SpanKind::Assignment, "x =");
}

#[test]
fn return_statement() {
    let spans = expect_spans(SpanKind::Statement, "return x + 1;");

    assert_eq!(texts(&spans, SpanKind::ReturnStmt), ["return x + 1"]);
    assert_eq!(texts(&spans, SpanKind::Statement), ["return x + 1;"]);
    expect_rule_fails(SpanKind::ReturnStmt, "return;");
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let spans = expect_spans(SpanKind::Statement, "returnx;");
    assert_eq!(texts(&spans, SpanKind::VarDecl), ["returnx"]);
    assert!(texts(&spans, SpanKind::ReturnStmt).is_empty());

    let spans = expect_spans(SpanKind::Statement, "iffy = 1;");
    assert_eq!(texts(&spans, SpanKind::VarDecl), ["iffy = 1"]);
    assert!(texts(&spans, SpanKind::IfStmt).is_empty());
}

#[test]
fn if_with_elif_chain() {
    let input = indoc! {"
        if a {
        } elif b {
          x = 1;
        } elif c { }
    "};
    let spans = expect_spans(SpanKind::Statement, input);

    assert_eq!(texts(&spans, SpanKind::IfStmt).len(), 1);
    assert_eq!(texts(&spans, SpanKind::Block).len(), 3);
    assert_eq!(texts(&spans, SpanKind::Statement).len(), 2);
    let if_stmt = texts(&spans, SpanKind::IfStmt)[0];
    assert!(if_stmt.starts_with("if a"));
    assert!(if_stmt.ends_with("elif c { }"));
}

#[test]
fn if_keeps_elifs_that_matched() {
    assert_eq!(matched_len(SpanKind::IfStmt, "if a { } elif { }"), 8);
}

#[test]
fn if_has_no_else() {
    assert_eq!(matched_len(SpanKind::IfStmt, "if a { } else { }"), 8);
}

#[test]
fn if_needs_condition_and_block() {
    expect_rule_fails(SpanKind::IfStmt, "if { }");
    expect_rule_fails(SpanKind::IfStmt, "if a;");
    expect_rule_fails(SpanKind::IfStmt, "if(a){");
}

#[test]
fn while_statement() {
    let spans = expect_spans(SpanKind::Statement, "while i < n { i = i + 1; }");

    assert_eq!(
        texts(&spans, SpanKind::WhileStmt),
        ["while i < n { i = i + 1; }"]
    );
    assert_eq!(texts(&spans, SpanKind::Rel), ["i < n", "i + 1"]);
    assert_eq!(texts(&spans, SpanKind::VarDecl), ["i = i + 1"]);
}

#[test]
fn do_while_statement_owns_its_semicolon() {
    let spans = expect_spans(SpanKind::Statement, "do { x = x - 1; } while x > 0;");

    assert_eq!(
        texts(&spans, SpanKind::DoWhileStmt),
        ["do { x = x - 1; } while x > 0;"]
    );
    assert_eq!(
        texts(&spans, SpanKind::Statement).last(),
        Some(&"do { x = x - 1; } while x > 0;")
    );
    expect_rule_fails(SpanKind::DoWhileStmt, "do { } while x");
}

#[test]
fn for_statement() {
    let spans = expect_spans(SpanKind::ForStmt, "for i in [0; 1; 10] { }");

    assert_eq!(texts(&spans, SpanKind::Range), ["[0; 1; 10]"]);
    assert_eq!(texts(&spans, SpanKind::ForStmt), ["for i in [0; 1; 10] { }"]);
}

#[test]
fn range_middle_term_is_optional() {
    let spans = expect_spans(SpanKind::Range, "[0; ; n]");

    assert_eq!(texts(&spans, SpanKind::Range), ["[0; ; n]"]);
    assert_eq!(texts(&spans, SpanKind::Expr), ["0", "n"]);
}

#[test]
fn range_needs_both_separators() {
    expect_rule_fails(SpanKind::Range, "[0; 10]");
    expect_rule_fails(SpanKind::Range, "[0 10]");
    expect_rule_fails(SpanKind::Range, "[; ; 10]");
}

#[test]
fn for_needs_in_keyword() {
    expect_rule_fails(SpanKind::ForStmt, "for i inx [0; ; 1] { }");
    expect_rule_fails(SpanKind::ForStmt, "for 1 in [0; ; 1] { }");
}

#[test]
fn block_repeats_statements() {
    let spans = expect_spans(SpanKind::Block, "{ x = 1; y = 2; return x; }");

    assert_eq!(texts(&spans, SpanKind::Statement).len(), 3);
    assert_eq!(
        texts(&spans, SpanKind::Block),
        ["{ x = 1; y = 2; return x; }"]
    );
}

#[test]
fn empty_block() {
    let res = expect_rule(SpanKind::Block, "{}");

    insta::assert_snapshot!(res, @"BLOCK @1:1 '{}'");
}

#[test]
fn block_rejects_unterminated_statement() {
    expect_rule_fails(SpanKind::Block, "{ x = 1 }");
    expect_rule_fails(SpanKind::Block, "{ x = 1;");
}

#[test]
fn nested_blocks() {
    let input = indoc! {"
        {
          while a {
            if b { c = 1; }
          }
        }
    "};
    let spans = expect_spans(SpanKind::Block, input);

    assert_eq!(texts(&spans, SpanKind::Block).len(), 3);
    let if_stmt = spans
        .iter()
        .find(|span| span.kind == SpanKind::IfStmt)
        .unwrap();
    assert_eq!((if_stmt.row, if_stmt.column), (3, 5));
}
