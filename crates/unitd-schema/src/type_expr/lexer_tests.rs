use super::lexer::{lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!(
            "{:?} {:?} @{}\n",
            token.kind,
            token_text(input, &token),
            token.offset()
        ));
    }
    out
}

#[test]
fn leaf() {
    insta::assert_snapshot!(snapshot("PATH"), @r#"Ident "PATH" @0"#);
}

#[test]
fn nested_with_ellipsis() {
    insta::assert_snapshot!(snapshot("PATH [ARGUMENT [...]]"), @r#"
    Ident "PATH" @0
    BracketOpen "[" @5
    Ident "ARGUMENT" @6
    BracketOpen "[" @15
    Ellipsis "..." @16
    BracketClose "]" @19
    BracketClose "]" @20
    "#);
}

#[test]
fn whitespace_is_insignificant() {
    insta::assert_snapshot!(snapshot(" \tSTRING\n[ ... ] "), @r#"
    Ident "STRING" @2
    BracketOpen "[" @9
    Ellipsis "..." @11
    BracketClose "]" @15
    "#);
}

#[test]
fn underscores_in_ident() {
    insta::assert_snapshot!(snapshot("SERVICE_RESTART"), @r#"Ident "SERVICE_RESTART" @0"#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("PATH [%$#]"), @r#"
    Ident "PATH" @0
    BracketOpen "[" @5
    Garbage "%$#" @6
    BracketClose "]" @9
    "#);
}

#[test]
fn lowercase_is_garbage() {
    insta::assert_snapshot!(snapshot("path"), @r#"Garbage "path" @0"#);
}

#[test]
fn trailing_garbage() {
    insta::assert_snapshot!(snapshot("PATH .."), @r#"
    Ident "PATH" @0
    Garbage ".." @5
    "#);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
    assert!(lex("  \n ").is_empty());
}
