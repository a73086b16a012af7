use super::ast::TypeExpr;

#[test]
fn render_canonical_forms() {
    assert_eq!(TypeExpr::leaf("PATH").render(), "PATH");
    assert_eq!(TypeExpr::repeated("PATH").render(), "PATH [...]");
    assert_eq!(
        TypeExpr::nested("PATH", TypeExpr::repeated("ARGUMENT")).render(),
        "PATH [ARGUMENT [...]]"
    );
    assert_eq!(
        TypeExpr::nested("A", TypeExpr::nested("B", TypeExpr::leaf("C"))).to_string(),
        "A [B [C]]"
    );
}

#[test]
fn chain_walks_outer_to_inner() {
    let expr = TypeExpr::nested("PATH", TypeExpr::nested("STRING", TypeExpr::repeated("ARGUMENT")));
    let bases: Vec<_> = expr.chain().map(|n| n.base.as_str()).collect();
    assert_eq!(bases, ["PATH", "STRING", "ARGUMENT"]);
    assert_eq!(expr.terminal(), &TypeExpr::repeated("ARGUMENT"));
}

#[test]
fn leaf_is_its_own_terminal() {
    let expr = TypeExpr::leaf("BOOLEAN");
    assert_eq!(expr.chain().count(), 1);
    assert!(std::ptr::eq(expr.terminal(), &expr));
}
