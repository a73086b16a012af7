use unitd_unit::FieldKind;

use crate::taxonomy::{ResolvedType, Taxonomy, TaxonomyError, TypeMapping};
use crate::type_expr::{TypeExpr, parse_type_expr};

fn resolve(input: &str) -> Result<ResolvedType, TaxonomyError> {
    let expr = parse_type_expr(input).unwrap();
    Taxonomy::standard().resolve(Some(&expr))
}

fn dump(input: &str) -> String {
    match resolve(input) {
        Ok(ty) => {
            let deps: Vec<_> = ty.dependencies().iter().map(String::as_str).collect();
            format!(
                "{} kind={:?} native={} deps={:?}",
                ty.repr(),
                ty.field_kind(),
                ty.is_native(),
                deps
            )
        }
        Err(e) => format!("ERROR: {e}"),
    }
}

#[test]
fn scalars() {
    insta::assert_snapshot!(dump("PATH"), @r#"String kind=String native=true deps=[]"#);
    insta::assert_snapshot!(dump("BOOLEAN"), @r#"bool kind=Boolean native=true deps=[]"#);
    insta::assert_snapshot!(dump("SIZE"), @r#"i64 kind=Unsupported native=true deps=[]"#);
    insta::assert_snapshot!(dump("UNSIGNED"), @r#"u64 kind=Unsupported native=true deps=[]"#);
}

#[test]
fn typed_values_need_imports() {
    insta::assert_snapshot!(
        dump("TIMER"),
        @r#"Timespan kind=String native=false deps=["unitd_unit::value::Timespan"]"#
    );
    insta::assert_snapshot!(
        dump("UNIT [...]"),
        @r#"Vec<UnitRef> kind=Sequence native=false deps=["unitd_unit::value::UnitRef"]"#
    );
    insta::assert_snapshot!(
        dump("MODE"),
        @r#"FileMode kind=String native=false deps=["unitd_unit::value::FileMode"]"#
    );
}

#[test]
fn repeated_terminal_adds_one_level() {
    let ty = resolve("PATH [...]").unwrap();
    assert_eq!(ty.depth(), 1);
    assert_eq!(ty.repr(), "Vec<String>");
    assert_eq!(ty.field_kind(), FieldKind::Sequence);
}

#[test]
fn nested_and_repeated_stack() {
    let ty = resolve("PATH [ARGUMENT [...]]").unwrap();
    assert_eq!(ty.depth(), 2);
    assert_eq!(ty.repr(), "Vec<Vec<String>>");

    let ty = resolve("STRING [STRING [STRING]]").unwrap();
    assert_eq!(ty.depth(), 2);
    assert_eq!(ty.repr(), "Vec<Vec<String>>");
}

#[test]
fn sequence_base_kind() {
    let ty = resolve("SOCKETS").unwrap();
    assert_eq!(ty.depth(), 0);
    assert_eq!(ty.repr(), "Vec<String>");
    assert_eq!(ty.field_kind(), FieldKind::Sequence);
}

#[test]
fn integer_sequences_are_encodable() {
    let ty = resolve("INTEGER [...]").unwrap();
    assert_eq!(ty.repr(), "Vec<i32>");
    assert_eq!(ty.field_kind(), FieldKind::Sequence);
}

#[test]
fn mismatched_chain_is_error() {
    insta::assert_snapshot!(
        dump("PATH [BOOLEAN]"),
        @r#"ERROR: nested type mismatch in "PATH [BOOLEAN]": String vs bool"#
    );
    assert!(matches!(
        resolve("TIMER [UNIT [...]]"),
        Err(TaxonomyError::NestedMismatch { .. })
    ));
}

#[test]
fn unknown_tag_falls_back_to_string() {
    insta::assert_snapshot!(dump("FROBNICATE"), @r#"String kind=String native=true deps=[]"#);
    assert_eq!(Taxonomy::standard().lookup("FROBNICATE").tag, "STRING");
}

#[test]
fn absent_expression_is_untyped() {
    let ty = Taxonomy::standard().resolve(None).unwrap();
    assert_eq!(ty, ResolvedType::untyped());
    assert_eq!(ty.repr(), "String");
    assert!(ty.dependencies().is_empty());
    assert!(ty.is_native());
    assert_eq!(ty, resolve("FROBNICATE").unwrap());
}

#[test]
fn standard_table_has_unique_tags() {
    let mappings = Taxonomy::standard().mappings();
    for (i, m) in mappings.iter().enumerate() {
        assert!(
            mappings[i + 1..].iter().all(|other| other.tag != m.tag),
            "duplicate tag {}",
            m.tag
        );
    }
}

#[test]
fn custom_table() {
    static MAPPINGS: &[TypeMapping] = &[];
    let fallback = *Taxonomy::standard().lookup("BOOLEAN");
    let taxonomy = Taxonomy::new(MAPPINGS, fallback);

    let ty = taxonomy.resolve(Some(&TypeExpr::repeated("PATH"))).unwrap();
    assert_eq!(ty.repr(), "Vec<bool>");
}

#[test]
fn serializes_as_rust_type() {
    let ty = resolve("PATH [...]").unwrap();
    assert_eq!(serde_json::to_string(&ty).unwrap(), r#""Vec<String>""#);
}
