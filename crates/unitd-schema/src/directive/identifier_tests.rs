use std::collections::{BTreeSet, HashSet};

use crate::taxonomy::{ResolvedType, Taxonomy};
use crate::type_expr::TypeExpr;

use super::identifier::{Directive, DirectiveIdentifier};

#[test]
fn identifier_ignores_case() {
    let a = DirectiveIdentifier::new("Timer", "OnCalendar");
    let b = DirectiveIdentifier::new("timer", "oncalendar");
    assert_eq!(a, b);

    let set: HashSet<_> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(a.to_string(), "Timer.OnCalendar");
}

#[test]
fn identifier_ordering() {
    let ids: BTreeSet<_> = [
        DirectiveIdentifier::new("Unit", "after"),
        DirectiveIdentifier::new("install", "WantedBy"),
        DirectiveIdentifier::new("Unit", "Before"),
        DirectiveIdentifier::new("Install", "Alias"),
    ]
    .into_iter()
    .collect();

    let rendered: Vec<_> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        ["Install.Alias", "install.WantedBy", "Unit.after", "Unit.Before"]
    );
}

#[test]
fn section_and_key_are_not_confused() {
    assert_ne!(
        DirectiveIdentifier::new("Ab", "c"),
        DirectiveIdentifier::new("A", "bc")
    );
}

#[test]
fn directive_native_follows_dependencies() {
    let taxonomy = Taxonomy::standard();

    let plain = Directive::new(
        DirectiveIdentifier::new("Timer", "Persistent"),
        taxonomy.resolve(Some(&TypeExpr::leaf("BOOLEAN"))).unwrap(),
        "core",
    );
    assert!(plain.is_native());
    assert!(plain.dependencies().is_empty());

    let typed = Directive::new(
        DirectiveIdentifier::new("Timer", "Unit"),
        taxonomy.resolve(Some(&TypeExpr::leaf("UNIT"))).unwrap(),
        "core",
    );
    assert!(!typed.is_native());
    assert_eq!(
        typed.dependencies().iter().collect::<Vec<_>>(),
        ["unitd_unit::value::UnitRef"]
    );
}

#[test]
fn description_is_attached() {
    let directive = Directive::new(
        DirectiveIdentifier::new("Unit", "Description"),
        ResolvedType::untyped(),
        "core",
    )
    .with_description("A short human readable title.");

    assert_eq!(directive.description(), "A short human readable title.");
    assert_eq!(directive.section(), "Unit");
    assert_eq!(directive.key(), "Description");
    assert_eq!(directive.system(), "core");
}
