//! Mapping from type tags to Rust field types.
//!
//! Each tag of the type grammar resolves to a Rust type, the `use` paths that
//! type needs and the codec kind it encodes as. A resolved expression wraps
//! the base type in one `Vec` per level of nesting or repetition.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};
use unitd_unit::FieldKind;

use crate::type_expr::TypeExpr;

const UNIT_REF: &str = "unitd_unit::value::UnitRef";
const FILE_MODE: &str = "unitd_unit::value::FileMode";
const TIMESPAN: &str = "unitd_unit::value::Timespan";
const SIGNAL: &str = "unitd_unit::value::Signal";

/// One row of the taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub tag: &'static str,
    pub repr: &'static str,
    pub dependencies: &'static [&'static str],
    pub kind: FieldKind,
}

impl TypeMapping {
    const fn new(
        tag: &'static str,
        repr: &'static str,
        dependencies: &'static [&'static str],
        kind: FieldKind,
    ) -> Self {
        Self {
            tag,
            repr,
            dependencies,
            kind,
        }
    }

    const fn string(tag: &'static str) -> Self {
        Self::new(tag, "String", &[], FieldKind::String)
    }

    const fn unsupported(tag: &'static str, repr: &'static str) -> Self {
        Self::new(tag, repr, &[], FieldKind::Unsupported)
    }
}

const STRING: TypeMapping = TypeMapping::string("STRING");

static STANDARD_MAPPINGS: &[TypeMapping] = &[
    TypeMapping::string("ACCESS"),
    TypeMapping::string("ACTION"),
    TypeMapping::string("ARGUMENT"),
    TypeMapping::string("CONDITION"),
    TypeMapping::string("NETWORKINTERFACE"),
    TypeMapping::string("NODE"),
    TypeMapping::string("PATH"),
    TypeMapping::string("SERVICE"),
    TypeMapping::string("SERVICERESTART"),
    TypeMapping::string("SERVICERESTARTMODE"),
    TypeMapping::string("SERVICETYPE"),
    TypeMapping::string("SOCKET"),
    TypeMapping::string("SOCKETBIND"),
    TypeMapping::string("STATUS"),
    STRING,
    TypeMapping::string("TIMEOUTMODE"),
    TypeMapping::string("TOS"),
    TypeMapping::string("URL"),
    TypeMapping::string("UNKNOWN"),
    TypeMapping::string("NOTSUPPORTED"),
    TypeMapping::new("UNIT", "UnitRef", &[UNIT_REF], FieldKind::String),
    TypeMapping::new("BOOLEAN", "bool", &[], FieldKind::Boolean),
    TypeMapping::unsupported("INTEGER", "i32"),
    TypeMapping::unsupported("SECONDS", "i32"),
    TypeMapping::unsupported("SERVICEEXITTYPE", "i32"),
    TypeMapping::unsupported("LEVEL", "i32"),
    TypeMapping::unsupported("LONG", "i64"),
    TypeMapping::unsupported("SIZE", "i64"),
    TypeMapping::unsupported("UNSIGNED", "u64"),
    TypeMapping::new("MODE", "FileMode", &[FILE_MODE], FieldKind::String),
    TypeMapping::new("TIMER", "Timespan", &[TIMESPAN], FieldKind::String),
    TypeMapping::new("SIGNAL", "Signal", &[SIGNAL], FieldKind::String),
    TypeMapping::new("SOCKETS", "Vec<String>", &[], FieldKind::Sequence),
];

static STANDARD: Taxonomy = Taxonomy {
    mappings: STANDARD_MAPPINGS,
    fallback: STRING,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("nested type mismatch in {expr:?}: {outer} vs {inner}")]
    NestedMismatch {
        expr: String,
        outer: String,
        inner: String,
    },
}

/// Immutable tag table.
#[derive(Debug)]
pub struct Taxonomy {
    mappings: &'static [TypeMapping],
    fallback: TypeMapping,
}

impl Taxonomy {
    /// Table covering every tag the directive feeds use.
    pub fn standard() -> &'static Taxonomy {
        &STANDARD
    }

    /// A custom table. Tags it does not list resolve to `fallback`.
    pub fn new(mappings: &'static [TypeMapping], fallback: TypeMapping) -> Self {
        Self { mappings, fallback }
    }

    pub fn mappings(&self) -> &'static [TypeMapping] {
        self.mappings
    }

    /// Row for `tag`, or the fallback row for unknown tags.
    pub fn lookup(&self, tag: &str) -> &TypeMapping {
        match self.mappings.iter().find(|m| m.tag == tag) {
            Some(mapping) => mapping,
            None => {
                tracing::debug!(tag, fallback = self.fallback.repr, "unknown type tag");
                &self.fallback
            }
        }
    }

    /// Resolves a whole expression. `None` maps to [`ResolvedType::untyped`].
    ///
    /// Every node of the chain must map to the same base type.
    pub fn resolve(&self, expr: Option<&TypeExpr>) -> Result<ResolvedType, TaxonomyError> {
        let Some(expr) = expr else {
            return Ok(ResolvedType::untyped());
        };

        let base = self.lookup(&expr.base);
        let mut dependencies = BTreeSet::new();
        let mut depth = 0;

        for node in expr.chain() {
            let mapping = self.lookup(&node.base);
            if mapping.repr != base.repr {
                return Err(TaxonomyError::NestedMismatch {
                    expr: expr.render(),
                    outer: base.repr.to_string(),
                    inner: mapping.repr.to_string(),
                });
            }
            dependencies.extend(mapping.dependencies.iter().map(|d| d.to_string()));
            if node.inner.is_some() {
                depth += 1;
            }
        }

        if expr.terminal().repeated {
            depth += 1;
        }

        Ok(ResolvedType {
            base: base.repr.to_string(),
            depth,
            dependencies,
            base_kind: base.kind,
        })
    }
}

/// A field type after taxonomy lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    base: String,
    depth: usize,
    dependencies: BTreeSet<String>,
    base_kind: FieldKind,
}

impl ResolvedType {
    /// Fallback for directives without a type expression.
    ///
    /// Stands in for an untyped "any" value. The codec has no such kind, so
    /// this is `String`, identical to the unknown-tag fallback.
    pub fn untyped() -> Self {
        Self {
            base: STRING.repr.to_string(),
            depth: 0,
            dependencies: BTreeSet::new(),
            base_kind: STRING.kind,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Number of `Vec` wrappers around the base type.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Full Rust type, e.g. `Vec<String>`.
    pub fn repr(&self) -> String {
        let mut repr = self.base.clone();
        for _ in 0..self.depth {
            repr = format!("Vec<{repr}>");
        }
        repr
    }

    /// `use` paths the type needs, sorted.
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// Whether the config front-end decodes this type without help.
    pub fn is_native(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn field_kind(&self) -> FieldKind {
        if self.depth > 0 {
            FieldKind::Sequence
        } else {
            self.base_kind
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl Serialize for ResolvedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
