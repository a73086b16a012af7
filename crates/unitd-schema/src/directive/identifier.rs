use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::taxonomy::ResolvedType;

/// `(section, key)` pair naming one option, e.g. `Timer.OnCalendar`.
///
/// Equality, hashing and ordering ignore ASCII case; the original spelling
/// is kept for output.
#[derive(Debug, Clone, Serialize)]
pub struct DirectiveIdentifier {
    section: String,
    key: String,
}

impl DirectiveIdentifier {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn in_section(&self, section: &str) -> bool {
        self.section.eq_ignore_ascii_case(section)
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.section
            .bytes()
            .chain(std::iter::once(b'.'))
            .chain(self.key.bytes())
            .map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for DirectiveIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.section.eq_ignore_ascii_case(&other.section) && self.key.eq_ignore_ascii_case(&other.key)
    }
}

impl Eq for DirectiveIdentifier {}

impl Hash for DirectiveIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.section.len().hash(state);
        for b in self.folded() {
            state.write_u8(b);
        }
    }
}

impl PartialOrd for DirectiveIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DirectiveIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_section = fold_cmp(&self.section, &other.section);
        by_section.then_with(|| fold_cmp(&self.key, &other.key))
    }
}

fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

impl fmt::Display for DirectiveIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

/// One option with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    #[serde(flatten)]
    identifier: DirectiveIdentifier,
    #[serde(rename = "type")]
    ty: ResolvedType,
    system: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    dependencies: BTreeSet<String>,
    native: bool,
}

impl Directive {
    pub fn new(identifier: DirectiveIdentifier, ty: ResolvedType, system: impl Into<String>) -> Self {
        let dependencies = ty.dependencies().clone();
        let native = ty.is_native();
        Self {
            identifier,
            ty,
            system: system.into(),
            description: String::new(),
            dependencies,
            native,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn identifier(&self) -> &DirectiveIdentifier {
        &self.identifier
    }

    pub fn section(&self) -> &str {
        self.identifier.section()
    }

    pub fn key(&self) -> &str {
        self.identifier.key()
    }

    pub fn ty(&self) -> &ResolvedType {
        &self.ty
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// Lenient tag when true, strict (`parsed`) tag otherwise.
    pub fn is_native(&self) -> bool {
        self.native
    }
}
