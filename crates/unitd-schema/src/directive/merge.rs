//! Joins typed directives with their documentation.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::identifier::Directive;

/// Option descriptions keyed by directive key, ignoring ASCII case.
///
/// Iteration follows insertion order. Inserting a key again replaces the text
/// but keeps the first spelling and position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
    entries: IndexMap<String, (String, String)>,
}

impl Descriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        match self.entries.get_mut(&key.to_ascii_lowercase()) {
            Some(entry) => entry.1 = text,
            None => {
                self.entries.insert(key.to_ascii_lowercase(), (key, text));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Descriptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut descriptions = Self::new();
        for (key, text) in iter {
            descriptions.insert(key, text);
        }
        descriptions
    }
}

impl Serialize for Descriptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, text) in self.iter() {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

/// Selects the directives of one section and system, in input order.
///
/// Section and system match ignoring ASCII case. When a key appears more than
/// once the first occurrence wins. Matching descriptions are attached.
pub fn merge_section(
    directives: &[Directive],
    section: &str,
    system: &str,
    descriptions: &Descriptions,
) -> Vec<Directive> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for directive in directives {
        if !directive.identifier().in_section(section)
            || !directive.system().eq_ignore_ascii_case(system)
        {
            continue;
        }

        if !seen.insert(directive.key().to_ascii_lowercase()) {
            tracing::debug!(
                identifier = %directive.identifier(),
                "dropping duplicate directive"
            );
            continue;
        }

        let directive = match descriptions.get(directive.key()) {
            Some(text) => directive.clone().with_description(text),
            None => directive.clone(),
        };
        merged.push(directive);
    }

    merged
}
