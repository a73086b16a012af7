use serde::Serialize;

use super::identifier::Directive;
use super::merge::{Descriptions, merge_section};

const PAGE_PREFIX: &str = "systemd.";

/// A unit kind's documentation page, already reduced to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnitPage {
    name: String,
    title: String,
    purpose: String,
    description: String,
    options: Descriptions,
}

impl UnitPage {
    /// `name` is the page name; a leading `systemd.` is dropped, so
    /// `systemd.timer` becomes `timer`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.strip_prefix(PAGE_PREFIX) {
            Some(rest) => rest.to_string(),
            None => name,
        };
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// Paragraphs separated by a blank line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn options(mut self, options: Descriptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn option_descriptions(&self) -> &Descriptions {
        &self.options
    }

    /// Attaches this page's descriptions to the directives of its section.
    pub fn merge(&self, directives: &[Directive], system: &str) -> UnitSchema {
        UnitSchema {
            name: self.name.clone(),
            title: self.title.clone(),
            purpose: self.purpose.clone(),
            description: self.description.clone(),
            options: merge_section(directives, &self.name, system, &self.options),
        }
    }
}

/// A unit kind with its merged options, ready for generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSchema {
    pub name: String,
    pub title: String,
    pub purpose: String,
    pub description: String,
    pub options: Vec<Directive>,
}

impl UnitSchema {
    /// Whether the unit kind has its own `[Section]`.
    pub fn has_section(&self) -> bool {
        !self.options.is_empty()
    }

    /// Pretty-printed JSON dump.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
