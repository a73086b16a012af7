//! In-memory model of a systemd unit file and its renderer.
//!
//! Order is load-bearing in unit files: a repeated key denotes a list element,
//! so sections and entries keep insertion order all the way to the output.

use std::fmt;

use indexmap::IndexMap;

/// One `Key=Value` line of a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A finished unit file: output filename plus ordered sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemdUnit {
    filename: String,
    sections: IndexMap<String, Vec<Entry>>,
}

impl SystemdUnit {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn section(&self, name: &str) -> Option<&[Entry]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    /// Render the unit file text.
    ///
    /// Each section is a `[Name]` header followed by its entries and a blank
    /// line. The document ends with exactly one newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, entries) in &self.sections {
            write_section(&mut out, name, entries);
        }

        let mut out = out.trim().to_string();
        out.push('\n');
        out
    }
}

impl fmt::Display for SystemdUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn write_section(out: &mut String, name: &str, entries: &[Entry]) {
    out.push('[');
    out.push_str(name);
    out.push_str("]\n");

    for entry in entries {
        out.push_str(&entry.key);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
    }

    out.push('\n');
}

/// Accumulates entries per section, then freezes into a [`SystemdUnit`].
#[derive(Clone, Debug, Default)]
pub struct SystemdUnitBuilder {
    sections: IndexMap<String, Vec<Entry>>,
}

impl SystemdUnitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to `section`, creating the section on first use.
    pub fn add_entry(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .push(Entry::new(key, value));
        self
    }

    /// Append entries to `section`. The section is created even when
    /// `entries` is empty.
    pub fn add_entries(
        mut self,
        section: impl Into<String>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .extend(entries);
        self
    }

    pub fn build(self, filename: impl Into<String>) -> SystemdUnit {
        SystemdUnit {
            filename: filename.into(),
            sections: self.sections,
        }
    }
}
