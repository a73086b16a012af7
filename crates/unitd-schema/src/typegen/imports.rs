use std::collections::{BTreeMap, BTreeSet};

/// Set of `use` paths, rendered sorted and grouped by module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSet {
    paths: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path`; empty paths are ignored.
    pub fn add(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !path.is_empty() {
            self.paths.insert(path);
        }
    }

    pub fn merge(&mut self, other: &ImportSet) {
        self.paths.extend(other.paths.iter().cloned());
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn sorted(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// One `use` line per module, e.g. `use a::b::{C, D};`.
    pub fn render(&self) -> String {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for path in &self.paths {
            let (module, item) = path.rsplit_once("::").unwrap_or(("", path.as_str()));
            groups.entry(module).or_default().push(item);
        }

        let mut out = String::new();
        for (module, items) in groups {
            let prefix = if module.is_empty() {
                String::new()
            } else {
                format!("{module}::")
            };
            match items.as_slice() {
                [item] => out.push_str(&format!("use {prefix}{item};\n")),
                _ => out.push_str(&format!("use {prefix}{{{}}};\n", items.join(", "))),
            }
        }
        out
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.add(path);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
