use crate::foundation::error::{DiplomaError, DiplomaResult};

/// Separator placed between a namespace and an identifier when composing section names.
pub const SECTION_SEPARATOR: &str = ".";

/// Compose the section name for `id` inside `namespace` (`"text" + "." + id`).
///
/// The result is an opaque lookup name: the dot carries no structure for [`ConfigTree`].
pub fn section_name(namespace: &str, id: &str) -> String {
    let mut out = String::with_capacity(namespace.len() + SECTION_SEPARATOR.len() + id.len());
    out.push_str(namespace);
    out.push_str(SECTION_SEPARATOR);
    out.push_str(id);
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Named group of string key/value pairs. Keys are unique and keep insertion order.
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// Construct an empty section called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Section name as written in the config file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored under `key`, if any.
    pub fn key(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Key names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Section::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Read-only view over the parsed configuration: an ordered list of flat sections.
pub struct ConfigTree {
    sections: Vec<Section>,
    empty: Section,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `section`, merging its keys into an existing section of the same name.
    pub fn push(&mut self, section: Section) {
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(existing) => {
                for (k, v) in section.entries {
                    existing.insert(k, v);
                }
            }
            None => self.sections.push(section),
        }
    }

    /// Builder-style [`ConfigTree::push`].
    pub fn with_section(mut self, section: Section) -> Self {
        self.push(section);
        self
    }

    /// Strict lookup by exact name.
    pub fn section(&self, name: &str) -> DiplomaResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DiplomaError::MissingSection(name.to_string()))
    }

    /// Lenient lookup: a missing section reads as an empty one.
    pub fn section_or_empty(&self, name: &str) -> &Section {
        self.section(name).unwrap_or(&self.empty)
    }

    /// Section names in declaration order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/tree.rs"]
mod tests;
