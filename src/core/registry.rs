// LogSieve - core/registry.rs
//
// Category registry: the sorted set of categories in a document and the
// severity levels observed for each one.
// Core layer: pure derivation from parsed entries.

use crate::core::model::{ParsedEntry, Severity};
use crate::core::parser;
use std::collections::{BTreeMap, BTreeSet};

/// Categories and per-category observed levels for one document.
///
/// Derived data: rebuilt whenever the document changes, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    /// Category -> levels observed on entries of that category.
    /// `BTreeMap` keeps keys in ascending byte order, which is the
    /// display order of the category list.
    presence: BTreeMap<String, BTreeSet<Severity>>,
}

impl CategoryRegistry {
    /// Build the registry from already-parsed entries.
    ///
    /// Each entry contributes its own level under its own category.
    /// Continuation lines belong to their parent and are not counted.
    pub fn from_entries(entries: &[ParsedEntry]) -> Self {
        let mut presence: BTreeMap<String, BTreeSet<Severity>> = BTreeMap::new();
        for entry in entries {
            presence
                .entry(entry.category.clone())
                .or_default()
                .insert(entry.level);
        }
        Self { presence }
    }

    /// Parse `content` and build the registry from the resulting entries.
    pub fn from_content(content: &str) -> Self {
        Self::from_entries(&parser::parse_content(content).entries)
    }

    /// Category names in ascending order. `NoLogCategory` sorts with the rest.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.presence.keys().map(String::as_str)
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.presence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presence.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.presence.contains_key(category)
    }

    /// Levels observed for `category`, most severe first. `None` if the
    /// category does not occur in the document.
    pub fn levels(&self, category: &str) -> Option<&BTreeSet<Severity>> {
        self.presence.get(category)
    }

    /// Whether `level` occurs in `category`, i.e. whether it is a useful
    /// choice for that category's minimum level.
    pub fn is_level_present(&self, category: &str, level: Severity) -> bool {
        self.presence
            .get(category)
            .is_some_and(|levels| levels.contains(&level))
    }

    /// Categories whose name contains `query`, ignoring case.
    ///
    /// A blank query matches everything. Order is preserved.
    pub fn search<'a>(&'a self, query: &str) -> Vec<&'a str> {
        let needle = query.trim().to_lowercase();
        self.categories()
            .filter(|cat| needle.is_empty() || cat.to_lowercase().contains(&needle))
            .collect()
    }
}
