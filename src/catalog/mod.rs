//! Rule catalog extracted from the rules documentation page.
//!
//! The catalog maps section names (e.g. "Deprecated", "Possible Errors") to
//! the rules listed under them, and carries two cross-section aggregates:
//! the identifiers of recommended rules and of auto-fixable rules. A catalog
//! is built once per run by [`extractor::extract_catalog`] and read-only
//! afterward.

pub mod extractor;

use std::collections::BTreeSet;

pub use extractor::extract_catalog;

/// Section listing rules scheduled for removal.
pub const DEPRECATED_SECTION: &str = "Deprecated";
/// Section listing rules already removed.
pub const REMOVED_SECTION: &str = "Removed";
/// Section gated on the `es6` environment toggle.
pub const ES6_SECTION: &str = "ECMAScript 6";
/// Environment key that gates [`ES6_SECTION`].
pub const ES6_ENV: &str = "es6";

/// One rule as listed in the documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    /// Rule identifier, unique within its section.
    pub id: String,
    /// Identifier of the superseding rule; empty when none exists.
    pub replacement: String,
    /// Free-text description (4-column tables only).
    pub description: Option<String>,
    /// Carried a "recommended" marker.
    pub recommended: bool,
    /// Carried a "fixable" marker.
    pub fixable: bool,
}

impl RuleRecord {
    /// Whether a superseding rule exists.
    pub fn has_replacement(&self) -> bool {
        !self.replacement.is_empty()
    }
}

/// The rules of one documentation section, in row order.
#[derive(Debug, Clone, Default)]
pub struct SectionRules {
    /// Section heading text.
    pub name: String,
    rules: Vec<RuleRecord>,
}

impl SectionRules {
    /// Insert a record, keeping row order. A repeated identifier within the
    /// same section replaces the earlier record in place.
    pub fn insert(&mut self, record: RuleRecord) {
        if let Some(existing) = self.rules.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            self.rules.push(record);
        }
    }

    /// Look up a rule by identifier.
    pub fn get(&self, rule_id: &str) -> Option<&RuleRecord> {
        self.rules.iter().find(|r| r.id == rule_id)
    }

    /// Iterate records in row order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleRecord> {
        self.rules.iter()
    }

    /// Number of rules in this section.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the section holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The extracted catalog: sections in document order plus the aggregate
/// recommended/fixable sets.
///
/// An empty catalog is valid; every downstream check treats it as a no-op.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<SectionRules>,
    /// Identifiers of rules marked recommended, across all sections.
    pub recommended: BTreeSet<String>,
    /// Identifiers of rules marked fixable, across all sections.
    pub fixable: BTreeSet<String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a section by heading text.
    pub fn section(&self, name: &str) -> Option<&SectionRules> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Insert a record under the named section, creating the section at the
    /// end of the traversal order if it is new.
    pub fn insert(&mut self, section_name: &str, record: RuleRecord) {
        if record.recommended {
            self.recommended.insert(record.id.clone());
        }
        if record.fixable {
            self.fixable.insert(record.id.clone());
        }
        match self.sections.iter_mut().find(|s| s.name == section_name) {
            Some(section) => section.insert(record),
            None => {
                let mut section = SectionRules {
                    name: section_name.to_string(),
                    ..Default::default()
                };
                section.insert(record);
                self.sections.push(section);
            }
        }
    }

    /// Iterate sections in document traversal order.
    pub fn sections(&self) -> impl Iterator<Item = &SectionRules> {
        self.sections.iter()
    }

    /// Whether no section holds any rule.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.is_empty())
    }
}
