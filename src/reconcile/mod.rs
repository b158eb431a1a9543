//! Reconciliation of a user configuration against the rule catalog.
//!
//! Produces the ordered sequence of [`Finding`]s: outdated-rule warnings
//! from the Deprecated and Removed sections, then redundant-recommended
//! notices when the config extends `eslint:recommended`. The reconciler is
//! a pure function of its inputs; rendering lives in [`report`].

pub mod report;

use crate::catalog::{Catalog, DEPRECATED_SECTION, REMOVED_SECTION};
use crate::config::EslintConfig;

pub use report::write_report;

/// Preset whose rules are redundant to configure by hand.
pub const RECOMMENDED_PRESET: &str = "eslint:recommended";

/// What kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// The rule is deprecated or removed upstream.
    Outdated,
    /// The rule is already enabled by `eslint:recommended`.
    RedundantRecommended,
}

/// One actionable issue with the user's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The kind of issue.
    pub kind: FindingKind,
    /// The configured rule the finding is about.
    pub rule_id: String,
    /// The superseding rule, for outdated findings that have one.
    pub replacement: Option<String>,
}

impl Finding {
    fn outdated(rule_id: &str, replacement: &str) -> Self {
        Self {
            kind: FindingKind::Outdated,
            rule_id: rule_id.to_string(),
            replacement: if replacement.is_empty() {
                None
            } else {
                Some(replacement.to_string())
            },
        }
    }

    fn redundant_recommended(rule_id: &str) -> Self {
        Self {
            kind: FindingKind::RedundantRecommended,
            rule_id: rule_id.to_string(),
            replacement: None,
        }
    }
}

/// Reconcile the catalog with the user configuration.
///
/// Findings are ordered by catalog-section traversal (Deprecated, then
/// Removed, in row order within each), then by the sorted recommended set.
/// A rule listed in both Deprecated and Removed yields two findings. A
/// missing section skips that section's check with a warning; an empty
/// catalog yields no findings at all.
pub fn reconcile(catalog: &Catalog, config: &EslintConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for section_name in [DEPRECATED_SECTION, REMOVED_SECTION] {
        match catalog.section(section_name) {
            Some(section) => {
                for record in section.iter() {
                    if config.has_rule(&record.id) {
                        findings.push(Finding::outdated(&record.id, &record.replacement));
                    }
                }
            }
            None => {
                tracing::warn!(
                    "Section \"{}\" not found in the rules documentation; skipping its check",
                    section_name
                );
            }
        }
    }

    if config.extends_preset(RECOMMENDED_PRESET) {
        for rule_id in &catalog.recommended {
            if config.has_rule(rule_id) {
                findings.push(Finding::redundant_recommended(rule_id));
            }
        }
    }

    findings
}
