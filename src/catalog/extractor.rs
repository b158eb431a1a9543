//! Catalog extraction from the parsed rules page.
//!
//! Walks every table in the document, resolves the `<h2>` heading that owns
//! it, and normalizes each row into a [`RuleRecord`]. The page mixes two row
//! shapes: 2-cell rows (rule, replacement) in the Deprecated/Removed
//! sections and 4-cell rows (recommended marker, fixable marker, rule,
//! description) in the category sections. Rows with any other cell count
//! are tolerated and skipped; upstream markup is not contractually stable.

use crate::catalog::{Catalog, RuleRecord, ES6_ENV, ES6_SECTION};
use crate::config::EslintConfig;
use crate::markup::{Document, NodeId};

/// Replacement-column sentinel meaning "no replacement exists".
const NO_REPLACEMENT_SENTINEL: &str = "(no replacement)";

/// Marker title identifying a recommended rule.
const RECOMMENDED_MARKER: &str = "recommended";
/// Marker title identifying an auto-fixable rule.
const FIXABLE_MARKER: &str = "fixable";

/// Build a [`Catalog`] from the parsed rules page.
///
/// The user config is consulted only for environment gating: the
/// "ECMAScript 6" section is included only when the config enables the
/// `es6` environment. Everything the extractor produces is in the returned
/// value; no state outlives the call.
pub fn extract_catalog(doc: &Document, config: &EslintConfig) -> Catalog {
    let mut catalog = Catalog::new();

    for table in doc.find_all("table") {
        let Some(section_name) = owning_section(doc, table) else {
            tracing::warn!("Skipping a table with no governing section heading");
            continue;
        };

        if section_name == ES6_SECTION && !config.env_enabled(ES6_ENV) {
            tracing::debug!(
                "Skipping section \"{}\": environment \"{}\" is not enabled",
                section_name,
                ES6_ENV
            );
            continue;
        }

        for row in doc.descendants_with_tag(table, "tr") {
            if let Some(record) = normalize_row(doc, row) {
                catalog.insert(&section_name, record);
            }
        }
    }

    catalog
}

/// Resolve the heading that owns a table: the nearest preceding sibling
/// `<h2>`, retried against the table's parent when the table is nested
/// inside another container.
fn owning_section(doc: &Document, table: NodeId) -> Option<String> {
    let heading = doc.previous_sibling(table, "h2").or_else(|| {
        doc.parent(table)
            .and_then(|parent| doc.previous_sibling(parent, "h2"))
    })?;
    Some(doc.text(heading).trim().to_string())
}

/// Normalize one table row into a record, or `None` for rows that carry no
/// rule (header rows, separator rows, unexpected shapes).
fn normalize_row(doc: &Document, row: NodeId) -> Option<RuleRecord> {
    let cells = doc.children_with_tag(row, "td");
    match cells.len() {
        2 => {
            let id = doc.text(cells[0]).trim().to_string();
            let mut replacement = doc.text(cells[1]).trim().to_string();
            if replacement == NO_REPLACEMENT_SENTINEL {
                replacement = String::new();
            }
            Some(RuleRecord {
                id,
                replacement,
                description: None,
                recommended: false,
                fixable: false,
            })
        }
        4 => Some(RuleRecord {
            id: doc.text(cells[2]).trim().to_string(),
            replacement: String::new(),
            description: Some(doc.text(cells[3]).trim().to_string()),
            recommended: has_marker(doc, cells[0], RECOMMENDED_MARKER),
            fixable: has_marker(doc, cells[1], FIXABLE_MARKER),
        }),
        _ => None,
    }
}

/// Whether a cell contains an inline marker with the given title.
fn has_marker(doc: &Document, cell: NodeId, title: &str) -> bool {
    doc.descendant_with_attr(cell, "title")
        .and_then(|marker| doc.attr(marker, "title"))
        .is_some_and(|value| value == title)
}
