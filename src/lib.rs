//! eslint-audit - Check an eslintrc against the upstream rules documentation.
//!
//! Fetches the ESLint rules index page, extracts a catalog of rules keyed by
//! documentation section, and reconciles it against a user's
//! `.eslintrc.json`: rules listed as deprecated or removed produce
//! outdated-rule warnings, and rules already covered by `eslint:recommended`
//! produce redundancy notices.
//!
//! # Modules
//!
//! - [`catalog`] - Rule catalog types and the extraction pass
//! - [`cli`] - Command-line interface and the audit command
//! - [`config`] - eslintrc loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Rules page fetching
//! - [`markup`] - Lenient HTML tree and query primitives
//! - [`reconcile`] - Finding production and report rendering
//!
//! # Example
//!
//! ```
//! use eslint_audit::catalog::{Catalog, RuleRecord, DEPRECATED_SECTION};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(
//!     DEPRECATED_SECTION,
//!     RuleRecord {
//!         id: "no-new-object".to_string(),
//!         replacement: String::new(),
//!         description: None,
//!         recommended: false,
//!         fixable: false,
//!     },
//! );
//! assert!(catalog.section(DEPRECATED_SECTION).unwrap().get("no-new-object").is_some());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod reconcile;

pub use error::{AuditError, Result};
