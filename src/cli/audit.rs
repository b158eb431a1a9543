//! Audit command implementation.
//!
//! Wires the full pipeline: fetch the rules page, parse it, load the user
//! configuration, extract the catalog, reconcile, and write the report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::extract_catalog;
use crate::config::load_config_file;
use crate::error::Result;
use crate::fetch::{rules_url, DocsFetcher};
use crate::markup::Document;
use crate::reconcile::{reconcile, write_report};

/// The audit command.
pub struct AuditCommand {
    config_path: PathBuf,
}

impl AuditCommand {
    /// Create an audit of the given eslintrc file.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }

    /// Run the audit, writing the report to `out`.
    ///
    /// Findings are advice, not failures: the run succeeds regardless of
    /// how many findings it produces. Only a failed fetch or a bad config
    /// file is an error.
    pub fn run<W: std::io::Write>(&self, out: &mut W) -> Result<()> {
        let config = load_config_file(&self.config_path)?;
        tracing::debug!(
            "Loaded {} with {} configured rule(s)",
            self.config_path.display(),
            config.rules.len()
        );

        let url = rules_url();
        tracing::info!("Fetching rules documentation from {}", url);
        let fetcher = DocsFetcher::new(Duration::from_secs(30));
        let page = fetcher.fetch(&url)?;

        let doc = Document::parse(&page);
        let catalog = extract_catalog(&doc, &config);
        tracing::debug!(
            "Extracted {} section(s), {} recommended rule(s)",
            catalog.sections().count(),
            catalog.recommended.len()
        );

        let findings = reconcile(&catalog, &config);
        write_report(&findings, out)?;

        Ok(())
    }
}
