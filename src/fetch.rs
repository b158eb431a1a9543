//! Rules documentation fetching.
//!
//! One blocking GET of the rules index page at the start of a run. No
//! retries and no caching: a failed fetch aborts the whole audit.

use std::time::Duration;

use crate::error::{AuditError, Result};

/// The upstream rules index.
pub const RULES_URL: &str = "https://eslint.org/docs/rules/";

/// Environment override for the rules index URL, used by integration tests
/// to point the tool at a local server.
pub const RULES_URL_ENV: &str = "ESLINT_RULES_URL";

/// Resolve the rules index URL, honoring the environment override.
pub fn rules_url() -> String {
    std::env::var(RULES_URL_ENV).unwrap_or_else(|_| RULES_URL.to_string())
}

/// Fetches the rules documentation page.
pub struct DocsFetcher {
    client: reqwest::blocking::Client,
}

impl DocsFetcher {
    /// Create a fetcher with the specified request timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetch the page body from a URL.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().map_err(|e| AuditError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Network {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response.text().map_err(|e| AuditError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for DocsFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}
