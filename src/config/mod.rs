//! ESLint configuration loading.
//!
//! Loads an `.eslintrc.json` file into [`EslintConfig`]. All five top-level
//! keys are required; a missing key is reported as a parse error so the user
//! sees which field their config lacks.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AuditError, Result};

/// A loaded `.eslintrc.json`.
///
/// Presence of a key in [`rules`](Self::rules) is what makes a rule
/// "configured" for the audit; the severity value is kept but never
/// inspected, so a rule explicitly set to `"off"` is still audited.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintConfig {
    /// Parser options, opaque to the audit.
    pub parser_options: serde_json::Value,
    /// Environment toggles, e.g. `{"es6": true}`.
    pub env: HashMap<String, bool>,
    /// Extended presets, e.g. `["eslint:recommended"]`.
    pub extends: Vec<String>,
    /// Plugin names, opaque to the audit.
    pub plugins: Vec<String>,
    /// Configured rules keyed by rule identifier.
    pub rules: serde_json::Map<String, serde_json::Value>,
}

impl EslintConfig {
    /// Whether the given rule identifier is configured.
    pub fn has_rule(&self, rule_id: &str) -> bool {
        self.rules.contains_key(rule_id)
    }

    /// Whether `extends` names the given preset.
    pub fn extends_preset(&self, preset: &str) -> bool {
        self.extends.iter().any(|e| e == preset)
    }

    /// Whether the given environment is enabled.
    pub fn env_enabled(&self, name: &str) -> bool {
        self.env.get(name).copied().unwrap_or(false)
    }
}

/// Load and parse an eslintrc file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the JSON is invalid or a required key is missing.
pub fn load_config_file(path: &Path) -> Result<EslintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into [`EslintConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<EslintConfig> {
    serde_json::from_str(content).map_err(|e| AuditError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
