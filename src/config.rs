//! Configuration for change tracking
//!
//! Every storage key and URL the change-tracking run touches lives here.
//! Defaults describe the Gene Ontology release layout.

use crate::models::TermState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for fetching, diffing and publishing releases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangesConfig {
    /// Ontology name used in report titles and notices
    pub ontology_label: String,
    /// Download URL of the current ontology release
    pub ontology_url: String,
    /// JSON document declaring the current release date (`{"date": ...}`)
    pub release_date_url: String,
    /// Directory holding dated archives
    pub archive_prefix: String,
    /// Suffix of archived ontology files (`<date>_<suffix>`)
    pub ontology_key: String,
    pub latest_json_key: String,
    pub latest_tsv_key: String,
    pub archive_json_suffix: String,
    pub archive_tsv_suffix: String,
    /// Key holding the last release date a notice was sent for
    pub release_date_key: String,
    /// Public URL under which stored artifacts can be downloaded
    pub public_base_url: String,
    /// Terms driving the diff passes
    pub term_state: TermState,
    /// Indent the JSON report
    pub pretty_json: bool,
}

impl Default for ChangesConfig {
    fn default() -> Self {
        Self {
            ontology_label: "GO".to_string(),
            ontology_url: "http://purl.obolibrary.org/obo/go.obo".to_string(),
            release_date_url: "http://current.geneontology.org/metadata/release-date.json"
                .to_string(),
            archive_prefix: "archive".to_string(),
            ontology_key: "go.obo".to_string(),
            latest_json_key: "go-last-changes.json".to_string(),
            latest_tsv_key: "go-last-changes.tsv".to_string(),
            archive_json_suffix: "_changes.json".to_string(),
            archive_tsv_suffix: "_changes.tsv".to_string(),
            release_date_key: "go-last-release-date".to_string(),
            public_base_url: "https://s3.amazonaws.com/geneontology-public".to_string(),
            term_state: TermState::Any,
            pretty_json: false,
        }
    }
}

impl ChangesConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ChangesConfigBuilder {
        ChangesConfigBuilder::default()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject empty keys and URLs
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("ontology_label", &self.ontology_label),
            ("ontology_url", &self.ontology_url),
            ("release_date_url", &self.release_date_url),
            ("ontology_key", &self.ontology_key),
            ("latest_json_key", &self.latest_json_key),
            ("latest_tsv_key", &self.latest_tsv_key),
            ("archive_json_suffix", &self.archive_json_suffix),
            ("archive_tsv_suffix", &self.archive_tsv_suffix),
            ("release_date_key", &self.release_date_key),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("'{}' must not be empty", name)));
            }
        }
        if self.latest_json_key == self.latest_tsv_key {
            return Err(ConfigError::Invalid(
                "latest JSON and TSV reports must use different keys".to_string(),
            ));
        }
        Ok(())
    }

    fn archive_key(&self, date: &str, suffix: &str) -> String {
        crate::storage::join_key(&self.archive_prefix, &format!("{}{}", date, suffix))
    }

    /// `archive/<date>_go.obo`
    pub fn archived_ontology_key(&self, date: &str) -> String {
        self.archive_key(date, &format!("_{}", self.ontology_key))
    }

    /// `archive/<date>_changes.json`
    pub fn archived_json_key(&self, date: &str) -> String {
        self.archive_key(date, &self.archive_json_suffix)
    }

    /// `archive/<date>_changes.tsv`
    pub fn archived_tsv_key(&self, date: &str) -> String {
        self.archive_key(date, &self.archive_tsv_suffix)
    }

    /// Public download URL of a stored artifact
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

/// Builder for ChangesConfig
#[derive(Debug, Default)]
pub struct ChangesConfigBuilder {
    config: ChangesConfig,
}

impl ChangesConfigBuilder {
    pub fn ontology_label(mut self, label: impl Into<String>) -> Self {
        self.config.ontology_label = label.into();
        self
    }

    pub fn ontology_url(mut self, url: impl Into<String>) -> Self {
        self.config.ontology_url = url.into();
        self
    }

    pub fn release_date_url(mut self, url: impl Into<String>) -> Self {
        self.config.release_date_url = url.into();
        self
    }

    pub fn archive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.archive_prefix = prefix.into();
        self
    }

    pub fn public_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.public_base_url = url.into();
        self
    }

    pub fn term_state(mut self, state: TermState) -> Self {
        self.config.term_state = state;
        self
    }

    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChangesConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
