//! Prompt settings loaded from an optional TOML file.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Settings file contents. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSettings {
    /// Documentation mirror configuration.
    #[serde(default)]
    pub mirror: MirrorSettings,
}

impl PromptSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.mirror.validate()
    }
}

/// Where the audited project's documentation lives and how mirrors are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MirrorSettings {
    /// Documentation host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Canonical `owner/repo` path on the host.
    #[serde(default = "default_source_repo")]
    pub source_repo: String,
    /// Organisation hosting the numbered mirrors.
    #[serde(default = "default_org")]
    pub org: String,
    /// Repository name the mirror suffix is appended to.
    #[serde(default = "default_repo_name")]
    pub repo_name: String,
    /// Number of mirrors in rotation.
    #[serde(default = "default_max_index")]
    pub max_index: u32,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            source_repo: default_source_repo(),
            org: default_org(),
            repo_name: default_repo_name(),
            max_index: default_max_index(),
        }
    }
}

impl MirrorSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_index == 0 {
            return Err(AppError::InvalidConfig("mirror.max_index must be greater than 0".into()));
        }
        if self.max_index > 999 {
            return Err(AppError::InvalidConfig(
                "mirror.max_index must fit in a three-digit suffix (<= 999)".into(),
            ));
        }
        let host = self.host_url()?;
        if host.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "mirror.host '{}' cannot be used as a base URL",
                self.host
            )));
        }
        for (field, value) in [
            ("mirror.source_repo", &self.source_repo),
            ("mirror.org", &self.org),
            ("mirror.repo_name", &self.repo_name),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    pub fn host_url(&self) -> Result<Url, AppError> {
        Url::parse(&self.host).map_err(|err| {
            AppError::InvalidConfig(format!("mirror.host '{}' is not a valid URL: {}", self.host, err))
        })
    }
}

fn default_host() -> String {
    "https://deepwiki.com".to_string()
}

fn default_source_repo() -> String {
    "Sui-Volo/volo-smart-contracts".to_string()
}

fn default_org() -> String {
    "grass-dev-pa".to_string()
}

fn default_repo_name() -> String {
    "volo-smart-contracts".to_string()
}

fn default_max_index() -> u32 {
    30
}

/// Parse settings from TOML content and validate them.
pub fn parse_settings(content: &str) -> Result<PromptSettings, AppError> {
    let settings: PromptSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
