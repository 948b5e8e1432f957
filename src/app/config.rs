//! Process configuration, resolved once at startup and passed explicitly.

use std::fs;
use std::path::Path;

use url::Url;

use crate::adapters::EnvConfigSource;
use crate::domain::configuration::{PromptSettings, parse_settings};
use crate::domain::{AppError, RUN_COUNTER_ENV, RunCounter, resolve_base_url};
use crate::ports::ConfigSource;

/// Immutable configuration for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    run_counter: RunCounter,
    base_url: Url,
    settings: PromptSettings,
}

impl AppConfig {
    /// Read the run counter from `source` and resolve the documentation URL.
    ///
    /// A run counter that is present but not an integer is fatal.
    pub fn load(source: &impl ConfigSource, settings: PromptSettings) -> Result<Self, AppError> {
        settings.validate()?;

        let raw = source.get(RUN_COUNTER_ENV);
        let run_counter = RunCounter::from_env_value(raw.as_deref())?;
        let base_url = resolve_base_url(run_counter, &settings.mirror)?;
        tracing::info!(run_counter = %run_counter, base_url = %base_url, "resolved base URL");

        Ok(Self { run_counter, base_url, settings })
    }

    /// Configuration from the process environment with default settings.
    pub fn from_env() -> Result<Self, AppError> {
        Self::load(&EnvConfigSource, PromptSettings::default())
    }

    pub fn run_counter(&self) -> RunCounter {
        self.run_counter
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn settings(&self) -> &PromptSettings {
        &self.settings
    }
}

/// Load prompt settings from a TOML file.
pub fn load_settings_file(path: &Path) -> Result<PromptSettings, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::config_error(format!("Failed to read settings {}: {}", path.display(), err))
    })?;
    tracing::debug!(path = %path.display(), "loaded settings file");
    parse_settings(&content)
}
