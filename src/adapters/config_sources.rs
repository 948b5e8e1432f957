//! Configuration sources: process environment and `.env` files.

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigSource;

/// Reads values from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Values parsed from a `.env` file. The process environment is left untouched.
#[derive(Debug, Default, Clone)]
pub struct DotenvConfigSource {
    values: BTreeMap<String, String>,
}

impl DotenvConfigSource {
    /// Load `path`, failing if it is missing or malformed.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let iter = dotenvy::from_path_iter(path).map_err(dotenv_error)?;
        Self::collect(iter)
    }

    /// Load `path` if it exists; a missing file yields an empty source.
    pub fn load_optional(path: &Path) -> Result<Self, AppError> {
        match Self::load(path) {
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no .env file");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse `.env` content from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        Self::collect(dotenvy::from_read_iter(reader))
    }

    fn collect<I>(iter: I) -> Result<Self, AppError>
    where
        I: Iterator<Item = dotenvy::Result<(String, String)>>,
    {
        let mut values = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(dotenv_error)?;
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for DotenvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn dotenv_error(err: dotenvy::Error) -> AppError {
    match err {
        dotenvy::Error::Io(err) => AppError::Io(err),
        other => AppError::config_error(format!("Malformed .env file: {}", other)),
    }
}

/// Consults each source in order and returns the first value found.
pub struct LayeredConfigSource {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfigSource {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append a lower-priority layer.
    pub fn with_layer(mut self, layer: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Process environment first, then the given `.env` file if present.
    pub fn env_then_dotenv(dotenv_path: &Path) -> Result<Self, AppError> {
        Ok(Self::new()
            .with_layer(EnvConfigSource)
            .with_layer(DotenvConfigSource::load_optional(dotenv_path)?))
    }
}

impl Default for LayeredConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for LayeredConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}
