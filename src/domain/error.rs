use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for volo-prompts operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A value supplied by the environment or caller could not be interpreted.
    #[error("Invalid {what}: {details}")]
    InvalidInput { what: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Settings file parsed but failed validation.
    #[error("Invalid settings: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt assembly failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(#[from] PromptAssemblyError),

    /// JSON output could not be produced.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn invalid_input<W: Into<String>, D: Into<String>>(what: W, details: D) -> Self {
        AppError::InvalidInput { what: what.into(), details: details.into() }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that map errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidInput { .. }
            | AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::PromptAssembly(PromptAssemblyError::TemplateNotFound(_)) => {
                io::ErrorKind::NotFound
            }
            AppError::PromptAssembly(_) | AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
