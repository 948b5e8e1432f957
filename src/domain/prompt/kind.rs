use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// The four prompt families produced for the audit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    /// Generate targeted audit questions for one file.
    Questions,
    /// Judge whether a vulnerability report holds up.
    Validation,
    /// Investigate a single security question.
    Audit,
    /// Map an external report onto Volo.
    Scan,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] =
        [PromptKind::Questions, PromptKind::Validation, PromptKind::Audit, PromptKind::Scan];

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Questions => "questions",
            PromptKind::Validation => "validation",
            PromptKind::Audit => "audit",
            PromptKind::Scan => "scan",
        }
    }

    /// Template file inside the embedded prompt catalog.
    pub fn template_name(&self) -> &'static str {
        match self {
            PromptKind::Questions => "questions.j2",
            PromptKind::Validation => "validation.j2",
            PromptKind::Audit => "audit.j2",
            PromptKind::Scan => "scan.j2",
        }
    }

    /// Name of the template variable holding the caller's input.
    pub fn input_var(&self) -> &'static str {
        match self {
            PromptKind::Questions => "target_file",
            PromptKind::Validation | PromptKind::Scan => "report",
            PromptKind::Audit => "security_question",
        }
    }

    /// Whether the rendered prompt lists the full scope registry.
    pub fn embeds_scope(&self) -> bool {
        matches!(self, PromptKind::Validation)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PromptKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_input(
                    "prompt kind",
                    format!("'{}': must be one of questions, validation, audit, scan", s),
                )
            })
    }
}
