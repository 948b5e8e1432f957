use std::collections::HashMap;

use sha2::{Digest, Sha256};

use super::kind::PromptKind;
use crate::domain::scope::scope_files_literal;

/// Variable name under which the scope registry is exposed to templates.
pub const SCOPE_FILES_VAR: &str = "scope_files";

/// Runtime context for template rendering.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Variable name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// A prompt to build: the kind plus the caller's input text.
///
/// Input is carried verbatim. Nothing is escaped or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Questions { target_file: String },
    Validation { report: String },
    Audit { security_question: String },
    Scan { report: String },
}

impl PromptRequest {
    /// Build a request of `kind` around `input`.
    pub fn new(kind: PromptKind, input: impl Into<String>) -> Self {
        let input = input.into();
        match kind {
            PromptKind::Questions => PromptRequest::Questions { target_file: input },
            PromptKind::Validation => PromptRequest::Validation { report: input },
            PromptKind::Audit => PromptRequest::Audit { security_question: input },
            PromptKind::Scan => PromptRequest::Scan { report: input },
        }
    }

    pub fn kind(&self) -> PromptKind {
        match self {
            PromptRequest::Questions { .. } => PromptKind::Questions,
            PromptRequest::Validation { .. } => PromptKind::Validation,
            PromptRequest::Audit { .. } => PromptKind::Audit,
            PromptRequest::Scan { .. } => PromptKind::Scan,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            PromptRequest::Questions { target_file } => target_file,
            PromptRequest::Validation { report } | PromptRequest::Scan { report } => report,
            PromptRequest::Audit { security_question } => security_question,
        }
    }

    /// Template variables for this request.
    pub fn context(&self) -> PromptContext {
        let kind = self.kind();
        let ctx = PromptContext::new().with_var(kind.input_var(), self.input());
        if kind.embeds_scope() { ctx.with_var(SCOPE_FILES_VAR, scope_files_literal()) } else { ctx }
    }
}

/// Result of prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    pub kind: PromptKind,

    /// The fully rendered prompt text.
    pub content: String,
}

impl AssembledPrompt {
    /// Hex SHA-256 of the content. Identical requests always share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.content.as_bytes());
        format!("{:x}", digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_context_with_var() {
        let ctx = PromptContext::new().with_var("report", "overflow in math.move");

        assert_eq!(ctx.get("report"), Some("overflow in math.move"));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn request_round_trips_kind_and_input() {
        for kind in PromptKind::ALL {
            let request = PromptRequest::new(kind, "input");
            assert_eq!(request.kind(), kind);
            assert_eq!(request.input(), "input");
        }
    }

    #[test]
    fn validation_context_carries_scope() {
        let ctx = PromptRequest::new(PromptKind::Validation, "claim").context();
        assert_eq!(ctx.get("report"), Some("claim"));
        assert!(ctx.get(SCOPE_FILES_VAR).unwrap().starts_with("['liquid_staking/"));
    }

    #[test]
    fn audit_context_has_only_the_question() {
        let ctx = PromptRequest::new(PromptKind::Audit, "q").context();
        assert_eq!(ctx.variables.len(), 1);
        assert_eq!(ctx.get("security_question"), Some("q"));
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let prompt = AssembledPrompt { kind: PromptKind::Scan, content: "abc".into() };
        assert_eq!(
            prompt.fingerprint(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
