//! API facade.
//!
//! The four prompt builders are pure: the same input always yields byte-identical
//! output, and input text is inserted verbatim.

use crate::adapters::{MinijinjaTemplateRenderer, read_prompt_template};
use crate::domain::{AppError, AssembledPrompt, PromptKind, PromptRequest, assemble_prompt};

pub use crate::app::config::{AppConfig, load_settings_file};
pub use crate::domain::response::{AuditReport, ReportSection, Verdict, parse_questions, parse_verdict};

/// Render `request` with the embedded templates.
pub fn build_prompt(request: &PromptRequest) -> Result<AssembledPrompt, AppError> {
    Ok(assemble_prompt(request, &MinijinjaTemplateRenderer::new(), read_prompt_template)?)
}

fn build(kind: PromptKind, input: &str) -> Result<String, AppError> {
    build_prompt(&PromptRequest::new(kind, input)).map(|prompt| prompt.content)
}

/// Prompt asking for targeted audit questions about one file.
///
/// `target_file` is a repository-relative path such as `volo-vault/sources/oracle.move`.
pub fn question_generator(target_file: &str) -> Result<String, AppError> {
    build(PromptKind::Questions, target_file)
}

/// Prompt asking a strict judge to validate or reject `report`.
/// Embeds the full scope registry.
pub fn validation_format(report: &str) -> Result<String, AppError> {
    build(PromptKind::Validation, report)
}

/// Prompt investigating one security question.
pub fn audit_format(security_question: &str) -> Result<String, AppError> {
    build(PromptKind::Audit, security_question)
}

/// Prompt mapping an external protocol's report onto Volo.
pub fn scan_format(report: &str) -> Result<String, AppError> {
    build(PromptKind::Scan, report)
}
