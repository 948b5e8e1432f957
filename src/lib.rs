//! volo-prompts: prompt builders for LLM-driven security audits of the Volo protocol.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    AppConfig, AuditReport, ReportSection, Verdict, audit_format, build_prompt, load_settings_file,
    parse_questions, parse_verdict, question_generator, scan_format, validation_format,
};
pub use domain::response::{NO_VULNERABILITY_REPLY, REPORT_SECTIONS};
pub use domain::run_counter::parse_cyclic_index;
pub use domain::scope::scope_files_literal;
pub use domain::{
    AppError, AssembledPrompt, MirrorSettings, PromptKind, PromptRequest, PromptSettings,
    RUN_COUNTER_ENV, RunCounter, SCOPE_FILES, cyclic_index, resolve_base_url,
};
pub use ports::ConfigSource;
