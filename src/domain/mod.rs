pub mod base_url;
pub mod configuration;
pub mod error;
pub mod prompt;
pub mod response;
pub mod run_counter;
pub mod scope;

pub use base_url::{mirror_repo_name, resolve_base_url};
pub use configuration::{MirrorSettings, PromptSettings};
pub use error::AppError;
pub use prompt::{
    AssembledPrompt, PromptAssemblyError, PromptContext, PromptKind, PromptRequest,
    TemplateRenderer, assemble_prompt,
};
pub use response::{Verdict, parse_questions, parse_verdict};
pub use run_counter::{RUN_COUNTER_ENV, RUN_COUNTER_SENTINEL, RunCounter, cyclic_index};
pub use scope::SCOPE_FILES;
