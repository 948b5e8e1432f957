pub mod assembler;
pub mod error;
pub mod kind;
pub mod template;
pub mod types;

pub use assembler::assemble_prompt;
pub use error::PromptAssemblyError;
pub use kind::PromptKind;
pub use template::TemplateRenderer;
pub use types::{AssembledPrompt, PromptContext, PromptRequest, SCOPE_FILES_VAR};
