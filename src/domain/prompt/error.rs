/// Error during prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAssemblyError {
    /// The prompt template is missing from the embedded catalog.
    TemplateNotFound(String),

    /// The template uses syntax the renderer refuses to evaluate.
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Failed to render a template with the provided context.
    TemplateRenderError { template: String, reason: String },
}

impl std::fmt::Display for PromptAssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(path) => write!(f, "Prompt template not found: {}", path),
            Self::TemplateSyntaxNotAllowed { template, token } => {
                write!(f, "Template {} uses disallowed syntax '{}'", template, token)
            }
            Self::TemplateRenderError { template, reason } => {
                write!(f, "Failed to render template {}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for PromptAssemblyError {}
