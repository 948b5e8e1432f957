use super::error::PromptAssemblyError;
use super::types::PromptContext;

/// Trait for rendering templates.
///
/// Keeps the template engine (minijinja) out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with `context`. `template_name` is only used for error reporting.
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptAssemblyError>;
}
