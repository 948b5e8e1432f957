use super::error::PromptAssemblyError;
use super::template::TemplateRenderer;
use super::types::{AssembledPrompt, PromptRequest};

/// Assemble the prompt for `request`.
///
/// `template_reader` resolves a template name (e.g. `"audit.j2"`) to its source.
/// The request's input is passed to the renderer as a plain variable, so braces or
/// other template syntax inside it are inserted literally.
pub fn assemble_prompt<T, R>(
    request: &PromptRequest,
    renderer: &T,
    template_reader: R,
) -> Result<AssembledPrompt, PromptAssemblyError>
where
    T: TemplateRenderer + ?Sized,
    R: Fn(&str) -> Option<String>,
{
    let kind = request.kind();
    let template_name = kind.template_name();
    let template = template_reader(template_name)
        .ok_or_else(|| PromptAssemblyError::TemplateNotFound(template_name.to_string()))?;

    let content = renderer.render(&template, &request.context(), template_name)?;
    tracing::debug!(kind = %kind, bytes = content.len(), "assembled prompt");

    Ok(AssembledPrompt { kind, content })
}
