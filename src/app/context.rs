use crate::adapters::read_prompt_template;
use crate::app::config::AppConfig;
use crate::domain::{AppError, AssembledPrompt, PromptRequest, TemplateRenderer, assemble_prompt};

/// Application context holding the resolved configuration and the template renderer.
pub struct AppContext<T: TemplateRenderer> {
    config: AppConfig,
    renderer: T,
}

impl<T: TemplateRenderer> AppContext<T> {
    /// Create a new application context.
    pub fn new(config: AppConfig, renderer: T) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render `request` against the embedded template catalog.
    pub fn build(&self, request: &PromptRequest) -> Result<AssembledPrompt, AppError> {
        Ok(assemble_prompt(request, &self.renderer, read_prompt_template)?)
    }
}
