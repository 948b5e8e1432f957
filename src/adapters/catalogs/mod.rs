mod prompt_templates;

pub use prompt_templates::read_prompt_template;
