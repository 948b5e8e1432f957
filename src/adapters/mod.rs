pub mod catalogs;
pub mod config_sources;
pub mod template;

pub use catalogs::read_prompt_template;
pub use config_sources::{DotenvConfigSource, EnvConfigSource, LayeredConfigSource};
pub use template::MinijinjaTemplateRenderer;
