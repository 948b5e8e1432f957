pub mod settings;

pub use settings::{MirrorSettings, PromptSettings, parse_settings};
