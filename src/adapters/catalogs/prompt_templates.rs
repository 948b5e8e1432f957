//! Embedded catalog of prompt templates.
//!
//! The rubric text is compiled into the binary from `src/assets/prompts/`.

use include_dir::{Dir, include_dir};

static PROMPT_TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Read a prompt template by file name (e.g. `"validation.j2"`).
pub fn read_prompt_template(name: &str) -> Option<String> {
    PROMPT_TEMPLATE_DIR.get_file(name).and_then(|file| file.contents_utf8()).map(|s| s.to_string())
}

#[cfg(test)]
fn template_names() -> Vec<String> {
    let mut names: Vec<String> = PROMPT_TEMPLATE_DIR
        .files()
        .map(|file| file.path().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
