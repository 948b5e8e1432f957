//! Resolve prompt input from an argument, a file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::domain::AppError;

/// Text input for a command. `-` (or no input at all) reads stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input text; `-` reads stdin
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,
    /// Read the input from a file instead (`-` for stdin)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String, AppError> {
        self.read_with(io::stdin())
    }

    fn read_with<R: Read>(&self, stdin: R) -> Result<String, AppError> {
        match (&self.text, &self.file) {
            (_, Some(path)) if path.as_os_str() == "-" => read_all(stdin),
            (_, Some(path)) => read_file(path),
            (Some(text), None) if text == "-" => read_all(stdin),
            (Some(text), None) => Ok(text.clone()),
            (None, None) => read_all(stdin),
        }
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<String, AppError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|err| {
        AppError::Io(io::Error::new(err.kind(), format!("{}: {}", path.display(), err)))
    })
}
