//! Shared testing utilities for volo-prompts CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in. A `.env` placed here is picked up by default.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled binary with a clean audit environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("volo-prompts").expect("Failed to locate volo-prompts binary");
        cmd.current_dir(self.work_dir())
            .env_remove("GITHUB_RUN_NUMBER")
            .env_remove("VOLO_PROMPTS_LOG");
        cmd
    }

    /// Write `content` to `name` inside the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir().join(name)).expect("Failed to read test file")
    }

    /// Run the CLI with `args` and return stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("stdout should be UTF-8")
    }
}
