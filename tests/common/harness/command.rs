//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Commands run with `HOME` pointed at an isolated directory so the user's
/// real `~/.jot/config.yaml` is never read, and with `EDITOR=true` so
/// editor-driven commands complete without interaction.
pub struct JotCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
    editor: String,
    stdin: Option<String>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
            editor: "true".to_string(),
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the base directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the home directory seen by the binary.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Sets the `EDITOR` command.
    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    /// Feeds `input` to the command's stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args)
            .env("EDITOR", &self.editor)
            .env_remove("VISUAL")
            .env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("HOME", home);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `quick` command with a message.
    pub fn quick(self, message: &str) -> Self {
        self.args(["quick", message])
    }

    /// Configures for the `list` command.
    pub fn list(self) -> Self {
        self.args(["list"])
    }

    /// Configures for the `timeline` command.
    pub fn timeline(self) -> Self {
        self.args(["timeline"])
    }

    /// Configures for the `view` command with an ID.
    pub fn view(self, id: &str) -> Self {
        self.args(["view", id])
    }

    /// Adds `--json` to the command.
    pub fn json(self) -> Self {
        self.args(["--json"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        JotCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = JotCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = JotCommand::new().args(["--help"]).output_success();
        assert!(output.contains("jot"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = JotCommand::new().list().json();
        assert_eq!(cmd.get_args(), ["list", "--json"]);
    }
}
