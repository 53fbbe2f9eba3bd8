//! Merge log sources
//!
//! The merge log normally comes from running `qlop -l`, but a saved log can
//! be read from a file or from standard input instead.

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::Result;
use crate::error::history::{command_exit, command_failed, read_failed};

/// Default merge log command line
pub const DEFAULT_HISTORY_COMMAND: [&str; 2] = ["qlop", "-l"];

/// Something that yields the full merge log as text.
pub trait HistorySource {
    /// Human readable description for logs and errors
    fn describe(&self) -> String;

    /// Fetch the complete log. Blocks until the log is available.
    fn fetch(&self) -> Result<String>;
}

/// Runs an external command and captures its standard output.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for CommandSource {
    fn default() -> Self {
        let [program, flag] = DEFAULT_HISTORY_COMMAND;
        Self::new(program, vec![flag.to_string()])
    }
}

impl HistorySource for CommandSource {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fetch(&self) -> Result<String> {
        debug!(command = %self.describe(), "Running merge log command");
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| command_failed(self.describe(), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_exit(
                self.describe(),
                output.status.to_string(),
                stderr.trim(),
            ));
        }

        debug!(bytes = output.stdout.len(), "Merge log command finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads a previously saved merge log.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistorySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| read_failed(self.describe(), e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Reads the merge log from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl HistorySource for StdinSource {
    fn describe(&self) -> String {
        "standard input".to_string()
    }

    fn fetch(&self) -> Result<String> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| read_failed(self.describe(), e.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
