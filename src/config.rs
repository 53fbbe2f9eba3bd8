//! Settings file and option resolution
//!
//! Settings come from, in order of precedence: command line flags, their
//! environment variables, the YAML settings file, built-in defaults.
//!
//! ```yaml
//! months: 18
//! history_command: [qlop, -l]
//! db_path: /var/db/pkg
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::audit::DEFAULT_MONTHS;
use crate::cli::Cli;
use crate::error::Result;
use crate::error::config::{invalid, parse_failed, read_failed};
use crate::history::source::DEFAULT_HISTORY_COMMAND;
use crate::portage::DEFAULT_DB_PATH;

/// Contents of the settings file
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub months: Option<i64>,
    pub history_command: Option<Vec<String>>,
    pub db_path: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from YAML. An empty document yields defaults.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content, path)
    }

    /// Load the explicitly requested settings file, or the default one if it
    /// exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "Loading settings");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<user config dir>/stalepkg/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stalepkg").join("config.yaml"))
}

/// Where the merge log is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistorySpec {
    Command { program: String, args: Vec<String> },
    File(PathBuf),
    Stdin,
}

/// Fully resolved options for one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub months: i64,
    pub history: HistorySpec,
    pub db_path: PathBuf,
}

impl AuditConfig {
    /// Merge command line options over settings.
    pub fn resolve(cli: &Cli, settings: Settings) -> Result<Self> {
        let months = cli.months.or(settings.months).unwrap_or(DEFAULT_MONTHS);

        let history = match (&cli.history_file, &cli.history_cmd) {
            (Some(path), _) if path.as_os_str() == "-" => HistorySpec::Stdin,
            (Some(path), _) => HistorySpec::File(path.clone()),
            (None, Some(cmd)) => command_spec(&split_command(cmd))?,
            (None, None) => command_spec(&settings.history_command.unwrap_or_else(|| {
                DEFAULT_HISTORY_COMMAND.iter().map(|s| (*s).to_string()).collect()
            }))?,
        };

        let db_path = cli
            .db
            .clone()
            .or(settings.db_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        Ok(Self {
            months,
            history,
            db_path,
        })
    }
}

fn command_spec(words: &[String]) -> Result<HistorySpec> {
    let (program, args) = words
        .split_first()
        .ok_or_else(|| invalid("merge log command must not be empty"))?;
    Ok(HistorySpec::Command {
        program: program.clone(),
        args: args.to_vec(),
    })
}

fn split_command(cmd: &str) -> Vec<String> {
    cmd.split_whitespace().map(str::to_string).collect()
}
