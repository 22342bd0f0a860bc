//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the directory under `$HOME` that holds config and, by default,
/// all note data.
pub const APP_DIR: &str = ".jot";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor command for editing notes
    pub editor: Option<String>,

    /// Context applied to new notes when none is given or active
    pub default_context: Option<String>,

    /// Base directory for notes and templates
    pub storage_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`, defaulting when it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let mut config: Self = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

        config.storage_path = config.storage_path.map(|p| expand_home(&p));
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", config_path.display()))?;

        Ok(config)
    }

    /// Rejects settings that are present but empty.
    pub fn validate(&self) -> Result<()> {
        if self.editor.as_deref().is_some_and(|e| e.trim().is_empty()) {
            bail!("editor cannot be empty");
        }
        if self
            .storage_path
            .as_deref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            bail!("storage path cannot be empty");
        }
        Ok(())
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.jot/config.yaml`
    pub fn config_path() -> PathBuf {
        default_base_dir().join("config.yaml")
    }

    /// Resolve the base directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `storage_path` setting
    /// 3. `~/.jot`
    pub fn base_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage_path.clone())
            .unwrap_or_else(default_base_dir)
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.is_empty()))
            .or_else(|| std::env::var("VISUAL").ok().filter(|e| !e.is_empty()))
            .unwrap_or_else(|| "vi".to_string())
    }

    /// Returns the configured default context, if non-empty.
    pub fn default_context(&self) -> Option<&str> {
        self.default_context
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Returns `~/.jot`, or `./.jot` if the home directory is unknown.
pub fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Expands a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
