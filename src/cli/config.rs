//! Configuration file support.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "MINTMEMO_CONFIG";
pub const DB_PATH_ENV: &str = "MINTMEMO_DB_PATH";
pub const LIST_LIMIT_ENV: &str = "MINTMEMO_LIST_LIMIT";
pub const SEARCH_LIMIT_ENV: &str = "MINTMEMO_SEARCH_LIMIT";

pub const DEFAULT_DB_PATH: &str = "mintmemo.db";
pub const DEFAULT_LIST_LIMIT: usize = 200;
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file
    pub db_path: Option<PathBuf>,

    /// Default number of notes shown by `ls`
    pub list_limit: Option<usize>,

    /// Default number of results shown by `search`
    pub search_limit: Option<usize>,
}

/// Settings after applying CLI flags, environment, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub list_limit: usize,
    pub search_limit: usize,
}

impl Config {
    /// Load configuration from `$MINTMEMO_CONFIG` or the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/mintmemo/config.toml`
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return expand_home(&PathBuf::from(path));
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mintmemo")
            .join("config.toml")
    }

    /// Resolve settings from the process environment.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. `MINTMEMO_*` environment variables
    /// 3. Config file
    /// 4. Built-in defaults
    pub fn settings(&self, cli_db: Option<&PathBuf>) -> Result<Settings> {
        self.settings_with_env(cli_db, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::settings`], reading variables through `env`.
    pub fn settings_with_env<F>(&self, cli_db: Option<&PathBuf>, env: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = cli_db
            .cloned()
            .or_else(|| env(DB_PATH_ENV).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let list_limit = match env(LIST_LIMIT_ENV) {
            Some(raw) => parse_limit(LIST_LIMIT_ENV, &raw)?,
            None => self.list_limit.unwrap_or(DEFAULT_LIST_LIMIT),
        };
        let search_limit = match env(SEARCH_LIMIT_ENV) {
            Some(raw) => parse_limit(SEARCH_LIMIT_ENV, &raw)?,
            None => self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        };

        Ok(Settings {
            db_path: expand_home(&db_path),
            list_limit,
            search_limit,
        })
    }
}

fn parse_limit(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow!("invalid value for {key}: {raw:?} (expected a non-negative integer)"))
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
