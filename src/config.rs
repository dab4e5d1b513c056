use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::format::is_currency_code;
use crate::statement::StatementPeriod;

pub(crate) const CONFIG_ENV: &str = "FINDASH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Used for amounts that carry no currency of their own.
    pub(crate) default_currency: String,
    /// Rows in the dashboard's recent activity list.
    pub(crate) recent_limit: usize,
    /// `last30`, `last90` or `YYYY-MM-DD..YYYY-MM-DD`.
    pub(crate) statement_period: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub(crate) log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: "USD".into(),
            recent_limit: 5,
            statement_period: "last30".into(),
            log_filter: "info".into(),
        }
    }
}

impl Config {
    pub(crate) fn statement_period(&self) -> Result<StatementPeriod> {
        StatementPeriod::parse(&self.statement_period)
    }

    fn check(self) -> Result<Self> {
        if !is_currency_code(&self.default_currency) {
            return Err(Error::Config(format!(
                "default_currency '{}' is not a 3-letter code",
                self.default_currency
            )));
        }
        self.statement_period()
            .map_err(|e| Error::Config(format!("statement_period: {e}")))?;
        Ok(Self {
            default_currency: self.default_currency.to_ascii_uppercase(),
            ..self
        })
    }
}

/// `$FINDASH_CONFIG`, else `config.toml` in the platform config directory.
pub(crate) fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    directories::ProjectDirs::from("com", "findash", "FinDash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the config at `path`. A missing file means defaults.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    tracing::debug!("loading configuration from {}", path.display());
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
    config.check()
}

pub(crate) fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
