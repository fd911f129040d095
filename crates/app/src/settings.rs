//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml`, then overridden by `POORBAND__*` environment
//! variables (e.g. `POORBAND__APP__LEVEL=debug`).
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [database]
//! sqlite = "./poorband.db"
//!
//! [statistics]
//! calendar_days = false
//! ```
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite("./poorband.db".to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Statistics {
    /// Report only the days that exist in the month.
    #[serde(default)]
    pub calendar_days: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub database: Database,
    #[serde(default)]
    pub statistics: Statistics,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("POORBAND").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_urls() {
        assert_eq!(Database::Memory.url(), "sqlite::memory:");
        assert_eq!(
            Database::Sqlite("/tmp/a.db".to_string()).url(),
            "sqlite:/tmp/a.db?mode=rwc"
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::new("does/not/exist/settings").unwrap();
        assert_eq!(settings.database, Database::default());
        assert!(!settings.statistics.calendar_days);
    }
}
