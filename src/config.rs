use crate::core::db::{ConnectionConfig, DEFAULT_ENCODING, DEFAULT_PORT};
use crate::core::{Result, SqlHelperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Connection settings as written in the `[database]` table.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub name: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_use_unicode")]
    pub use_unicode: bool,
    #[serde(default = "default_encoding")]
    pub character_encoding: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_use_unicode() -> bool {
    true
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

impl From<DatabaseConfig> for ConnectionConfig {
    fn from(db: DatabaseConfig) -> Self {
        ConnectionConfig::new(
            &db.host,
            db.port,
            &db.name,
            &db.user,
            &db.password,
            db.use_unicode,
            &db.character_encoding,
        )
    }
}

/// Parses and validates connection settings from TOML text.
pub fn parse_config(content: &str) -> Result<ConnectionConfig> {
    let config: Config = toml::from_str(content).map_err(|e| SqlHelperError::Config(e.to_string()))?;
    let connection = ConnectionConfig::from(config.database);
    connection.validate()?;
    Ok(connection)
}

/// Loads connection settings from a TOML file at the given path.
///
/// # Example
///
/// ```no_run
/// let config = sqlhelper::config::load_config("sqlhelper.toml").expect("Failed to load config");
/// println!("{}", config.connection_url());
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConnectionConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
