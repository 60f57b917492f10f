use std::path::PathBuf;

use serde::Serialize;

use crate::core::error::AwardError;

pub const DATASET_PATH_VAR: &str = "INITIAL_DATASET_PATH";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const CSV_DELIMITER_VAR: &str = "CSV_DELIMITER";
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";

const DEFAULT_DATABASE_URL: &str = "sqlite:///:memory:";
const DEFAULT_DELIMITER: u8 = b';';
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Where the award records are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parse a `sqlite:///<path>` URL, `:memory:` or a bare file path
    pub fn parse(url: &str) -> Result<Self, AwardError> {
        let url = url.trim();
        let path = if let Some(rest) = url.strip_prefix("sqlite://") {
            rest.strip_prefix('/').unwrap_or(rest)
        } else if url.contains("://") {
            return Err(AwardError::Configuration(format!(
                "{} must be a sqlite URL, got '{}'",
                DATABASE_URL_VAR, url
            )));
        } else {
            url
        };

        match path {
            "" | ":memory:" => Ok(DatabaseLocation::InMemory),
            path => Ok(DatabaseLocation::File(PathBuf::from(path))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Delimited file loaded at startup
    pub dataset_path: PathBuf,
    /// Field delimiter of the dataset file
    pub delimiter: u8,
    /// SQLite database location
    pub database: DatabaseLocation,
    /// HTTP listen address
    pub bind_address: String,
}

impl AppConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, AwardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AwardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset_path = lookup(DATASET_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AwardError::Configuration(format!("{} environment variable is not set", DATASET_PATH_VAR))
            })?;

        let delimiter = match lookup(CSV_DELIMITER_VAR) {
            Some(value) => parse_delimiter(&value)?,
            None => DEFAULT_DELIMITER,
        };

        let database = DatabaseLocation::parse(
            &lookup(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        )?;

        let bind_address = lookup(BIND_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            dataset_path: PathBuf::from(dataset_path),
            delimiter,
            database,
            bind_address,
        })
    }
}

fn parse_delimiter(value: &str) -> Result<u8, AwardError> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(AwardError::Configuration(format!(
            "{} must be a single byte, got '{}'",
            CSV_DELIMITER_VAR, value
        ))),
    }
}
