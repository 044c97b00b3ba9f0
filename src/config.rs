// src/config.rs
//
// Runtime configuration
//
// Read from the process environment (a `.env` file is loaded first by the binary).
// Every value has a default so a bare start works on a desktop machine.

use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DATABASE_PATH_VAR: &str = "CATALOG_DATABASE_PATH";
pub const POOL_SIZE_VAR: &str = "CATALOG_POOL_SIZE";
pub const SEED_VAR: &str = "CATALOG_SEED";

const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub pool_size: u32,

    /// Insert reference data (genres, directors, sample movie) on startup
    pub seed: bool,
}

impl CatalogConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Keeps tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DATABASE_PATH_VAR) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => {
                let size: u32 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        POOL_SIZE_VAR, raw
                    ))
                })?;
                if size == 0 {
                    return Err(AppError::Config(format!(
                        "{} must be at least 1",
                        POOL_SIZE_VAR
                    )));
                }
                size
            }
            None => DEFAULT_POOL_SIZE,
        };

        let seed = match lookup(SEED_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be true or false, got '{}'",
                    SEED_VAR, raw
                ))
            })?,
            None => true,
        };

        Ok(Self {
            database_path,
            pool_size,
            seed,
        })
    }
}

/// Default database location
///
/// Path structure: {APP_DATA}/movie-catalog/catalog.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("movie-catalog").join("catalog.db"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (DATABASE_PATH_VAR, "/tmp/catalog-test.db"),
            (POOL_SIZE_VAR, "4"),
            (SEED_VAR, "off"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/catalog-test.db"));
        assert_eq!(config.pool_size, 4);
        assert!(!config.seed);
    }

    #[test]
    fn test_defaults() {
        let config =
            CatalogConfig::from_lookup(lookup_from(&[(DATABASE_PATH_VAR, "catalog.db")])).unwrap();
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert!(config.seed);
    }

    #[test]
    fn test_invalid_pool_size() {
        let result = CatalogConfig::from_lookup(lookup_from(&[
            (DATABASE_PATH_VAR, "catalog.db"),
            (POOL_SIZE_VAR, "zero"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = CatalogConfig::from_lookup(lookup_from(&[
            (DATABASE_PATH_VAR, "catalog.db"),
            (POOL_SIZE_VAR, "0"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_seed_flag() {
        let result = CatalogConfig::from_lookup(lookup_from(&[
            (DATABASE_PATH_VAR, "catalog.db"),
            (SEED_VAR, "maybe"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
