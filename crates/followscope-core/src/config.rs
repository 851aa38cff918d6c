//! Environment-driven application configuration.

use std::path::PathBuf;

use crate::ConfigError;

/// Runtime configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the raw scraped-file tree (category subdirectories below it).
    pub raw_data_dir: PathBuf,
    /// Directory the processed record set is exported to.
    pub processed_data_dir: PathBuf,
    /// Tracing env-filter directive, e.g. `info` or `followscope=debug`.
    pub log_level: String,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unusable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unusable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let dir = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        let raw = lookup(var).unwrap_or_else(|_| default.to_string());
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    };

    let raw_data_dir = dir("FOLLOWSCOPE_RAW_DATA_DIR", "data/raw")?;
    let processed_data_dir = dir("FOLLOWSCOPE_PROCESSED_DATA_DIR", "data/processed")?;
    let log_level = lookup("FOLLOWSCOPE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    Ok(AppConfig {
        raw_data_dir,
        processed_data_dir,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let map = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.raw_data_dir, PathBuf::from("data/raw"));
        assert_eq!(config.processed_data_dir, PathBuf::from("data/processed"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn set_variables_override_defaults() {
        let map = HashMap::from([
            ("FOLLOWSCOPE_RAW_DATA_DIR", "/srv/followscope/raw"),
            ("FOLLOWSCOPE_LOG_LEVEL", "followscope=debug"),
        ]);
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.raw_data_dir, PathBuf::from("/srv/followscope/raw"));
        assert_eq!(config.log_level, "followscope=debug");
    }

    #[test]
    fn empty_directory_value_is_rejected() {
        let map = HashMap::from([("FOLLOWSCOPE_RAW_DATA_DIR", "  ")]);
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { var, .. } if var == "FOLLOWSCOPE_RAW_DATA_DIR"
        ));
    }
}
