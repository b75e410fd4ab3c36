use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Site root serving the player pages. Should include the https:// prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for page requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_base_url() -> String {
    crate::constants::DEFAULT_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used and nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `HOOPSTATS_BASE_URL` - Override the stats site root
    /// - `HOOPSTATS_LOG_FILE` - Override log file path
    /// - `HOOPSTATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `HOOPSTATS_*` environment variables on top of the current values.
    /// Unparseable timeout values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("HOOPSTATS_BASE_URL") {
            self.base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var("HOOPSTATS_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("HOOPSTATS_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.base_url, &self.log_file_path, self.http_timeout_seconds)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and the effective settings
    /// - Notes when no config file exists and defaults are in use
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(No config file, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips any
    /// trailing slash from the base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
base_url = "https://stats.example.com"
log_file_path = "/custom/log/path"
http_timeout_seconds = 10
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.base_url, "https://stats.example.com");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_config_load_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://www.basketball-reference.com");
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "base_url = [").await.unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("hoopstats");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        Config::default().save_to_path(&config_path_str).await.unwrap();

        assert!(config_dir.exists());
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            base_url: "https://stats.example.com/".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 45,
        };

        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(loaded_config.base_url, "https://stats.example.com");
        assert_eq!(loaded_config.log_file_path, original_config.log_file_path);
        assert_eq!(loaded_config.http_timeout_seconds, 45);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: serialized with other env-mutating tests
        unsafe {
            std::env::set_var("HOOPSTATS_BASE_URL", "http://localhost:8080");
            std::env::set_var("HOOPSTATS_HTTP_TIMEOUT", "5");
            std::env::remove_var("HOOPSTATS_LOG_FILE");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var("HOOPSTATS_BASE_URL");
            std::env::remove_var("HOOPSTATS_HTTP_TIMEOUT");
        }

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    #[serial]
    fn test_env_override_ignores_bad_timeout() {
        unsafe {
            std::env::set_var("HOOPSTATS_HTTP_TIMEOUT", "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var("HOOPSTATS_HTTP_TIMEOUT");
        }

        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
