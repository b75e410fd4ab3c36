use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `base_url` - The stats site root to validate
/// * `log_file_path` - Optional log file path to validate
/// * `http_timeout_seconds` - Request timeout
///
/// # Validation Rules
/// - Base URL cannot be empty and must start with http:// or https://
/// - Timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    base_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "Base URL must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
