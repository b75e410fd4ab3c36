use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch player page: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Any response other than 200 ends the run
    #[error("ERROR status code: {status} (URL: {url})")]
    FetchFailure { status: u16, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Page layout errors
    #[error("Failed to parse player page HTML: {0}")]
    HtmlParse(String),

    #[error(
        "Stats table {index} not found on player page ({available} tables available). \
         The player may have no playoff appearances or the page layout changed"
    )]
    LayoutMismatch { index: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an HTML parsing error with context
    pub fn html_parse_error(msg: impl Into<String>) -> Self {
        Self::HtmlParse(msg.into())
    }

    /// Create a fetch failure for a non-200 HTTP response
    pub fn fetch_failure(status: u16, url: impl Into<String>) -> Self {
        Self::FetchFailure {
            status,
            url: url.into(),
        }
    }

    /// Create a layout mismatch error for a missing stats table
    pub fn layout_mismatch(index: usize, available: usize) -> Self {
        Self::LayoutMismatch { index, available }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// HTTP status code of a failed fetch, if this error came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::FetchFailure { status, .. } => Some(*status),
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error indicates the player page or table does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::FetchFailure { status: 404, .. } | AppError::LayoutMismatch { .. }
        )
    }
}
