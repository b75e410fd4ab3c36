pub mod urls;
pub mod http_client;
pub mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
pub use fetch_utils::fetch_page;
