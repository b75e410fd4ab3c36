//! Page fetching with status checking and error mapping

use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page and returns its body as text.
///
/// Only HTTP 200 counts as success. Any other status ends the run with
/// [`AppError::FetchFailure`]; nothing is retried.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch
///
/// # Returns
/// * `Result<String, AppError>` - Page body or error
#[instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if status != StatusCode::OK {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(AppError::fetch_failure(status.as_u16(), url));
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header_exists, method, path},
    };

    #[tokio::test]
    async fn test_fetch_page_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/players/j/jamesle01.html"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/players/j/jamesle01.html", mock_server.uri());
        let body = fetch_page(&client, &url).await.unwrap();

        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/players/x/xxxxxyy01.html", mock_server.uri());
        let result = fetch_page(&client, &url).await;

        match result {
            Err(AppError::FetchFailure { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("Expected FetchFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_200_success() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let result = fetch_page(&client, &mock_server.uri()).await;

        assert_eq!(result.unwrap_err().status_code(), Some(204));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error_not_retried() {
        let mock_server = MockServer::start().await;
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = fetch_page(&client, &mock_server.uri()).await;

        assert!(matches!(
            result,
            Err(AppError::FetchFailure { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        let client = create_test_http_client();

        // Port 9 (discard) is not expected to accept HTTP connections
        let result = fetch_page(&client, "http://127.0.0.1:9/players/a/a01.html").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().status_code().is_none());
    }
}
