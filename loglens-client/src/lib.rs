//! Loglens HTTP Client
//!
//! A simple, type-safe HTTP client for the log-analysis service API.
//!
//! This crate provides one interface over the whole service surface
//! (captcha, login, log listing, and analysis triggering) so every
//! frontend talks to the service the same way.
//!
//! # Example
//!
//! ```no_run
//! use loglens_client::ServiceClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ServiceClient::new("http://localhost:8000");
//!
//!     let page = client.list_logs(1, 10).await?;
//!     println!("{} records total", page.total);
//!     Ok(())
//! }
//! ```

pub mod error;
mod analysis;
mod auth;
mod logs;

// Re-export commonly used types
pub use auth::LoginOutcome;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the log-analysis service API
///
/// Method groups follow the endpoint groups:
/// - Authentication (captcha image, login)
/// - Log listing (paginated queries)
/// - Analysis task triggering
#[derive(Debug, Clone)]
pub struct ServiceClient {
    /// Base URL of the service, without a trailing slash
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ServiceClient {
    /// Create a client with a default HTTP stack
    ///
    /// Note that the default stack has no cookie store; a session-aware
    /// caller should build its own client and use [`with_client`].
    ///
    /// [`with_client`]: ServiceClient::with_client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client on top of a preconfigured [`reqwest::Client`]
    ///
    /// Use this to set timeouts, proxies, or the cookie store that
    /// carries the login session.
    ///
    /// # Example
    /// ```
    /// use loglens_client::ServiceClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .cookie_store(true)
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ServiceClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handling
    // =============================================================================

    /// Turn a response into a deserialized body or a [`ClientError`]
    ///
    /// Non-success statuses become [`ClientError::ApiError`] carrying
    /// whatever text the service sent; success bodies that fail to decode
    /// become [`ClientError::ParseError`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_stored_as_given() {
        let client = ServiceClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ServiceClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn custom_http_client_is_accepted() {
        let client = ServiceClient::with_client("https://logs.example.com", Client::new());
        assert_eq!(client.base_url(), "https://logs.example.com");
    }
}
