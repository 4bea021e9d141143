//! Authentication endpoints

use crate::ServiceClient;
use crate::error::{ClientError, Result};
use loglens_core::dto::auth::{LoginRejection, LoginRequest};
use tracing::debug;

/// Outcome of a login attempt that reached the service
///
/// A structured rejection is a normal protocol branch, not a transport
/// failure, so it is modeled as a value rather than an error.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials and captcha accepted; the session cookie is now set
    Accepted,
    /// Service rejected the attempt with a code and message
    Rejected(LoginRejection),
}

impl ServiceClient {
    // =============================================================================
    // Authentication
    // =============================================================================

    /// Fetch a fresh captcha image
    ///
    /// # Arguments
    /// * `cache_buster` - A varying value (typically the current timestamp in
    ///   milliseconds) appended as a query parameter so intermediaries never
    ///   serve a stale image
    ///
    /// # Returns
    /// The raw image bytes
    pub async fn fetch_captcha(&self, cache_buster: i64) -> Result<Vec<u8>> {
        let url = format!("{}/api/captcha?{}", self.base_url, cache_buster);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Submit login credentials
    ///
    /// # Arguments
    /// * `req` - Username, password, and the captcha code the user read
    ///
    /// # Returns
    /// `LoginOutcome::Accepted` on success; `LoginOutcome::Rejected` when the
    /// service answered with a structured `{code, message}` body. A response
    /// that is neither is surfaced as an [`ClientError::ApiError`].
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginOutcome> {
        let url = format!("{}/api/login", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        let status = response.status();
        if status.is_success() {
            // The success body is an opaque marker; only the session cookie matters.
            debug!("login accepted for user {}", req.username);
            return Ok(LoginOutcome::Accepted);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<LoginRejection>(&body) {
            Ok(rejection) => {
                debug!(code = ?rejection.code, "login rejected");
                Ok(LoginOutcome::Rejected(rejection))
            }
            Err(_) => Err(ClientError::api_error(status.as_u16(), body)),
        }
    }
}
