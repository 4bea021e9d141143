//! Service gateway
//!
//! The trait is the seam between the controllers' runtime and the HTTP
//! client: production code talks to the real service, tests substitute an
//! in-memory double.

use async_trait::async_trait;
use loglens_client::error::Result;
use loglens_client::{LoginOutcome, ServiceClient};
use loglens_core::dto::analysis::AnalyzeResponse;
use loglens_core::dto::auth::LoginRequest;
use loglens_core::dto::log::LogPage;

use crate::config::Config;

/// Every operation the UI performs against the service
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch a fresh captcha image, bypassing any caches
    async fn fetch_captcha(&self) -> Result<Vec<u8>>;

    /// Submit login credentials
    async fn login(&self, req: LoginRequest) -> Result<LoginOutcome>;

    /// Fetch one page of log records
    async fn list_logs(&self, page: u32, page_size: u32) -> Result<LogPage>;

    /// Trigger an analysis run
    async fn trigger_analysis(&self) -> Result<AnalyzeResponse>;
}

/// HTTP implementation of [`Gateway`]
pub struct HttpGateway {
    client: ServiceClient,
}

impl HttpGateway {
    /// Creates a gateway for the configured service
    ///
    /// The underlying client keeps a cookie store, which is what carries
    /// the login session across requests.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client: ServiceClient::with_client(config.service_url.clone(), http_client),
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_captcha(&self) -> Result<Vec<u8>> {
        // Current timestamp as the cache-buster, same trick as a browser
        // appending ?<now> to an image URL
        let cache_buster = chrono::Utc::now().timestamp_millis();
        self.client.fetch_captcha(cache_buster).await
    }

    async fn login(&self, req: LoginRequest) -> Result<LoginOutcome> {
        self.client.login(&req).await
    }

    async fn list_logs(&self, page: u32, page_size: u32) -> Result<LogPage> {
        self.client.list_logs(page, page_size).await
    }

    async fn trigger_analysis(&self) -> Result<AnalyzeResponse> {
        self.client.trigger_analysis().await
    }
}
