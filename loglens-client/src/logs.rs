//! Log-listing endpoints

use crate::ServiceClient;
use crate::error::Result;
use loglens_core::dto::log::LogPage;

impl ServiceClient {
    // =============================================================================
    // Log Listing
    // =============================================================================

    /// Fetch one page of analyzed log records
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `page_size` - Records per page (the service caps this at 100)
    ///
    /// # Returns
    /// The page of records plus totals for pagination
    ///
    /// # Example
    /// ```no_run
    /// # use loglens_client::ServiceClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ServiceClient::new("http://localhost:8000");
    /// let page = client.list_logs(1, 20).await?;
    /// println!("{} of {} pages", page.page, page.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_logs(&self, page: u32, page_size: u32) -> Result<LogPage> {
        let url = format!("{}/logs", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
