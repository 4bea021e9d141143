//! Analysis-task endpoints

use crate::ServiceClient;
use crate::error::Result;
use loglens_core::dto::analysis::AnalyzeResponse;

impl ServiceClient {
    // =============================================================================
    // Analysis Task
    // =============================================================================

    /// Trigger a log-analysis run on the service
    ///
    /// The service starts the analysis as a background task and answers
    /// immediately; `status` in the response says whether the task was
    /// started, not whether it finished.
    pub async fn trigger_analysis(&self) -> Result<AnalyzeResponse> {
        let url = format!("{}/analyze", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }
}
