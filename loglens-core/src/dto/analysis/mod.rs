//! Analysis-task DTOs

use serde::{Deserialize, Serialize};

/// Response of `POST /analyze`
///
/// The service reports `status: "success"` when the background task was
/// started, with a human-readable `message` alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalyzeResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_is_recognized() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"status": "success", "message": "analysis started"}"#)
                .unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn any_other_status_is_failure() {
        let response: AnalyzeResponse = serde_json::from_str(r#"{"status": "busy"}"#).unwrap();
        assert!(!response.is_success());
        assert!(response.message.is_none());
    }
}
