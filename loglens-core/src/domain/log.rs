//! Error-log domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single analyzed error-log record
///
/// Owned by the service; the client holds an ephemeral copy per page and
/// never mutates one. The service emits `log_time`/`created_at` as
/// ISO-8601 datetime strings without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub log_time: NaiveDateTime,
    pub error_message: String,
    pub analysis_result: String,
    /// Identifier of the application that produced the log, when known
    pub application_id: Option<String>,
    /// When the record was stored; older service versions omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl LogRecord {
    /// Application id for display, `-` when the source did not report one
    pub fn application_label(&self) -> &str {
        self.application_id.as_deref().unwrap_or("-")
    }
}
