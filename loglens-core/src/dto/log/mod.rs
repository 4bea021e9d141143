//! Log-listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::log::LogRecord;

/// One page of log records from `GET /logs`
///
/// The service echoes the requested `page`/`page_size` alongside the
/// totals; the echoes are informational and tolerated if absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogPage {
    pub data: Vec<LogRecord>,
    pub total: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}
