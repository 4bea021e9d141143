//! Log browser controller
//!
//! Owns paginated log retrieval, the analysis trigger with its busy-guard,
//! and the detail modal. The visible table always reflects the most recent
//! successfully committed load; a failed load leaves the previous state
//! intact and reports out-of-band through a notice.

use std::time::Duration;

use loglens_client::error::ClientError;
use loglens_core::domain::log::LogRecord;
use loglens_core::dto::analysis::AnalyzeResponse;
use loglens_core::dto::log::LogPage;
use tracing::{debug, warn};

use crate::format;
use crate::msg::Cmd;

pub const LOAD_FAILURE_NOTICE: &str = "Failed to load log data";
pub const TASK_RUNNING_MESSAGE: &str = "Analyzing logs...";
pub const TASK_STARTED_MESSAGE: &str = "Analysis task started";
pub const TASK_FAILED_MESSAGE: &str = "Failed to start analysis task";
pub const TASK_IDLE_MESSAGE: &str = "No task running";

/// Page sizes the size control cycles through; the service caps at 100
pub const PAGE_SIZES: &[u32] = &[10, 20, 50, 100];

/// Pagination view-state
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`; mutated only by
/// committed successful loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
}

/// Analysis-task view-state
///
/// Invariant: the trigger control is disabled iff `running`.
#[derive(Debug, Default)]
pub struct TaskRun {
    pub running: bool,
    pub status: TaskStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Idle,
    Running,
    Success,
    Error,
}

/// Detail-viewer overlay state
#[derive(Debug, Default)]
pub struct Modal {
    pub visible: bool,
    pub body: String,
}

/// Log browser state machine
pub struct LogBrowser {
    pub pagination: Pagination,
    pub task: TaskRun,
    pub modal: Modal,
    /// Ephemeral copy of the committed page; redrawn wholesale per load
    pub rows: Vec<LogRecord>,
    pub selected: usize,
    pub loading: bool,
    /// Out-of-band notice from the last failed load; cleared on success
    pub notice: Option<String>,
    /// Editing buffer for the page-number input; `None` means not editing
    pub page_input: Option<String>,
    /// Monotonically increasing load token; completions carrying an older
    /// token are stale and discarded
    load_token: u64,
    refresh_delay: Duration,
}

impl LogBrowser {
    pub fn new(page_size: u32, refresh_delay: Duration) -> Self {
        Self {
            pagination: Pagination {
                current_page: 1,
                page_size,
                total_pages: 1,
                total_records: 0,
            },
            task: TaskRun {
                running: false,
                status: TaskStatus::Idle,
                message: TASK_IDLE_MESSAGE.to_string(),
            },
            modal: Modal::default(),
            rows: Vec::new(),
            selected: 0,
            loading: false,
            notice: None,
            page_input: None,
            load_token: 0,
            refresh_delay,
        }
    }

    // =============================================================================
    // Page loading
    // =============================================================================

    /// Issue a load for `page` at the current page size
    pub fn start_load(&mut self, page: u32) -> Cmd {
        self.load_token += 1;
        self.loading = true;
        Cmd::LoadLogs {
            token: self.load_token,
            page,
            page_size: self.pagination.page_size,
        }
    }

    /// Apply a settled load
    ///
    /// Stale responses (token older than the latest issued load) are
    /// discarded before anything is touched, so the committed state always
    /// reflects the newest request rather than the last one to arrive.
    pub fn logs_settled(
        &mut self,
        token: u64,
        page: u32,
        result: Result<LogPage, ClientError>,
    ) -> Cmd {
        if token != self.load_token {
            debug!(token, latest = self.load_token, "discarding stale page load");
            return Cmd::None;
        }

        // Settlement of the newest load: the indicator goes off exactly once
        self.loading = false;

        match result {
            Ok(loaded) => {
                self.rows = loaded.data;
                self.selected = 0;
                self.pagination.total_records = loaded.total;
                self.pagination.total_pages = loaded.total_pages;
                self.pagination.current_page = page;
                self.page_input = None;
                self.notice = None;
            }
            Err(err) => {
                warn!("failed to load logs: {}", err);
                self.notice = Some(LOAD_FAILURE_NOTICE.to_string());
            }
        }
        Cmd::None
    }

    pub fn prev_enabled(&self) -> bool {
        self.pagination.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.pagination.current_page < self.pagination.total_pages
    }

    pub fn prev_page(&mut self) -> Cmd {
        if self.prev_enabled() {
            self.start_load(self.pagination.current_page - 1)
        } else {
            Cmd::None
        }
    }

    pub fn next_page(&mut self) -> Cmd {
        if self.next_enabled() {
            self.start_load(self.pagination.current_page + 1)
        } else {
            Cmd::None
        }
    }

    /// Change the page size; always restarts from page 1 since the old
    /// offset is meaningless under a new size
    pub fn set_page_size(&mut self, page_size: u32) -> Cmd {
        self.pagination.page_size = page_size;
        self.start_load(1)
    }

    /// Step to the next size in [`PAGE_SIZES`]
    pub fn cycle_page_size(&mut self) -> Cmd {
        let current = PAGE_SIZES
            .iter()
            .position(|&s| s == self.pagination.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZES[(current + 1) % PAGE_SIZES.len()];
        self.set_page_size(next)
    }

    // =============================================================================
    // Page-number input
    // =============================================================================

    pub fn begin_page_edit(&mut self) {
        self.page_input = Some(String::new());
    }

    pub fn page_input_char(&mut self, c: char) {
        if let Some(buffer) = self.page_input.as_mut() {
            buffer.push(c);
        }
    }

    pub fn page_input_backspace(&mut self) {
        if let Some(buffer) = self.page_input.as_mut() {
            buffer.pop();
        }
    }

    pub fn cancel_page_edit(&mut self) {
        self.page_input = None;
    }

    /// The page number shown in the input control
    pub fn displayed_page(&self) -> String {
        self.page_input
            .clone()
            .unwrap_or_else(|| self.pagination.current_page.to_string())
    }

    /// Commit the page-number input: integers within `[1, total_pages]`
    /// load that page; anything else reverts to the current page and
    /// issues nothing
    pub fn commit_page_input(&mut self) -> Cmd {
        let Some(buffer) = self.page_input.take() else {
            return Cmd::None;
        };
        match buffer.trim().parse::<u32>() {
            Ok(page) if page >= 1 && page <= self.pagination.total_pages => self.start_load(page),
            _ => Cmd::None,
        }
    }

    // =============================================================================
    // Analysis trigger
    // =============================================================================

    /// Trigger an analysis run, unless one is already in flight
    ///
    /// Reentrancy is rejected, not queued: a call while running is a no-op.
    pub fn trigger_analysis(&mut self) -> Cmd {
        if self.task.running {
            return Cmd::None;
        }
        self.task.running = true;
        self.task.status = TaskStatus::Running;
        self.task.message = TASK_RUNNING_MESSAGE.to_string();
        Cmd::TriggerAnalysis
    }

    /// Apply a settled trigger request
    ///
    /// The deferred page-1 reload is scheduled, not performed: re-enabling
    /// the trigger must not wait on it.
    pub fn analysis_settled(&mut self, result: Result<AnalyzeResponse, ClientError>) -> Cmd {
        // Re-enable first, regardless of branch
        self.task.running = false;

        match result {
            Ok(response) if response.is_success() => {
                self.task.status = TaskStatus::Success;
                self.task.message = TASK_STARTED_MESSAGE.to_string();
                Cmd::ScheduleRefresh(self.refresh_delay)
            }
            Ok(_) => {
                self.task.status = TaskStatus::Error;
                self.task.message = TASK_FAILED_MESSAGE.to_string();
                Cmd::None
            }
            Err(err) => {
                warn!("analysis trigger failed: {}", err);
                self.task.status = TaskStatus::Error;
                self.task.message = TASK_FAILED_MESSAGE.to_string();
                Cmd::None
            }
        }
    }

    /// The deferred refresh timer fired: reset the status line and reload
    /// from the first page
    pub fn refresh_due(&mut self) -> Cmd {
        self.task.status = TaskStatus::Idle;
        self.task.message = TASK_IDLE_MESSAGE.to_string();
        self.start_load(1)
    }

    // =============================================================================
    // Selection and detail modal
    // =============================================================================

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the detail viewer for the selected row
    ///
    /// The body is composed from the row's captured data; no re-fetch.
    pub fn open_details(&mut self) {
        if let Some(record) = self.rows.get(self.selected) {
            self.modal.body = format::record_detail(record);
            self.modal.visible = true;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64) -> LogRecord {
        LogRecord {
            id,
            log_time: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 26, 53)
                .unwrap(),
            error_message: format!("error {}", id),
            analysis_result: format!("analysis {}", id),
            application_id: Some("order-api".to_string()),
            created_at: None,
        }
    }

    fn page(records: Vec<LogRecord>, total: u64, total_pages: u32) -> LogPage {
        LogPage {
            data: records,
            total,
            total_pages,
            page: 0,
            page_size: 0,
        }
    }

    fn browser() -> LogBrowser {
        LogBrowser::new(10, Duration::from_secs(3))
    }

    /// Load a page and settle it successfully
    fn commit_page(b: &mut LogBrowser, page_no: u32, total_pages: u32) {
        let cmd = b.start_load(page_no);
        let Cmd::LoadLogs { token, .. } = cmd else {
            panic!("expected a load command");
        };
        b.logs_settled(
            token,
            page_no,
            Ok(page(vec![record(1), record(2)], 42, total_pages)),
        );
    }

    #[test]
    fn successful_load_commits_page_and_controls() {
        let mut b = browser();
        for page_no in 1..=3 {
            commit_page(&mut b, page_no, 3);
            assert_eq!(b.pagination.current_page, page_no);
            assert_eq!(b.prev_enabled(), page_no != 1);
            assert_eq!(b.next_enabled(), page_no != 3);
            assert!(!b.loading);
            assert!(b.notice.is_none());
        }
    }

    #[test]
    fn failed_load_leaves_state_untouched() {
        let mut b = browser();
        commit_page(&mut b, 2, 3);
        let rows_before: Vec<i64> = b.rows.iter().map(|r| r.id).collect();
        let pagination_before = b.pagination.clone();

        let Cmd::LoadLogs { token, .. } = b.start_load(3) else {
            panic!("expected a load command");
        };
        b.logs_settled(token, 3, Err(ClientError::ParseError("boom".to_string())));

        assert_eq!(b.pagination, pagination_before);
        assert_eq!(b.rows.iter().map(|r| r.id).collect::<Vec<_>>(), rows_before);
        assert!(b.prev_enabled());
        assert!(b.next_enabled());
        assert!(!b.loading);
        assert_eq!(b.notice.as_deref(), Some(LOAD_FAILURE_NOTICE));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut b = browser();
        commit_page(&mut b, 1, 5);

        let Cmd::LoadLogs { token: first, .. } = b.start_load(2) else {
            panic!("expected a load command");
        };
        let Cmd::LoadLogs { token: second, .. } = b.start_load(3) else {
            panic!("expected a load command");
        };
        assert!(second > first);

        // Newest settles first
        b.logs_settled(second, 3, Ok(page(vec![record(9)], 50, 5)));
        assert_eq!(b.pagination.current_page, 3);
        assert!(!b.loading);

        // The earlier request straggles in; nothing moves
        b.logs_settled(first, 2, Ok(page(vec![record(8)], 50, 5)));
        assert_eq!(b.pagination.current_page, 3);
        assert_eq!(b.rows[0].id, 9);
    }

    #[test]
    fn stale_failure_does_not_raise_notice() {
        let mut b = browser();
        let Cmd::LoadLogs { token: first, .. } = b.start_load(1) else {
            panic!("expected a load command");
        };
        let Cmd::LoadLogs { token: second, .. } = b.start_load(2) else {
            panic!("expected a load command");
        };

        b.logs_settled(second, 2, Ok(page(vec![record(1)], 1, 1)));
        b.logs_settled(first, 1, Err(ClientError::ParseError("late".to_string())));

        assert!(b.notice.is_none());
    }

    #[test]
    fn trigger_twice_issues_one_request() {
        let mut b = browser();
        assert_eq!(b.trigger_analysis(), Cmd::TriggerAnalysis);
        assert_eq!(b.trigger_analysis(), Cmd::None);
        assert!(b.task.running);
        assert_eq!(b.task.status, TaskStatus::Running);
    }

    #[test]
    fn successful_trigger_schedules_refresh_and_reenables() {
        let mut b = browser();
        b.trigger_analysis();

        let cmd = b.analysis_settled(Ok(AnalyzeResponse {
            status: "success".to_string(),
            message: None,
        }));

        assert_eq!(cmd, Cmd::ScheduleRefresh(Duration::from_secs(3)));
        assert!(!b.task.running);
        assert_eq!(b.task.status, TaskStatus::Success);

        // A new trigger is possible immediately; the reload is deferred
        assert_eq!(b.trigger_analysis(), Cmd::TriggerAnalysis);
    }

    #[test]
    fn unsuccessful_trigger_status_sets_error_without_refresh() {
        let mut b = browser();
        b.trigger_analysis();

        let cmd = b.analysis_settled(Ok(AnalyzeResponse {
            status: "busy".to_string(),
            message: None,
        }));

        assert_eq!(cmd, Cmd::None);
        assert!(!b.task.running);
        assert_eq!(b.task.status, TaskStatus::Error);
    }

    #[test]
    fn transport_failure_sets_error_and_reenables() {
        let mut b = browser();
        b.trigger_analysis();

        let cmd = b.analysis_settled(Err(ClientError::ParseError("down".to_string())));

        assert_eq!(cmd, Cmd::None);
        assert!(!b.task.running);
        assert_eq!(b.task.status, TaskStatus::Error);
        assert_eq!(b.task.message, TASK_FAILED_MESSAGE);
    }

    #[test]
    fn refresh_due_resets_status_and_reloads_first_page() {
        let mut b = browser();
        commit_page(&mut b, 4, 5);
        b.trigger_analysis();
        b.analysis_settled(Ok(AnalyzeResponse {
            status: "success".to_string(),
            message: None,
        }));

        let cmd = b.refresh_due();

        assert_eq!(b.task.status, TaskStatus::Idle);
        assert_eq!(b.task.message, TASK_IDLE_MESSAGE);
        assert!(matches!(cmd, Cmd::LoadLogs { page: 1, .. }));
    }

    #[test]
    fn page_size_change_always_reloads_first_page() {
        let mut b = browser();
        commit_page(&mut b, 3, 5);

        let cmd = b.set_page_size(50);

        assert_eq!(b.pagination.page_size, 50);
        assert!(matches!(
            cmd,
            Cmd::LoadLogs {
                page: 1,
                page_size: 50,
                ..
            }
        ));
    }

    #[test]
    fn page_input_accepts_only_in_range_integers() {
        let mut b = browser();
        commit_page(&mut b, 2, 5);

        for bad in ["0", "abc", "99", ""] {
            b.begin_page_edit();
            for c in bad.chars() {
                b.page_input_char(c);
            }
            let cmd = b.commit_page_input();
            assert_eq!(cmd, Cmd::None, "input {:?} must not load", bad);
            assert_eq!(b.displayed_page(), "2");
        }

        b.begin_page_edit();
        b.page_input_char('4');
        assert!(matches!(b.commit_page_input(), Cmd::LoadLogs { page: 4, .. }));
    }

    #[test]
    fn modal_opens_with_selected_row_and_closes() {
        let mut b = browser();
        commit_page(&mut b, 1, 1);
        b.select_next();

        b.open_details();
        assert!(b.modal.visible);
        assert!(b.modal.body.contains("error 2"));
        assert!(b.modal.body.contains("analysis 2"));
        assert!(b.modal.body.contains("ID: 2"));

        b.close_modal();
        assert!(!b.modal.visible);
    }

    #[test]
    fn open_details_on_empty_table_is_a_noop() {
        let mut b = browser();
        b.open_details();
        assert!(!b.modal.visible);
    }
}
