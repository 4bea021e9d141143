//! Messages and commands
//!
//! Every state transition is driven by a [`Msg`]: terminal input, the
//! settlement of an outbound request, or a timer firing. Update functions
//! never perform I/O; they return [`Cmd`] values that the runtime executes
//! on the event loop's behalf, delivering completions back as messages.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};
use loglens_client::error::ClientError;
use loglens_client::LoginOutcome;
use loglens_core::dto::analysis::AnalyzeResponse;
use loglens_core::dto::auth::LoginRequest;
use loglens_core::dto::log::LogPage;

/// Events that drive state transitions
#[derive(Debug)]
pub enum Msg {
    /// Terminal key press
    Key(KeyEvent),
    /// Terminal mouse event (captcha refresh click, modal backdrop dismissal)
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Captcha image fetched and written to disk
    CaptchaReady(Result<PathBuf, String>),
    /// Login request settled
    LoginSettled(Result<LoginOutcome, ClientError>),
    /// Log page request settled; `token` identifies which load this answers
    LogsSettled {
        token: u64,
        page: u32,
        result: Result<LogPage, ClientError>,
    },
    /// Analysis trigger settled
    AnalysisSettled(Result<AnalyzeResponse, ClientError>),
    /// The deferred post-analysis refresh timer fired
    RefreshDue,
}

/// Side effects returned by update functions for the runtime to execute
#[derive(Debug, PartialEq)]
pub enum Cmd {
    /// No side effect
    None,
    /// Fetch a fresh captcha image (with a new cache-buster)
    FetchCaptcha,
    /// Submit login credentials
    SubmitLogin(LoginRequest),
    /// Load one page of logs; completions echo the token
    LoadLogs { token: u64, page: u32, page_size: u32 },
    /// Trigger an analysis run
    TriggerAnalysis,
    /// Arm (or re-arm) the deferred refresh timer
    ScheduleRefresh(Duration),
    /// Tear down the event loop
    Quit,
}
