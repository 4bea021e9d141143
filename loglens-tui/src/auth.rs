//! Login form controller
//!
//! Owns the login lifecycle: local validation, captcha refresh, and the
//! submit-and-interpret-response cycle. Never submits known-invalid input,
//! maps structured rejections onto the offending field, and always clears
//! the submit control's busy state once the request settles.

use std::path::PathBuf;

use loglens_client::error::ClientError;
use loglens_client::LoginOutcome;
use loglens_core::dto::auth::{LoginRequest, RejectionKind};
use tracing::warn;

use crate::msg::Cmd;

/// Fallback when a rejection carries no message of its own
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed, please try again";

/// A single form field: its value and its error annotation, if any
#[derive(Debug, Default)]
pub struct Field {
    pub value: String,
    pub error: Option<String>,
}

/// The three login fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Username,
    Password,
    Captcha,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Username => "Username",
            FieldId::Password => "Password",
            FieldId::Captcha => "Captcha",
        }
    }

    fn next(self) -> Self {
        match self {
            FieldId::Username => FieldId::Password,
            FieldId::Password => FieldId::Captcha,
            FieldId::Captcha => FieldId::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            FieldId::Username => FieldId::Captcha,
            FieldId::Password => FieldId::Username,
            FieldId::Captcha => FieldId::Password,
        }
    }
}

/// Where the captcha image currently lives
#[derive(Debug, Default)]
pub enum CaptchaImage {
    /// A fetch is in flight
    #[default]
    Loading,
    /// Saved to disk; the login screen shows this path
    Saved(PathBuf),
    /// The fetch failed
    Failed(String),
}

/// Per-field emptiness, computed without touching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub username_empty: bool,
    pub password_empty: bool,
    pub captcha_empty: bool,
}

impl Validation {
    pub fn ok(&self) -> bool {
        !self.username_empty && !self.password_empty && !self.captcha_empty
    }
}

/// How a settled login attempt resolves
#[derive(Debug, PartialEq)]
pub enum LoginResolution {
    /// Credentials accepted; this controller's lifetime ends here
    Accepted,
    /// Attempt failed; stay on the login screen, maybe with a follow-up command
    Denied(Cmd),
}

/// Login form state machine
///
/// Per attempt: Idle -> Validating -> { RejectedLocal | Submitting ->
/// { Accepted | RejectedRemote } }; every non-accepted terminal returns
/// to Idle awaiting the next user action.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: Field,
    pub password: Field,
    pub captcha: Field,
    pub focus: Option<FieldId>,
    pub submitting: bool,
    pub captcha_image: CaptchaImage,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            focus: Some(FieldId::Username),
            ..Self::default()
        }
    }

    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
            FieldId::Captcha => &self.captcha,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
            FieldId::Captcha => &mut self.captcha,
        }
    }

    /// Move focus to a field, clearing that field's error annotation.
    /// Purely local; independent of any network activity.
    pub fn focus_field(&mut self, id: FieldId) {
        self.focus = Some(id);
        self.field_mut(id).error = None;
    }

    pub fn focus_next(&mut self) {
        let next = self.focus.map_or(FieldId::Username, FieldId::next);
        self.focus_field(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = self.focus.map_or(FieldId::Captcha, FieldId::prev);
        self.focus_field(prev);
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(id) = self.focus {
            self.field_mut(id).value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(id) = self.focus {
            self.field_mut(id).value.pop();
        }
    }

    /// Pure validation: username and captcha are trimmed, all three fields
    /// must be non-empty
    pub fn validate(&self) -> Validation {
        Validation {
            username_empty: self.username.value.trim().is_empty(),
            password_empty: self.password.value.is_empty(),
            captcha_empty: self.captcha.value.trim().is_empty(),
        }
    }

    /// Request a fresh captcha image
    ///
    /// Invoked on explicit user action and after a captcha rejection; the
    /// runtime attaches a new cache-buster to every fetch.
    pub fn refresh_captcha(&mut self) -> Cmd {
        self.captcha_image = CaptchaImage::Loading;
        Cmd::FetchCaptcha
    }

    pub fn captcha_ready(&mut self, result: Result<PathBuf, String>) {
        self.captcha_image = match result {
            Ok(path) => CaptchaImage::Saved(path),
            Err(message) => CaptchaImage::Failed(message),
        };
    }

    /// Attempt to submit the form
    ///
    /// All prior error annotations are cleared first, so no stale state
    /// leaks into this attempt. If any field is empty the failing fields
    /// are annotated and nothing is sent.
    pub fn submit(&mut self) -> Cmd {
        self.username.error = None;
        self.password.error = None;
        self.captcha.error = None;

        let validation = self.validate();
        if !validation.ok() {
            if validation.username_empty {
                self.username.error = Some("Please enter a username".to_string());
            }
            if validation.password_empty {
                self.password.error = Some("Please enter a password".to_string());
            }
            if validation.captcha_empty {
                self.captcha.error = Some("Please enter the captcha".to_string());
            }
            return Cmd::None;
        }

        self.submitting = true;
        Cmd::SubmitLogin(LoginRequest {
            username: self.username.value.trim().to_string(),
            password: self.password.value.clone(),
            captcha: self.captcha.value.trim().to_string(),
        })
    }

    /// Interpret a settled login request
    pub fn login_settled(
        &mut self,
        result: Result<LoginOutcome, ClientError>,
    ) -> LoginResolution {
        // The busy flag drops before any branch runs, so the submit control
        // is restored no matter how the outcome is handled.
        self.submitting = false;

        match result {
            Ok(LoginOutcome::Accepted) => LoginResolution::Accepted,
            Ok(LoginOutcome::Rejected(rejection)) => {
                let message = rejection
                    .message
                    .clone()
                    .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_string());
                let cmd = match rejection.kind() {
                    RejectionKind::InvalidCaptcha => {
                        self.captcha.error = Some(message);
                        self.captcha.value.clear();
                        self.refresh_captcha()
                    }
                    RejectionKind::InvalidCredentials => {
                        self.password.error = Some(message);
                        self.password.value.clear();
                        Cmd::None
                    }
                    RejectionKind::Other => {
                        self.username.error = Some(message);
                        Cmd::None
                    }
                };
                LoginResolution::Denied(cmd)
            }
            Err(err) => {
                warn!("login request failed: {}", err);
                self.username.error = Some(GENERIC_LOGIN_FAILURE.to_string());
                LoginResolution::Denied(Cmd::None)
            }
        }
    }
}
