//! Authentication DTOs

use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub captcha: String,
}

/// Structured body of a rejected login attempt
///
/// The service sends `{code, message}`; both fields are optional on the
/// wire so a malformed rejection still decodes instead of being dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRejection {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Known rejection codes, with a catch-all for anything unrecognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    InvalidCaptcha,
    InvalidCredentials,
    Other,
}

impl LoginRejection {
    pub fn kind(&self) -> RejectionKind {
        match self.code.as_deref() {
            Some("INVALID_CAPTCHA") => RejectionKind::InvalidCaptcha,
            Some("INVALID_CREDENTIALS") => RejectionKind::InvalidCredentials,
            _ => RejectionKind::Other,
        }
    }
}
