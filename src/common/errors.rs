use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Message used when the backend gives no reason for a failure.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Upload response did not contain a url")]
    MissingUploadUrl,

    #[error("Login rejected: {0}")]
    LoginRejected(String),
}

impl ApiError {
    /// Server-provided message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            Self::LoginRejected(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("API url is not valid: {0}")]
    ApiUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Session storage is unavailable")]
    Unavailable,
}

/// Per-field client-side validation failures, keyed by form field name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email already used".into()),
        };
        assert_eq!(err.user_message(GENERIC_FAILURE), "Email already used");
    }

    #[test]
    fn user_message_falls_back_on_blank_or_missing() {
        let blank = ApiError::Status {
            status: 500,
            message: Some("  ".into()),
        };
        let missing = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(blank.user_message("Save failed"), "Save failed");
        assert_eq!(missing.user_message("Save failed"), "Save failed");
        assert_eq!(ApiError::Unauthenticated.user_message("x"), "x");
    }

    #[test]
    fn validation_errors_keep_first_message_per_field() {
        let mut errs = ValidationErrors::new();
        errs.add("email", "Email is required");
        errs.add("email", "Email is not valid");
        errs.add("password", "Too short");

        assert_eq!(errs.len(), 2);
        assert_eq!(errs.get("email"), Some("Email is required"));
        assert!(errs.clone().into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
