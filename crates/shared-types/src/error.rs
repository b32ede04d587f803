use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Generic text shown when the transport itself failed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Generic text shown when a 2xx response carried a body we could not read.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Unexpected response from server";

/// Categorization of portal errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Session missing, expired, or rejected (HTTP 401).
    AuthFailure,
    /// A required field was empty or unparseable; nothing was sent.
    ValidationError,
    /// The backend answered with a non-2xx status.
    RequestFailure,
    /// The request never produced a response.
    NetworkFailure,
    /// A 2xx response whose body did not match the expected schema.
    MalformedResponse,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::AuthFailure => write!(f, "AuthFailure"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RequestFailure => write!(f, "RequestFailure"),
            AppErrorKind::NetworkFailure => write!(f, "NetworkFailure"),
            AppErrorKind::MalformedResponse => write!(f, "MalformedResponse"),
        }
    }
}

/// Structured error produced at every client operation boundary.
///
/// Pages never propagate these further: they render `user_message()` inline
/// next to the form that triggered the operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status for `RequestFailure`/`AuthFailure`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn auth_failure(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::AuthFailure,
            message: message.into(),
            status: Some(401),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            status: None,
            field_errors,
        }
    }

    pub fn request_failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RequestFailure,
            message: message.into(),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    pub fn network() -> Self {
        Self {
            kind: AppErrorKind::NetworkFailure,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn malformed_response() -> Self {
        Self {
            kind: AppErrorKind::MalformedResponse,
            message: MALFORMED_RESPONSE_MESSAGE.to_string(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    /// Build the error for a non-2xx response.
    ///
    /// `body` is the raw response text. Its `error` field is used verbatim
    /// when present and non-empty, otherwise `fallback` is used.
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = crate::ErrorBody::message_from(body).unwrap_or_else(|| fallback.to_string());
        if status == 401 {
            Self::auth_failure(message)
        } else {
            Self::request_failure(status, message)
        }
    }

    /// Text a page renders inline for this error.
    pub fn user_message(&self) -> &str {
        &self.message
    }

    pub fn is_auth_failure(&self) -> bool {
        self.kind == AppErrorKind::AuthFailure
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        let mut first = None;
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, errs) in fields {
            if let Some(err) = errs.first() {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                first.get_or_insert_with(|| msg.clone());
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation(
            first.unwrap_or_else(|| "Validation failed".to_string()),
            field_errors,
        )
    }
}
