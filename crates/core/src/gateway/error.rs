//! Classified gateway errors
//!
//! Every failed call resolves to exactly one [`ErrorKind`]. Classification
//! happens once, in [`crate::gateway::outcome`]; call sites never
//! re-classify.

use thiserror::Error;

/// Boxed transport error kept as the cause of a classified failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fixed failure taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Envelope `code` was not a success code
    Business,
    /// HTTP 401
    Unauthorized,
    /// HTTP 403
    Forbidden,
    /// HTTP 404
    NotFound,
    /// HTTP 5xx
    Server,
    /// Any other non-2xx status
    OtherHttp,
    /// No response before the client timeout
    Timeout,
    /// No response for any other reason
    Network,
    /// Body is not an envelope, or `data` does not fit the expected type
    MalformedResponse,
}

impl ErrorKind {
    /// Stable label suitable for logging.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::OtherHttp => "other_http",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

/// The error every gateway call rejects with
///
/// `message` is the user-facing text; it equals the notification text
/// whenever a notification is emitted.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
    code: Option<i64>,
    #[source]
    cause: Option<BoxError>,
}

impl ClassifiedError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), status: None, code: None, cause: None }
    }

    /// Attach the HTTP status that produced this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the envelope code of a business failure.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    #[must_use]
    pub fn code(&self) -> Option<i64> {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_is_the_user_message() {
        let err = ClassifiedError::new(ErrorKind::Forbidden, "Access denied").with_status(403);
        assert_eq!(err.to_string(), "Access denied");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.kind().label(), "forbidden");
    }

    #[test]
    fn cause_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ClassifiedError::new(ErrorKind::Network, "Network error").with_cause(io);
        assert!(err.source().is_some());
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
