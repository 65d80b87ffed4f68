// ── Core error types ──
//
// The toggle failure taxonomy. None of these ever leave a click handler:
// each one becomes a `ToggleOutcome::Failed`, a rollback, and one toast.
// The `From<spaceeye_api::Error>` impl translates transport-layer errors
// into the taxonomy.

use thiserror::Error;

use crate::model::FailureKind;

/// Shown when the server rejects a request without a reason.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
/// Shown when no readable reply came back at all.
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred while performing the operation";
/// Shown for JSON replies that fit no known shape.
pub const MALFORMED_REPLY_MESSAGE: &str = "Unexpected response from server";

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Dispatch errors ──────────────────────────────────────────────
    #[error("Payload missing for {kind}: {reason}")]
    PayloadMissing { kind: String, reason: String },

    #[error("Unsupported entity kind: {kind}")]
    UnsupportedEntityKind { kind: String },

    // ── Request errors ───────────────────────────────────────────────
    #[error("Network failure: {reason}")]
    NetworkFailure { reason: String },

    #[error("Request rejected by server: {}", message.as_deref().unwrap_or("no reason given"))]
    ServerRejected { message: Option<String> },

    #[error("Malformed response: {body}")]
    MalformedResponse { body: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::PayloadMissing { .. } => FailureKind::PayloadMissing,
            Self::UnsupportedEntityKind { .. } => FailureKind::UnsupportedEntityKind,
            // A request that could not even be built never reached the server.
            Self::NetworkFailure { .. } | Self::Config { .. } => FailureKind::NetworkFailure,
            Self::ServerRejected { .. } => FailureKind::ServerRejected,
            Self::MalformedResponse { .. } => FailureKind::MalformedResponse,
        }
    }

    /// The toast text for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::PayloadMissing { reason, .. } => reason.clone(),
            Self::UnsupportedEntityKind { kind } => format!("Unsupported favorite type: {kind}"),
            Self::NetworkFailure { .. } | Self::Config { .. } => NETWORK_ERROR_MESSAGE.into(),
            Self::ServerRejected { message } => message
                .clone()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.into()),
            Self::MalformedResponse { .. } => MALFORMED_REPLY_MESSAGE.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<spaceeye_api::Error> for CoreError {
    fn from(err: spaceeye_api::Error) -> Self {
        match err {
            spaceeye_api::Error::Transport(e) => CoreError::NetworkFailure {
                reason: e.to_string(),
            },
            spaceeye_api::Error::Timeout { timeout_secs } => CoreError::NetworkFailure {
                reason: format!("timed out after {timeout_secs}s"),
            },
            spaceeye_api::Error::Deserialization { message, body: _ } => {
                CoreError::NetworkFailure {
                    reason: format!("non-JSON reply: {message}"),
                }
            }
            spaceeye_api::Error::Rejected { message } => CoreError::ServerRejected { message },
            spaceeye_api::Error::MalformedResponse { body } => {
                CoreError::MalformedResponse { body }
            }
            spaceeye_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            spaceeye_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_without_reason_uses_generic_message() {
        let err = CoreError::from(spaceeye_api::Error::Rejected { message: None });
        assert_eq!(err.failure_kind(), FailureKind::ServerRejected);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn rejection_reason_is_shown_verbatim() {
        let err = CoreError::from(spaceeye_api::Error::Rejected {
            message: Some("Already in favorites".into()),
        });
        assert_eq!(err.user_message(), "Already in favorites");
    }

    #[test]
    fn timeout_is_network_failure() {
        let err = CoreError::from(spaceeye_api::Error::Timeout { timeout_secs: 10 });
        assert_eq!(err.failure_kind(), FailureKind::NetworkFailure);
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn non_json_reply_is_network_failure() {
        let err = CoreError::from(spaceeye_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        });
        assert_eq!(err.failure_kind(), FailureKind::NetworkFailure);
    }

    #[test]
    fn malformed_reply_keeps_its_kind() {
        let err = CoreError::from(spaceeye_api::Error::MalformedResponse {
            body: "{\"success\":true}".into(),
        });
        assert_eq!(err.failure_kind(), FailureKind::MalformedResponse);
        assert_eq!(err.user_message(), MALFORMED_REPLY_MESSAGE);
    }
}
