use thiserror::Error;

/// Top-level error type for the `spaceeye-api` crate.
///
/// Covers every failure mode of one favorites round trip: building the
/// transport, sending the request, and reading the `{success, action, error}`
/// reply. `spaceeye-core` maps these into the toggle failure taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Reply ───────────────────────────────────────────────────────
    /// The body was not JSON at all, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Structured `success: false` reply.
    #[error("Favorites request rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// JSON reply that is neither a rejection nor a known acknowledgement.
    #[error("Malformed favorites reply: {body}")]
    MalformedResponse { body: String },
}

impl Error {
    /// Returns `true` if the request never produced a readable reply.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout { .. } | Self::Deserialization { .. }
        )
    }

    /// Server-provided rejection reason, if any.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}
