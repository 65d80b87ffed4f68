use crate::error::CoreError;

/// Which part of the failure taxonomy a failed click fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PayloadMissing,
    UnsupportedEntityKind,
    NetworkFailure,
    ServerRejected,
    MalformedResponse,
}

/// Classified result of one add/remove request.
///
/// Consumed once by the controller to pick the next UI mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server stored the favorite. `entity_ref` is the image URL the
    /// control must send to remove it again.
    Added { entity_ref: Option<String> },
    /// The server deleted the favorite.
    Removed,
    /// Nothing changed server-side; `message` is shown to the user.
    Failed { kind: FailureKind, message: String },
}

impl From<CoreError> for ToggleOutcome {
    fn from(err: CoreError) -> Self {
        Self::Failed {
            kind: err.failure_kind(),
            message: err.user_message(),
        }
    }
}
