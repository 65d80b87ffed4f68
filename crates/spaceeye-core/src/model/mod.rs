// ── Domain model ──
//
// Plain data carried through one click cycle. Nothing here talks to the
// network or to a display surface.

pub mod kind;
pub mod notification;
pub mod outcome;
pub mod payload;

pub use kind::{EntityKind, ToggleAction};
pub use notification::{NotificationEvent, Severity};
pub use outcome::{FailureKind, ToggleOutcome};
pub use payload::{ApodPayload, FavoritePayload};
