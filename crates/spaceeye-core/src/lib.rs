// spaceeye-core: Favorite toggle state synchronization engine.

pub mod config;
pub mod context;
pub mod control;
pub mod controller;
pub mod error;
pub mod mirror;
pub mod model;
pub mod notify;
pub mod presentation;
pub mod request;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{FavoritesConfig, TlsVerification};
pub use context::{ApodContext, NoToken, PageExtractor, PageSnapshot, StaticToken, TokenSource};
pub use control::{ControlData, ToggleControl};
pub use controller::{ADDED_MESSAGE, FavoriteToggleController, REMOVED_MESSAGE};
pub use error::CoreError;
pub use mirror::{MirrorHook, MirrorRegistry};
pub use notify::{BroadcastNotifier, NotificationSink};
pub use presentation::{ButtonState, ButtonStyle, ButtonView, Presentation};
pub use request::{ToggleRequest, ToggleRequestClient};

pub use model::{
    ApodPayload, EntityKind, FailureKind, FavoritePayload, NotificationEvent, Severity,
    ToggleAction, ToggleOutcome,
};
