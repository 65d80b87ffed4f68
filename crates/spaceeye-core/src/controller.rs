// ── Favorite toggle controller ──
//
// Owns the click → request → surface-update cycle. Per control:
//
//   Idle(add) ──click──▶ Busy ──added──▶ Idle(remove)
//   Idle(remove) ─click─▶ Busy ──removed──▶ Idle(add)
//   Busy ──failed──▶ Idle(as before), presentation restored verbatim
//
// Presentation changes only after the server confirms; the busy visual is
// the only thing shown while a request is in flight.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::FavoritesConfig;
use crate::context::{ApodContext, TokenSource};
use crate::control::ToggleControl;
use crate::error::CoreError;
use crate::mirror::MirrorRegistry;
use crate::model::{
    EntityKind, FavoritePayload, NotificationEvent, Severity, ToggleAction, ToggleOutcome,
};
use crate::notify::NotificationSink;
use crate::presentation::Presentation;
use crate::request::{ToggleRequest, ToggleRequestClient};

pub const ADDED_MESSAGE: &str = "Added to favorites!";
pub const REMOVED_MESSAGE: &str = "Removed from favorites!";

/// Drives toggle controls through their request lifecycle.
///
/// Holds no reference to any control between clicks; pages pass the
/// clicked control in each time.
pub struct FavoriteToggleController {
    client: ToggleRequestClient,
    notifier: Arc<dyn NotificationSink>,
    mirrors: Arc<MirrorRegistry>,
    toast_duration: Duration,
}

impl FavoriteToggleController {
    pub fn new(
        client: ToggleRequestClient,
        notifier: Arc<dyn NotificationSink>,
        mirrors: Arc<MirrorRegistry>,
    ) -> Self {
        Self {
            client,
            notifier,
            mirrors,
            toast_duration: FavoritesConfig::DEFAULT_TOAST_DURATION,
        }
    }

    /// Build the request client from `config` and wire everything up.
    pub fn from_config(
        config: &FavoritesConfig,
        token: Arc<dyn TokenSource>,
        apod: Arc<ApodContext>,
        notifier: Arc<dyn NotificationSink>,
        mirrors: Arc<MirrorRegistry>,
    ) -> Result<Self, CoreError> {
        let client = ToggleRequestClient::new(config, token, apod)?;
        Ok(Self::new(client, notifier, mirrors).with_toast_duration(config.toast_duration))
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn client(&self) -> &ToggleRequestClient {
        &self.client
    }

    pub fn mirrors(&self) -> &Arc<MirrorRegistry> {
        &self.mirrors
    }

    // ── Click handling ───────────────────────────────────────────────

    /// Handle one click on `control`.
    ///
    /// Returns `None` when the click was dropped because a request for this
    /// control is already in flight.
    pub async fn toggle<P: Presentation>(&self, control: &ToggleControl<P>) -> Option<ToggleOutcome> {
        let Some(_busy) = control.begin() else {
            debug!("click ignored: request already in flight");
            return None;
        };

        let view = control.view();
        let original = view.snapshot();
        view.set_busy();

        let data = control.data();
        let (kind, outcome) = match ToggleRequest::from_control(&data) {
            Ok(request) => (Some(request.kind), self.client.submit(&request).await),
            Err(err) => {
                warn!(kind = %data.kind, error = %err, "click rejected at dispatch");
                (None, ToggleOutcome::from(err))
            }
        };

        // The rendered ref stands in when the payload carries no image URL.
        let confirmed = match &outcome {
            ToggleOutcome::Added { entity_ref } => Some((
                ToggleAction::Add,
                entity_ref.clone().or_else(|| data.entity_ref.clone()),
            )),
            ToggleOutcome::Removed => Some((ToggleAction::Remove, None)),
            ToggleOutcome::Failed { .. } => None,
        };

        match confirmed {
            Some((performed, entity_ref)) => {
                let next = performed.inverse();
                info!(
                    action = %performed,
                    entity_ref = ?entity_ref.as_deref().or(data.entity_ref.as_deref()),
                    "favorite toggle confirmed"
                );
                control.confirm(next, entity_ref);
                view.set_action(next);
            }
            None => view.restore(original),
        }

        if let Some(kind) = kind {
            self.sync_mirror(kind, &outcome, data.entity_ref.as_deref());
        }
        self.announce(&outcome);
        Some(outcome)
    }

    /// Add `payload` without a rendered control.
    ///
    /// An APOD payload also becomes the context's current item.
    pub async fn quick_add(&self, payload: FavoritePayload) -> ToggleOutcome {
        if let FavoritePayload::Apod(apod) = &payload {
            self.client.apod_context().set_current(apod.clone());
        }

        let request = ToggleRequest::add(payload);
        let outcome = self.client.submit(&request).await;

        self.sync_mirror(request.kind, &outcome, None);
        self.announce(&outcome);
        outcome
    }

    // ── Fan-out ──────────────────────────────────────────────────────

    fn sync_mirror(&self, kind: EntityKind, outcome: &ToggleOutcome, previous_ref: Option<&str>) {
        if !kind.has_mirrored_surface() {
            return;
        }
        let (action, entity_ref) = match outcome {
            ToggleOutcome::Added { entity_ref } => {
                (ToggleAction::Remove, entity_ref.as_deref().or(previous_ref))
            }
            ToggleOutcome::Removed => (ToggleAction::Add, previous_ref),
            ToggleOutcome::Failed { .. } => return,
        };
        if let Some(entity_ref) = entity_ref {
            self.mirrors.sync(action, entity_ref);
        }
    }

    fn announce(&self, outcome: &ToggleOutcome) {
        let (message, severity) = match outcome {
            ToggleOutcome::Added { .. } => (ADDED_MESSAGE.to_owned(), Severity::Success),
            ToggleOutcome::Removed => (REMOVED_MESSAGE.to_owned(), Severity::Success),
            ToggleOutcome::Failed { message, .. } => (message.clone(), Severity::Error),
        };
        self.notifier
            .notify(NotificationEvent::new(message, severity, self.toast_duration));
    }
}
