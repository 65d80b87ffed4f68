// ── Toggle request client ──
//
// Turns one toggle intent into exactly one call on `FavoritesClient` and
// classifies what came back. Knows nothing about controls or surfaces.

use std::sync::Arc;

use spaceeye_api::{FavoriteAck, FavoritesClient};
use tracing::{debug, warn};

use crate::config::FavoritesConfig;
use crate::context::{ApodContext, TokenSource};
use crate::control::ControlData;
use crate::error::CoreError;
use crate::model::{EntityKind, FavoritePayload, ToggleAction, ToggleOutcome};

/// A toggle intent, decoupled from any rendered element.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRequest {
    pub kind: EntityKind,
    pub action: ToggleAction,
    /// Image URL; required for `Remove`.
    pub entity_ref: Option<String>,
    /// Add payload; APOD adds may leave it to the context.
    pub payload: Option<FavoritePayload>,
}

impl ToggleRequest {
    /// Add `payload` as a favorite.
    pub fn add(payload: FavoritePayload) -> Self {
        Self {
            kind: payload.kind(),
            action: ToggleAction::Add,
            entity_ref: payload.image_url().map(str::to_owned),
            payload: Some(payload),
        }
    }

    /// Interpret a control's rendered attributes.
    pub fn from_control(data: &ControlData) -> Result<Self, CoreError> {
        let kind = EntityKind::parse(&data.kind)?;
        let payload = match kind {
            EntityKind::Apod => None,
            EntityKind::MarsRover => data
                .photo_data
                .clone()
                .filter(|photo| !photo.is_null())
                .map(FavoritePayload::MarsRover),
        };
        Ok(Self {
            kind,
            action: data.action,
            entity_ref: data.entity_ref.clone(),
            payload,
        })
    }
}

/// Performs toggle requests against the favorites endpoints.
pub struct ToggleRequestClient {
    api: FavoritesClient,
    token: Arc<dyn TokenSource>,
    apod: Arc<ApodContext>,
}

impl ToggleRequestClient {
    pub fn new(
        config: &FavoritesConfig,
        token: Arc<dyn TokenSource>,
        apod: Arc<ApodContext>,
    ) -> Result<Self, CoreError> {
        let api = FavoritesClient::new(
            config.base_url.clone(),
            config.endpoints(),
            &config.transport(),
        )?;
        Ok(Self::from_api(api, token, apod))
    }

    pub fn from_api(
        api: FavoritesClient,
        token: Arc<dyn TokenSource>,
        apod: Arc<ApodContext>,
    ) -> Self {
        Self { api, token, apod }
    }

    pub fn apod_context(&self) -> &Arc<ApodContext> {
        &self.apod
    }

    /// Send `request` once and classify the result. Never fails: every
    /// error becomes `ToggleOutcome::Failed`.
    pub async fn submit(&self, request: &ToggleRequest) -> ToggleOutcome {
        match self.try_submit(request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(kind = %request.kind, action = %request.action, error = %err, "favorite toggle failed");
                ToggleOutcome::from(err)
            }
        }
    }

    /// Like [`submit`](Self::submit), but with the error kept.
    pub async fn try_submit(&self, request: &ToggleRequest) -> Result<ToggleOutcome, CoreError> {
        let token = self.token.token();
        let kind = request.kind.as_ref();

        match request.action {
            ToggleAction::Add => {
                let payload = self.resolve_payload(request)?;
                let entity_ref = payload.image_url().map(str::to_owned);
                debug!(kind, entity_ref = ?entity_ref, "adding favorite");
                let ack = self.api.add(kind, &payload, token.as_ref()).await?;
                Ok(classify(ack, entity_ref))
            }
            ToggleAction::Remove => {
                let image_url =
                    request
                        .entity_ref
                        .as_deref()
                        .ok_or_else(|| CoreError::PayloadMissing {
                            kind: kind.to_owned(),
                            reason: "No favorite reference available".into(),
                        })?;
                debug!(kind, entity_ref = image_url, "removing favorite");
                let ack = self.api.remove(kind, image_url, token.as_ref()).await?;
                Ok(classify(ack, Some(image_url.to_owned())))
            }
        }
    }

    fn resolve_payload(&self, request: &ToggleRequest) -> Result<FavoritePayload, CoreError> {
        let payload = match (&request.payload, request.kind) {
            (Some(payload), _) => Some(payload.clone()),
            (None, EntityKind::Apod) => self.apod.resolve().map(FavoritePayload::Apod),
            (None, EntityKind::MarsRover) => None,
        };
        payload.ok_or_else(|| CoreError::PayloadMissing {
            kind: request.kind.to_string(),
            reason: request.kind.missing_payload_message().into(),
        })
    }
}

/// The server's acknowledgement decides the outcome, whatever was asked.
fn classify(ack: FavoriteAck, entity_ref: Option<String>) -> ToggleOutcome {
    match ack {
        FavoriteAck::Added => ToggleOutcome::Added { entity_ref },
        FavoriteAck::Removed => ToggleOutcome::Removed,
    }
}
