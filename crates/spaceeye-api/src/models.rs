// Wire types for the favorites endpoints.
//
// Request bodies are borrowed views so callers can serialize their own
// payload types without an intermediate copy.

use serde::{Deserialize, Serialize};

/// Body of `POST <add-endpoint>`: `{ "type": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct AddFavoriteBody<'a, T: Serialize + ?Sized> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub data: &'a T,
}

/// Body of `POST <remove-endpoint>`: `{ "type": ..., "image_url": ... }`.
#[derive(Debug, Serialize)]
pub struct RemoveFavoriteBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub image_url: &'a str,
}

/// Confirmed server-side state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAck {
    Added,
    Removed,
}

/// Reply envelope shared by both endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleReply {
    pub success: bool,
    #[serde(default)]
    pub action: Option<FavoriteAck>,
    #[serde(default)]
    pub error: Option<String>,
}
