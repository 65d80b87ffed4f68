use serde::{Deserialize, Serialize};

use super::kind::EntityKind;

/// The fields the add endpoint stores for an APOD favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApodPayload {
    pub title: String,
    pub explanation: String,
    /// Canonical image URL; doubles as the favorite's entity reference.
    pub url: String,
    pub date: String,
    #[serde(default = "default_media_type")]
    pub media_type: String,
}

fn default_media_type() -> String {
    "image".into()
}

/// Entity-specific data sent with an add request.
///
/// Serialized untagged: the `type` field of the request body already names
/// the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FavoritePayload {
    Apod(ApodPayload),
    /// Opaque rover photo record attached to the control at render time.
    MarsRover(serde_json::Value),
}

impl FavoritePayload {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Apod(_) => EntityKind::Apod,
            Self::MarsRover(_) => EntityKind::MarsRover,
        }
    }

    /// The image URL the server keys the favorite by.
    pub fn image_url(&self) -> Option<&str> {
        let url = match self {
            Self::Apod(apod) => Some(apod.url.as_str()),
            Self::MarsRover(photo) => photo.get("img_src").and_then(serde_json::Value::as_str),
        };
        url.filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rover_image_url_comes_from_img_src() {
        let payload = FavoritePayload::MarsRover(json!({ "id": 42, "img_src": "http://x/42.jpg" }));
        assert_eq!(payload.kind(), EntityKind::MarsRover);
        assert_eq!(payload.image_url(), Some("http://x/42.jpg"));
    }

    #[test]
    fn empty_apod_url_is_no_reference() {
        let payload = FavoritePayload::Apod(ApodPayload {
            title: "Pillars".into(),
            explanation: String::new(),
            url: String::new(),
            date: "2024-01-01".into(),
            media_type: "image".into(),
        });
        assert_eq!(payload.image_url(), None);
    }

    #[test]
    fn payload_serializes_without_a_tag() {
        let payload = FavoritePayload::MarsRover(json!({ "id": 7 }));
        assert_eq!(serde_json::to_value(&payload).ok(), Some(json!({ "id": 7 })));
    }
}
