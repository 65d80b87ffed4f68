use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::CoreError;

/// The category of a favorited item.
///
/// Rendered controls carry the kind as a string; it is parsed into this
/// closed enum at dispatch so every branch below is checked exhaustively.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    /// Astronomy Picture of the Day.
    Apod,
    /// Mars rover photo.
    MarsRover,
}

impl EntityKind {
    /// Parse a rendered kind tag, rejecting anything unregistered.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        raw.parse().map_err(|_| CoreError::UnsupportedEntityKind {
            kind: raw.to_owned(),
        })
    }

    /// Whether controls of this kind have a modal counterpart to keep in sync.
    pub fn has_mirrored_surface(self) -> bool {
        match self {
            Self::Apod => false,
            Self::MarsRover => true,
        }
    }

    /// Toast text when an add is attempted without data.
    pub fn missing_payload_message(self) -> &'static str {
        match self {
            Self::Apod => "No APOD data available",
            Self::MarsRover => "No photo data available",
        }
    }
}

/// What a click on a control will ask the server to do.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToggleAction {
    Add,
    Remove,
}

impl ToggleAction {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        assert_eq!(EntityKind::parse("apod").unwrap(), EntityKind::Apod);
        assert_eq!(EntityKind::parse("mars_rover").unwrap(), EntityKind::MarsRover);
        assert_eq!(EntityKind::MarsRover.as_ref(), "mars_rover");
        assert_eq!(EntityKind::Apod.to_string(), "apod");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = EntityKind::parse("earth_imagery").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedEntityKind { ref kind } if kind == "earth_imagery"
        ));
    }

    #[test]
    fn only_rover_photos_mirror_to_the_modal() {
        assert!(EntityKind::MarsRover.has_mirrored_surface());
        assert!(!EntityKind::Apod.has_mirrored_surface());
    }

    #[test]
    fn action_inverse() {
        assert_eq!(ToggleAction::Add.inverse(), ToggleAction::Remove);
        assert_eq!(ToggleAction::Remove.inverse(), ToggleAction::Add);
        assert_eq!("remove".parse::<ToggleAction>().unwrap(), ToggleAction::Remove);
    }
}
