// ── Toggle controls ──
//
// The thin binding between one rendered favorite button and the engine.
// Pages own controls (usually behind an `Arc`); the controller only borrows
// one for the length of a click.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::ToggleAction;
use crate::presentation::Presentation;

/// The attributes a control was rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlData {
    /// Kind tag as rendered; parsed at dispatch.
    pub kind: String,
    pub action: ToggleAction,
    /// Image URL used to remove the favorite.
    pub entity_ref: Option<String>,
    /// Rover photo record attached at render time.
    pub photo_data: Option<serde_json::Value>,
}

/// One favorite button.
///
/// `busy` is the re-entrancy guard: at most one request per control.
pub struct ToggleControl<P> {
    data: Mutex<ControlData>,
    busy: AtomicBool,
    view: P,
}

impl<P: Presentation> ToggleControl<P> {
    pub fn new(data: ControlData, view: P) -> Self {
        Self {
            data: Mutex::new(data),
            busy: AtomicBool::new(false),
            view,
        }
    }

    /// An APOD button. `entity_ref` is set when the APOD is already a favorite.
    pub fn apod(action: ToggleAction, entity_ref: Option<String>, view: P) -> Self {
        Self::new(
            ControlData {
                kind: "apod".into(),
                action,
                entity_ref,
                photo_data: None,
            },
            view,
        )
    }

    /// A rover photo button carrying its photo record.
    pub fn mars_rover(
        action: ToggleAction,
        entity_ref: Option<String>,
        photo: serde_json::Value,
        view: P,
    ) -> Self {
        Self::new(
            ControlData {
                kind: "mars_rover".into(),
                action,
                entity_ref,
                photo_data: Some(photo),
            },
            view,
        )
    }

    pub fn data(&self) -> ControlData {
        self.lock().clone()
    }

    pub fn action(&self) -> ToggleAction {
        self.lock().action
    }

    pub fn entity_ref(&self) -> Option<String> {
        self.lock().entity_ref.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    /// Claim the control for one click; `None` if a request is in flight.
    pub(crate) fn begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { busy: &self.busy })
    }

    /// Record a server-confirmed state.
    pub(crate) fn confirm(&self, action: ToggleAction, entity_ref: Option<String>) {
        let mut data = self.lock();
        data.action = action;
        data.entity_ref = entity_ref;
    }

    fn lock(&self) -> MutexGuard<'_, ControlData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the busy flag when the click cycle ends, however it ends.
pub(crate) struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ButtonView;

    #[test]
    fn second_claim_fails_until_guard_drops() {
        let control = ToggleControl::apod(ToggleAction::Add, None, ButtonView::new(ToggleAction::Add));

        let guard = control.begin();
        assert!(guard.is_some());
        assert!(control.is_busy());
        assert!(control.begin().is_none());

        drop(guard);
        assert!(!control.is_busy());
        assert!(control.begin().is_some());
    }

    #[test]
    fn confirm_updates_action_and_ref() {
        let control = ToggleControl::apod(ToggleAction::Add, None, ButtonView::new(ToggleAction::Add));
        control.confirm(ToggleAction::Remove, Some("https://apod/x.jpg".into()));
        assert_eq!(control.action(), ToggleAction::Remove);
        assert_eq!(control.entity_ref().as_deref(), Some("https://apod/x.jpg"));
    }
}
