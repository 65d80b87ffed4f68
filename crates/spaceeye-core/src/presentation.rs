// ── Presentation seam ──
//
// The only visible side effect of a click is how its control looks. The
// controller drives it through `Presentation` so the state machine can run
// against any surface, including the in-memory `ButtonView` below.

use std::sync::{Mutex, PoisonError};

use crate::model::ToggleAction;

pub const ADD_MARKUP: &str = r#"<i class="far fa-star"></i>"#;
pub const REMOVE_MARKUP: &str = r#"<i class="fas fa-star"></i>"#;
pub const BUSY_MARKUP: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// How a toggle control is drawn.
pub trait Presentation: Send + Sync {
    /// Whatever is needed to put the control back exactly as it was.
    type Snapshot: Send;

    fn snapshot(&self) -> Self::Snapshot;

    /// Show the in-flight visual (spinner, disabled).
    fn set_busy(&self);

    /// Show the idle visual for `action`, clearing any busy state.
    fn set_action(&self, action: ToggleAction);

    fn restore(&self, snapshot: Self::Snapshot);
}

/// Outline star when the item can be added, filled star when it can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Outline,
    Filled,
}

impl ButtonStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Outline => "btn-outline-warning",
            Self::Filled => "btn-warning",
        }
    }
}

/// Everything visible about a favorite button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub markup: String,
    pub style: ButtonStyle,
    pub title: String,
    pub disabled: bool,
}

impl ButtonState {
    pub fn for_action(action: ToggleAction) -> Self {
        match action {
            ToggleAction::Add => Self {
                markup: ADD_MARKUP.into(),
                style: ButtonStyle::Outline,
                title: "Add to favorites".into(),
                disabled: false,
            },
            ToggleAction::Remove => Self {
                markup: REMOVE_MARKUP.into(),
                style: ButtonStyle::Filled,
                title: "Remove from favorites".into(),
                disabled: false,
            },
        }
    }

    pub fn is_busy(&self) -> bool {
        self.markup == BUSY_MARKUP
    }
}

/// In-memory favorite button.
#[derive(Debug)]
pub struct ButtonView {
    state: Mutex<ButtonState>,
}

impl ButtonView {
    pub fn new(action: ToggleAction) -> Self {
        Self::from_state(ButtonState::for_action(action))
    }

    /// A button rendered with custom markup (e.g. a labelled variant).
    pub fn from_state(state: ButtonState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ButtonState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Presentation for ButtonView {
    type Snapshot = ButtonState;

    fn snapshot(&self) -> ButtonState {
        self.state()
    }

    fn set_busy(&self) {
        let mut state = self.lock();
        state.disabled = true;
        state.markup = BUSY_MARKUP.into();
    }

    fn set_action(&self, action: ToggleAction) {
        *self.lock() = ButtonState::for_action(action);
    }

    fn restore(&self, snapshot: ButtonState) {
        *self.lock() = snapshot;
    }
}
