// ── Mirrored surfaces ──
//
// A photo can be shown twice on a page: in the grid and inside a modal.
// The modal registers a hook under the photo's image URL; after a
// confirmed toggle the controller calls it with the control's new action.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::model::ToggleAction;

pub type MirrorHook = Arc<dyn Fn(ToggleAction, &str) + Send + Sync>;

/// Entity ref → mirrored-surface hook.
#[derive(Default)]
pub struct MirrorRegistry {
    hooks: DashMap<String, MirrorHook>,
}

impl MirrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the hook for `entity_ref`.
    pub fn register<F>(&self, entity_ref: impl Into<String>, hook: F)
    where
        F: Fn(ToggleAction, &str) + Send + Sync + 'static,
    {
        self.hooks.insert(entity_ref.into(), Arc::new(hook));
    }

    /// Drop the hook, e.g. when the modal closes.
    pub fn unregister(&self, entity_ref: &str) -> bool {
        self.hooks.remove(entity_ref).is_some()
    }

    pub fn is_registered(&self, entity_ref: &str) -> bool {
        self.hooks.contains_key(entity_ref)
    }

    /// Invoke the hook for `entity_ref`, if any. Returns whether one ran.
    pub fn sync(&self, action: ToggleAction, entity_ref: &str) -> bool {
        // Clone out of the shard so the hook may touch the registry.
        let hook = self.hooks.get(entity_ref).map(|h| Arc::clone(h.value()));
        match hook {
            Some(hook) => {
                hook(action, entity_ref);
                true
            }
            None => {
                trace!(entity_ref, "no mirrored surface registered");
                false
            }
        }
    }
}
