//! Central store for control values and checked state.
//!
//! Seeding records each control's default exactly once (`ensure_initial*`
//! never overwrites live state); `reset` restores the seeded defaults, which
//! is what a native form reset does.

use crate::ControlId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct ControlState {
    value: String,
    default_value: String,
    checked: bool,
    default_checked: bool,
}

/// Central store for form-control state.
#[derive(Clone, Debug, Default)]
pub struct ControlStore {
    controls: HashMap<ControlId, ControlState>,
}

impl ControlStore {
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this control.
    pub fn has(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    /// Returns the stored value for this control, if any.
    pub fn get(&self, id: ControlId) -> Option<&str> {
        self.controls.get(&id).map(|s| s.value.as_str())
    }

    /// Returns `true` if this checkbox/radio control is checked.
    pub fn is_checked(&self, id: ControlId) -> bool {
        self.controls.get(&id).is_some_and(|s| s.checked)
    }

    /// Set/overwrite the value for this control.
    pub fn set(&mut self, id: ControlId, value: String) {
        self.controls.entry(id).or_default().value = value;
    }

    /// Set the checked state for a checkbox/radio control.
    ///
    /// Returns `true` if the state actually changed.
    pub fn set_checked(&mut self, id: ControlId, checked: bool) -> bool {
        let st = self.controls.entry(id).or_default();
        let changed = st.checked != checked;
        st.checked = checked;
        changed
    }

    /// Ensure an entry exists with the given default value.
    ///
    /// If an entry already exists, this is a no-op: live state wins over
    /// markup defaults when a subtree is re-seeded.
    pub fn ensure_initial(&mut self, id: ControlId, default_value: String) {
        self.controls.entry(id).or_insert_with(|| ControlState {
            value: default_value.clone(),
            default_value,
            ..ControlState::default()
        });
    }

    /// Ensure an entry exists with the given default checked state.
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial_checked(&mut self, id: ControlId, default_checked: bool) {
        self.controls.entry(id).or_insert_with(|| ControlState {
            checked: default_checked,
            default_checked,
            ..ControlState::default()
        });
    }

    /// Restore one control to its seeded defaults.
    pub fn reset(&mut self, id: ControlId) {
        if let Some(st) = self.controls.get_mut(&id) {
            st.value = st.default_value.clone();
            st.checked = st.default_checked;
        }
    }

    /// Restore every known control to its seeded defaults.
    pub fn reset_all(&mut self) {
        let ids: Vec<ControlId> = self.controls.keys().copied().collect();
        for id in ids {
            self.reset(id);
        }
    }

    /// Forget all control state (e.g. on page teardown).
    pub fn clear(&mut self) {
        self.controls.clear();
    }
}
