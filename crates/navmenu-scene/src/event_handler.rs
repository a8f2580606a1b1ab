//! Input events understood by the navigation shell.
//!
//! The host page translates its pointer, touch and keyboard events into
//! `MenuInput` values and hands them to `NavigationShell::handle_input`,
//! which reports whether the menu consumed them.

use crate::model::ItemRef;

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }

    pub(crate) fn from_bool(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// A user interaction with the menu, in either presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuInput {
    /// Pointer entered a channel trigger (desktop).
    PointerEnterTrigger(String),
    /// Pointer left the trigger strip (desktop).
    PointerLeaveTrigger,
    /// Pointer entered the open flyout panel (desktop).
    PointerEnterPanel,
    /// Pointer left the open flyout panel (desktop).
    PointerLeavePanel,
    /// A channel trigger was clicked or tapped.
    ActivateTrigger(String),
    /// A menu item was clicked or tapped.
    ActivateItem(ItemRef),
    /// The hamburger button (mobile).
    ToggleMenu,
    /// The sheet's back button (mobile).
    Back,
    /// Tap on the dimmed backdrop behind the sheet (mobile).
    BackdropTap,
    /// Escape key.
    Escape,
    /// Sheet drag in progress; `delta_y` is total travel since the drag began.
    DragUpdate { delta_y: f32 },
    /// Sheet drag released with its final travel and velocity (px/s).
    DragEnd { delta_y: f32, velocity_y: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_result_from_bool() {
        assert!(EventResult::from_bool(true).is_handled());
        assert_eq!(EventResult::from_bool(false), EventResult::Ignored);
    }
}
