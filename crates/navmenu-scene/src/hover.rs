//! Desktop hover-intent controller.
//!
//! Tracks which channel's flyout is active. Leaving the trigger or the panel
//! does not close the flyout immediately: a short grace timer lets the
//! pointer cross the gap between trigger and panel without flicker. Any enter
//! event before the timer expires cancels the close.

use std::rc::Rc;

use navmenu_config::HoverConfig;
use tracing::debug;

use crate::model::{MenuChannel, MenuModel};
use crate::timer::DeferredTimer;

/// Snapshot of the flyout state used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverState {
    pub active_channel_id: Option<String>,
    /// True only while the active channel has a panel to show.
    pub is_open: bool,
}

pub struct HoverIntentController {
    model: Rc<MenuModel>,
    close_delay_ms: f32,
    state: HoverState,
    pending_close: DeferredTimer,
    disposed: bool,
}

impl HoverIntentController {
    pub fn new(model: Rc<MenuModel>, config: &HoverConfig) -> Self {
        Self {
            model,
            close_delay_ms: config.close_delay_ms,
            state: HoverState::default(),
            pending_close: DeferredTimer::new(),
            disposed: false,
        }
    }

    pub fn on_enter_trigger(&mut self, channel_id: &str) {
        if self.disposed {
            return;
        }
        let Some(channel) = self.model.find_channel(channel_id) else {
            debug!(channel_id, "hover on unknown channel ignored");
            return;
        };
        self.pending_close.cancel();
        let is_open = channel.has_panel();
        if self.state.active_channel_id.as_deref() != Some(channel_id) {
            debug!(channel_id, is_open, "hover channel activated");
        }
        self.state = HoverState {
            active_channel_id: Some(channel.id.clone()),
            is_open,
        };
    }

    pub fn on_leave_trigger(&mut self) {
        self.schedule_close();
    }

    pub fn on_enter_panel(&mut self) {
        if self.disposed {
            return;
        }
        self.pending_close.cancel();
    }

    pub fn on_leave_panel(&mut self) {
        self.schedule_close();
    }

    /// Close without the grace window (item activated, Escape pressed).
    pub fn close_now(&mut self) {
        self.pending_close.cancel();
        self.state = HoverState::default();
    }

    /// Advance the pending-close timer.
    pub fn update(&mut self, delta_ms: f32) {
        if self.disposed {
            return;
        }
        if self.pending_close.advance(delta_ms) {
            debug!(channel_id = ?self.state.active_channel_id, "hover grace window expired");
            self.state = HoverState::default();
        }
    }

    /// Tear down: cancel the timer and refuse further events.
    pub fn dispose(&mut self) {
        self.close_now();
        self.disposed = true;
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn active_channel_id(&self) -> Option<&str> {
        self.state.active_channel_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_close_pending(&self) -> bool {
        self.pending_close.is_armed()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    /// Channel whose panel is currently shown.
    pub fn open_channel(&self) -> Option<&MenuChannel> {
        if !self.state.is_open {
            return None;
        }
        self.model.find_channel(self.state.active_channel_id.as_deref()?)
    }

    fn schedule_close(&mut self) {
        if self.disposed || self.state.active_channel_id.is_none() {
            return;
        }
        self.pending_close.schedule(self.close_delay_ms);
    }
}
