//! Cancellable one-shot timer driven by an external clock.
//!
//! The timer never fires on its own: its owner advances it from its
//! `update(delta_ms)` and acts on the returned `true`. Dropping or cancelling
//! the timer therefore guarantees no callback runs afterwards.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum TimerState {
    #[default]
    Idle,
    Armed {
        remaining_ms: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DeferredTimer {
    state: TimerState,
}

impl DeferredTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer. Re-arming restarts the countdown.
    pub fn schedule(&mut self, delay_ms: f32) {
        self.state = TimerState::Armed {
            remaining_ms: delay_ms.max(0.0),
        };
    }

    /// Disarm the timer. Returns whether it was armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.state = TimerState::Idle;
        was_armed
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. })
    }

    /// Advance the countdown. Returns `true` exactly once, when it expires.
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        let TimerState::Armed { remaining_ms } = self.state else {
            return false;
        };
        let remaining_ms = remaining_ms - delta_ms.max(0.0);
        if remaining_ms <= 0.0 {
            self.state = TimerState::Idle;
            true
        } else {
            self.state = TimerState::Armed { remaining_ms };
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut timer = DeferredTimer::new();
        timer.schedule(150.0);
        assert!(!timer.advance(100.0));
        assert!(timer.is_armed());
        assert!(timer.advance(50.0));
        assert!(!timer.is_armed());
        assert!(!timer.advance(500.0));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = DeferredTimer::new();
        timer.schedule(10.0);
        assert!(timer.cancel());
        assert!(!timer.advance(100.0));
        assert!(!timer.cancel());
    }

    #[test]
    fn rescheduling_restarts_countdown() {
        let mut timer = DeferredTimer::new();
        timer.schedule(150.0);
        timer.advance(140.0);
        timer.schedule(150.0);
        assert!(!timer.advance(140.0));
        assert!(timer.advance(10.0));
    }
}
