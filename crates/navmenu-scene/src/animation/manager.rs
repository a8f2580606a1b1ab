//! Animation manager for the sheet's animated properties.
//!
//! The manager owns at most one run per `SheetProperty`. Starting a run for a
//! property that is already animating cancels the old run (emitting
//! `Cancelled`) and starts the new one from the old run's current value, so
//! the sheet always tracks the latest request and never builds a backlog.
//!
//! # Usage
//!
//! ```
//! use navmenu_scene::animation::{AnimationManager, SheetProperty, SpringConfig};
//!
//! let mut manager = AnimationManager::new();
//! let id = manager.start_spring(SheetProperty::Offset, 800.0, 0.0, 0.0, SpringConfig::default());
//!
//! while manager.has_active_animations() {
//!     manager.update(16.0);
//! }
//! assert_eq!(manager.value(SheetProperty::Offset), None);
//! assert!(manager.drain_events().any(|e| e.is_ended() && e.id() == id));
//! ```

use std::collections::HashMap;

use super::events::{AnimationEvent, EventQueue};
use super::spring::{Spring, SpringConfig};
use super::tween::{Tween, TweenSpec};
use super::types::{AnimationId, SheetProperty};

#[derive(Debug)]
enum Motion {
    Spring(Spring),
    Tween(Tween),
}

impl Motion {
    fn value(&self) -> f32 {
        match self {
            Self::Spring(s) => s.position,
            Self::Tween(t) => t.current_value(),
        }
    }

    fn velocity(&self) -> f32 {
        match self {
            Self::Spring(s) => s.velocity,
            Self::Tween(_) => 0.0,
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Self::Spring(s) => s.is_running(),
            Self::Tween(t) => t.is_running(),
        }
    }

    fn update(&mut self, delta_ms: f32) -> bool {
        match self {
            Self::Spring(s) => s.update(delta_ms),
            Self::Tween(t) => t.update(delta_ms),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Spring(s) => s.cancel(),
            Self::Tween(t) => t.cancel(),
        }
    }
}

#[derive(Debug)]
struct Run {
    id: AnimationId,
    motion: Motion,
}

/// Coordinator for all running sheet animations.
#[derive(Debug, Default)]
pub struct AnimationManager {
    runs: HashMap<SheetProperty, Run>,
    next_id: u64,
    events: EventQueue,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a spring for `property`, replacing any run in flight.
    pub fn start_spring(
        &mut self,
        property: SheetProperty,
        from: f32,
        to: f32,
        initial_velocity: f32,
        config: SpringConfig,
    ) -> AnimationId {
        self.cancel(property);
        let spring = Spring::new(from, to, initial_velocity, config);
        self.begin(property, Motion::Spring(spring))
    }

    /// Start a tween for `property`, replacing any run in flight.
    pub fn start_tween(
        &mut self,
        property: SheetProperty,
        from: f32,
        to: f32,
        spec: TweenSpec,
    ) -> AnimationId {
        self.cancel(property);
        self.begin(property, Motion::Tween(Tween::new(from, to, spec)))
    }

    fn begin(&mut self, property: SheetProperty, motion: Motion) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);
        self.events.push(AnimationEvent::Started { id, property });

        if motion.is_running() {
            self.runs.insert(property, Run { id, motion });
        } else {
            self.events.push(AnimationEvent::Ended {
                id,
                property,
                value: motion.value(),
            });
        }
        id
    }

    /// Advance every run by `delta_ms`, emitting `Ended` for runs that settle.
    pub fn update(&mut self, delta_ms: f32) {
        if self.runs.is_empty() {
            return;
        }
        let mut finished = Vec::new();
        for (property, run) in self.runs.iter_mut() {
            if !run.motion.update(delta_ms) {
                finished.push(*property);
            }
        }
        // Stable event order regardless of hash order.
        finished.sort_by_key(|p| self.runs[p].id);
        for property in finished {
            if let Some(run) = self.runs.remove(&property) {
                self.events.push(AnimationEvent::Ended {
                    id: run.id,
                    property,
                    value: run.motion.value(),
                });
            }
        }
    }

    /// Cancel the run for `property`, returning the value it stopped at.
    pub fn cancel(&mut self, property: SheetProperty) -> Option<f32> {
        let mut run = self.runs.remove(&property)?;
        run.motion.cancel();
        self.events.push(AnimationEvent::Cancelled {
            id: run.id,
            property,
        });
        Some(run.motion.value())
    }

    pub fn cancel_all(&mut self) {
        let mut properties: Vec<_> = self.runs.keys().copied().collect();
        properties.sort_by_key(|p| self.runs[p].id);
        for property in properties {
            self.cancel(property);
        }
    }

    /// Current value of the run animating `property`, if any.
    pub fn value(&self, property: SheetProperty) -> Option<f32> {
        self.runs.get(&property).map(|r| r.motion.value())
    }

    /// Current velocity (px/s) of `property`; zero when not springing.
    pub fn velocity(&self, property: SheetProperty) -> f32 {
        self.runs
            .get(&property)
            .map(|r| r.motion.velocity())
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self, property: SheetProperty) -> bool {
        self.runs.contains_key(&property)
    }

    pub fn has_active_animations(&self) -> bool {
        !self.runs.is_empty()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = AnimationEvent> + '_ {
        self.events.drain()
    }
}
