//! Animation lifecycle events.
//!
//! The manager pushes events while updating; controllers drain them after
//! each `update` to react to completions. Completion events carry the run's
//! id so a controller can ignore the end of a run it already superseded.

use std::collections::VecDeque;

use super::types::{AnimationId, SheetProperty};

#[derive(Debug, Clone, PartialEq)]
pub enum AnimationEvent {
    Started {
        id: AnimationId,
        property: SheetProperty,
    },
    /// The run reached its target value.
    Ended {
        id: AnimationId,
        property: SheetProperty,
        value: f32,
    },
    /// The run was replaced or torn down before reaching its target.
    Cancelled {
        id: AnimationId,
        property: SheetProperty,
    },
}

impl AnimationEvent {
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Started { id, .. } | Self::Ended { id, .. } | Self::Cancelled { id, .. } => *id,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended { .. })
    }
}

/// FIFO of pending animation events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<AnimationEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: AnimationEvent) {
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = AnimationEvent> + '_ {
        self.events.drain(..)
    }
}
