//! Core animation types.

/// Identifier of one animation run, unique per `AnimationManager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Lifecycle of an animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Running,
    /// Reached its target.
    Finished,
    /// Superseded by a newer request or torn down.
    Cancelled,
}

/// Sheet properties that can be animated.
///
/// At most one animation runs per property; a new request replaces the
/// running one instead of queueing behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetProperty {
    /// Vertical translation of the sheet; 0 is the resting open position.
    Offset,
    /// Height of the sheet frame.
    Height,
}
