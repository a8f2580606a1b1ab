//! Animation support for the mobile sheet.
//!
//! # Architecture
//!
//! ```text
//! AnimationManager
//!   ├── SheetProperty::Offset  → Spring (open / close / snap-back)
//!   └── SheetProperty::Height  → Tween  (content-driven height changes)
//! ```
//!
//! Time only advances through `AnimationManager::update(delta_ms)`, so tests
//! drive animations with a fake clock instead of a real frame loop.

pub mod easing;
pub mod events;
pub mod manager;
pub mod spring;
pub mod tween;
pub mod types;

pub use easing::EasingFunction;
pub use events::{AnimationEvent, EventQueue};
pub use manager::AnimationManager;
pub use spring::{Spring, SpringConfig};
pub use tween::{Tween, TweenSpec};
pub use types::{AnimationId, AnimationState, SheetProperty};
