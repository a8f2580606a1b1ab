//! Damped spring used for the sheet's open, close and snap-back motion.
//!
//! Unlike a fixed-duration tween, a spring carries velocity, so a drag
//! release can hand its residual speed to the animation and the sheet keeps
//! moving without a visible snap.

use navmenu_config::SheetConfig;

use super::types::AnimationState;

/// Integration step; long frames are split into steps of at most this size.
const MAX_STEP_MS: f32 = 4.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance to target under which the spring may settle (px).
    pub rest_delta: f32,
    /// Speed under which the spring may settle (px/s).
    pub rest_speed: f32,
    /// Lowest position the spring may reach. Crossing it stops any motion
    /// further down.
    pub floor: Option<f32>,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 40.0,
            mass: 1.0,
            rest_delta: 0.5,
            rest_speed: 10.0,
            floor: None,
        }
    }
}

impl SpringConfig {
    pub fn from_sheet(config: &SheetConfig) -> Self {
        Self {
            stiffness: config.spring_stiffness,
            damping: config.spring_damping,
            mass: config.spring_mass,
            ..Self::default()
        }
    }

    pub fn with_floor(mut self, floor: f32) -> Self {
        self.floor = Some(floor);
        self
    }
}

/// A running spring simulation.
#[derive(Debug, Clone)]
pub struct Spring {
    pub position: f32,
    /// Current velocity in px/s.
    pub velocity: f32,
    pub target: f32,
    pub config: SpringConfig,
    pub state: AnimationState,
}

impl Spring {
    pub fn new(from: f32, to: f32, initial_velocity: f32, config: SpringConfig) -> Self {
        let mut spring = Self {
            position: from,
            velocity: initial_velocity,
            target: to,
            config,
            state: AnimationState::Running,
        };
        if spring.is_at_rest() {
            spring.finish();
        }
        spring
    }

    /// Advance the simulation. Returns `true` while the spring is still moving.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }
        let mut remaining = delta_ms.max(0.0);
        while remaining > 0.0 {
            let step_ms = remaining.min(MAX_STEP_MS);
            remaining -= step_ms;
            self.integrate(step_ms / 1000.0);
            if self.is_at_rest() {
                self.finish();
                return false;
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    // Semi-implicit Euler: velocity first, then position with the new velocity.
    fn integrate(&mut self, dt: f32) {
        let displacement = self.position - self.target;
        let spring_force = -self.config.stiffness * displacement;
        let damping_force = -self.config.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.config.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        if let Some(floor) = self.config.floor {
            if self.position < floor {
                self.position = floor;
                self.velocity = self.velocity.max(0.0);
            }
        }
    }

    fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    fn finish(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.state = AnimationState::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(spring: &mut Spring, frame_ms: f32, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if !spring.update(frame_ms) {
                return frame + 1;
            }
        }
        max_frames
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut spring = Spring::new(800.0, 0.0, 0.0, SpringConfig::default());
        let frames = run_to_rest(&mut spring, 16.0, 200);
        assert!(frames < 200, "spring never settled");
        assert_eq!(spring.state, AnimationState::Finished);
        assert_eq!(spring.position, 0.0);
        assert_eq!(spring.velocity, 0.0);
    }

    #[test]
    fn test_moves_toward_target_each_frame() {
        let mut spring = Spring::new(800.0, 0.0, 0.0, SpringConfig::default());
        spring.update(16.0);
        let first = spring.position;
        spring.update(16.0);
        assert!(first < 800.0);
        assert!(spring.position < first);
    }

    #[test]
    fn test_initial_velocity_carries_over() {
        // Released while flicking upward: the spring starts moving in that direction.
        let mut spring = Spring::new(30.0, 0.0, -400.0, SpringConfig::default());
        spring.update(8.0);
        assert!(spring.velocity < 0.0);
        assert!(spring.position < 30.0);
    }

    #[test]
    fn test_floor_stops_overshoot() {
        let config = SpringConfig::default().with_floor(0.0);
        let mut spring = Spring::new(5.0, 0.0, -2000.0, config);
        let mut lowest = spring.position;
        while spring.update(4.0) {
            lowest = lowest.min(spring.position);
        }
        assert!(lowest >= 0.0, "spring dipped to {lowest}");
        assert_eq!(spring.position, 0.0);

        // Without a floor the same release overshoots.
        let mut free = Spring::new(5.0, 0.0, -2000.0, SpringConfig::default());
        free.update(8.0);
        assert!(free.position < 0.0);
    }

    #[test]
    fn test_starting_at_rest_finishes_immediately() {
        let spring = Spring::new(0.2, 0.0, 0.0, SpringConfig::default());
        assert_eq!(spring.state, AnimationState::Finished);
        assert_eq!(spring.position, 0.0);
    }

    #[test]
    fn test_cancel_stops_updates() {
        let mut spring = Spring::new(100.0, 0.0, 0.0, SpringConfig::default());
        spring.cancel();
        let before = spring.position;
        assert!(!spring.update(16.0));
        assert_eq!(spring.position, before);
        assert_eq!(spring.state, AnimationState::Cancelled);
    }

    #[test]
    fn test_long_frames_are_substepped() {
        let mut spring = Spring::new(800.0, 0.0, 0.0, SpringConfig::default());
        // A single two-second frame must not blow up the integration.
        spring.update(2000.0);
        assert_eq!(spring.state, AnimationState::Finished);
        assert_eq!(spring.position, 0.0);
    }
}
