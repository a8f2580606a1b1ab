//! Fixed-duration interpolation between two values.

use super::easing::EasingFunction;
use super::types::AnimationState;

/// Duration and curve of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_ms: f32,
    pub easing: EasingFunction,
}

impl TweenSpec {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            easing: EasingFunction::Sheet,
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

/// An in-progress tween.
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_ms: f32,
    pub elapsed_ms: f32,
    pub easing: EasingFunction,
    pub state: AnimationState,
}

impl Tween {
    pub fn new(from: f32, to: f32, spec: TweenSpec) -> Self {
        let mut tween = Self {
            from,
            to,
            duration_ms: spec.duration_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: AnimationState::Running,
        };
        if spec.duration_ms <= 0.0 || from == to {
            tween.state = AnimationState::Finished;
        }
        tween
    }

    pub fn current_value(&self) -> f32 {
        match self.state {
            AnimationState::Finished => self.to,
            AnimationState::Running | AnimationState::Cancelled => {
                let eased = self.easing.evaluate(self.progress());
                self.from + (self.to - self.from) * eased
            }
        }
    }

    /// Returns `true` while the tween is still running.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.state != AnimationState::Running {
            return false;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.state = AnimationState::Finished;
            false
        } else {
            true
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn cancel(&mut self) {
        if self.state == AnimationState::Running {
            self.state = AnimationState::Cancelled;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let spec = TweenSpec::new(200.0).with_easing(EasingFunction::Linear);
        let mut tween = Tween::new(100.0, 300.0, spec);
        assert!(tween.update(50.0));
        assert!((tween.current_value() - 150.0).abs() < 0.01);
        assert!(tween.update(50.0));
        assert!((tween.current_value() - 200.0).abs() < 0.01);
        assert!(!tween.update(100.0));
        assert_eq!(tween.current_value(), 300.0);
        assert_eq!(tween.state, AnimationState::Finished);
    }

    #[test]
    fn test_zero_duration_or_no_change_finishes_immediately() {
        assert_eq!(
            Tween::new(0.0, 10.0, TweenSpec::new(0.0)).state,
            AnimationState::Finished
        );
        let same = Tween::new(42.0, 42.0, TweenSpec::new(250.0));
        assert_eq!(same.state, AnimationState::Finished);
        assert_eq!(same.current_value(), 42.0);
    }

    #[test]
    fn test_cancel_freezes_value() {
        let spec = TweenSpec::new(100.0).with_easing(EasingFunction::Linear);
        let mut tween = Tween::new(0.0, 100.0, spec);
        tween.update(25.0);
        tween.cancel();
        assert!(!tween.update(25.0));
        assert!((tween.current_value() - 25.0).abs() < 0.01);
    }
}
