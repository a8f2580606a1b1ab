//! Timing curves for tweened sheet properties.
//!
//! Springs drive the sheet's vertical offset; everything with a fixed
//! duration (the sheet frame height) runs through one of these curves.

/// Timing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    Linear,
    /// Decelerating curve used for sheet height changes, `cubic-bezier(0.32, 0.72, 0, 1)`.
    #[default]
    Sheet,
}

impl EasingFunction {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::Sheet => cubic_bezier(0.32, 0.72, 0.0, 1.0, t),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }
    let t = solve_for_x(x1, x2, progress);
    bezier_component(y1, y2, t)
}

/// Newton-Raphson on x(t) = progress.
fn solve_for_x(x1: f32, x2: f32, target: f32) -> f32 {
    let mut t = target;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, t) - target;
        if err.abs() < 1e-6 {
            break;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }
    t
}

/// 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints_are_exact() {
        for ease in [EasingFunction::Linear, EasingFunction::Sheet] {
            assert!(approx_eq(ease.evaluate(0.0), 0.0), "{ease:?} at 0");
            assert!(approx_eq(ease.evaluate(1.0), 1.0), "{ease:?} at 1");
        }
    }

    #[test]
    fn test_sheet_curve_decelerates() {
        let ease = EasingFunction::Sheet;
        let early = ease.evaluate(0.25);
        let mid = ease.evaluate(0.5);
        assert!(early > 0.5, "sheet curve should cover most distance early, got {early}");
        assert!(mid > early && mid < 1.0);
    }

    #[test]
    fn test_clamping() {
        let ease = EasingFunction::Sheet;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }
}
