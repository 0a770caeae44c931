/// Pointer tilt calculator
///
/// Maps a pointer position inside an element to the raw rotation angles of
/// the 3D hover effect. Values are instantaneous; smoothing is left to the
/// renderer.

use super::data::TiltState;

/// Maximum tilt around either in-plane axis, in degrees
pub const MAX_TILT: f32 = 10.0;

/// What to clear when the pointer leaves the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Clear both tilt axes and the swing angle
    All,
    /// Clear both tilt axes, keep the last swing angle
    TiltOnly,
}

/// Element bounds in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct TiltCalculator {
    pub max_tilt: f32,
    pub reset: ResetPolicy,
}

impl TiltCalculator {
    pub fn new(reset: ResetPolicy) -> Self {
        Self {
            max_tilt: MAX_TILT,
            reset,
        }
    }

    /// Angles for a pointer at viewport position (`pointer_x`, `pointer_y`)
    pub fn compute(&self, pointer_x: f32, pointer_y: f32, bounds: Bounds) -> TiltState {
        let cx = bounds.width / 2.0;
        let cy = bounds.height / 2.0;

        // A collapsed element has no center to tilt around
        if !(cx > 0.0 && cy > 0.0) {
            return TiltState::NEUTRAL;
        }

        let dx = (pointer_x - bounds.left) - cx;
        let dy = (pointer_y - bounds.top) - cy;

        TiltState {
            rotate_x: (dy / cy) * -self.max_tilt,
            rotate_y: (dx / cx) * self.max_tilt,
            swing: dy.atan2(dx).to_degrees(),
        }
    }

    /// State after the pointer leaves the element
    pub fn on_leave(&self, current: &TiltState) -> TiltState {
        match self.reset {
            ResetPolicy::All => TiltState::NEUTRAL,
            ResetPolicy::TiltOnly => TiltState {
                swing: current.swing,
                ..TiltState::NEUTRAL
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RECT: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_center_is_flat() {
        let tilt = TiltCalculator::new(ResetPolicy::All).compute(200.0, 100.0, RECT);
        assert_relative_eq!(tilt.rotate_x, 0.0);
        assert_relative_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_top_left_corner_hits_extremes() {
        let tilt = TiltCalculator::new(ResetPolicy::All).compute(100.0, 50.0, RECT);
        // Pointer up tilts the top toward the viewer
        assert_relative_eq!(tilt.rotate_x, 10.0);
        assert_relative_eq!(tilt.rotate_y, -10.0);
        assert_relative_eq!(tilt.swing, -153.434_95, epsilon = 1e-3);
    }

    #[test]
    fn test_inside_is_bounded() {
        let calc = TiltCalculator::new(ResetPolicy::All);
        for (x, y) in [(100.0, 150.0), (300.0, 50.0), (300.0, 150.0), (180.0, 70.0)] {
            let tilt = calc.compute(x, y, RECT);
            assert!(tilt.rotate_x.abs() <= MAX_TILT + 1e-4);
            assert!(tilt.rotate_y.abs() <= MAX_TILT + 1e-4);
        }
    }

    #[test]
    fn test_swing_follows_polar_angle() {
        let calc = TiltCalculator::new(ResetPolicy::All);
        // Straight right of center, then straight below (screen y grows down)
        assert_relative_eq!(calc.compute(300.0, 100.0, RECT).swing, 0.0);
        assert_relative_eq!(calc.compute(200.0, 150.0, RECT).swing, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_collapsed_bounds_are_neutral() {
        let flat = Bounds {
            width: 0.0,
            ..RECT
        };
        let tilt = TiltCalculator::new(ResetPolicy::All).compute(120.0, 60.0, flat);
        assert_eq!(tilt, TiltState::NEUTRAL);
    }

    #[test]
    fn test_reset_policies() {
        let moved = TiltState {
            rotate_x: 4.0,
            rotate_y: -3.0,
            swing: 42.0,
        };

        let all = TiltCalculator::new(ResetPolicy::All).on_leave(&moved);
        assert_eq!(all, TiltState::NEUTRAL);

        let partial = TiltCalculator::new(ResetPolicy::TiltOnly).on_leave(&moved);
        assert_eq!(partial.rotate_x, 0.0);
        assert_eq!(partial.rotate_y, 0.0);
        assert_eq!(partial.swing, 42.0);
    }
}
