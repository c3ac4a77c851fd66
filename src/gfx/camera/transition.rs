use cgmath::{Vector3, VectorSpace};

use super::viewpoint::Viewpoint;

/// Easing curves mapping linear progress `t` in `[0, 1]` onto `[0, 1]`
///
/// Every curve maps 0 to 0 and 1 to 1, so a transition always lands exactly
/// on its target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic deceleration
    #[default]
    QuadOut,
    CubicOut,
    /// Overshoots the target slightly before settling
    BackOut { overshoot: f32 },
}

impl Easing {
    pub const BACK_OUT: Easing = Easing::BackOut { overshoot: 1.70158 };

    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

/// An in-flight eased camera move
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    pub start: Vector3<f32>,
    pub target: Vector3<f32>,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
    pub viewpoint: Viewpoint,
}

impl CameraTransition {
    pub fn new(start: Vector3<f32>, viewpoint: Viewpoint, target: Vector3<f32>, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing: Easing::default(),
            viewpoint,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`; a zero-length transition is already done
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current eased position
    pub fn position(&self) -> Vector3<f32> {
        if self.is_finished() {
            return self.target;
        }
        self.start.lerp(self.target, self.easing.apply(self.progress()))
    }

    /// Advances by `dt` seconds and returns the position to apply this frame
    pub fn advance(&mut self, dt: f32) -> Vector3<f32> {
        self.elapsed += dt.max(0.0);
        self.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::BACK_OUT,
    ];

    #[test]
    fn test_curves_pin_endpoints() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", easing);
        }
    }

    #[test]
    fn test_quad_out_decelerates() {
        let e = Easing::QuadOut;
        assert!(e.apply(0.5) > 0.5);
        let early = e.apply(0.1) - e.apply(0.0);
        let late = e.apply(1.0) - e.apply(0.9);
        assert!(early > late);
    }

    #[test]
    fn test_back_out_overshoots() {
        assert!((0..100).any(|i| Easing::BACK_OUT.apply(i as f32 / 100.0) > 1.0));
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let target = Vector3::new(0.0, 6.5, 0.0);
        let mut transition =
            CameraTransition::new(Vector3::new(0.3, 1.0, 6.0), Viewpoint::Top, target, 1.0);
        for _ in 0..7 {
            transition.advance(1.0 / 6.0);
        }
        assert!(transition.is_finished());
        assert_eq!(transition.position(), target);
    }

    #[test]
    fn test_midway_is_between() {
        let mut transition = CameraTransition::new(
            Vector3::new(0.0, 0.0, 0.0),
            Viewpoint::Front,
            Vector3::new(0.0, 0.0, 10.0),
            2.0,
        );
        let p = transition.advance(1.0);
        assert!(!transition.is_finished());
        assert!((p.z - 7.5).abs() < 1e-5);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let target = Vector3::new(1.0, 2.0, 3.0);
        let transition = CameraTransition::new(Vector3::new(0.0, 0.0, 0.0), Viewpoint::Right, target, 0.0);
        assert!(transition.is_finished());
        assert_eq!(transition.position(), target);
    }
}
