//! Easing functions for animations

use std::f32::consts::PI;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    Linear,
    /// Starts and ends slowly, fastest through the middle.
    /// Default interpolator for view translate animations on mobile platforms.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    /// Progress outside that range is clamped, so both ends land exactly.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => match t {
                t if t <= 0.0 => 0.0,
                t if t >= 1.0 => 1.0,
                t => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
            assert_eq!(easing.apply(1.5), 1.0, "{easing:?} past 1");
        }
    }

    #[test]
    fn test_accelerate_decelerate_is_symmetric() {
        let e = Easing::AccelerateDecelerate;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-5);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-5);
        // Slow start
        assert!(e.apply(0.1) < 0.1);
    }
}
