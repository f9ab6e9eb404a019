//! Easing curves for time-based tweens.

use std::f32::consts::PI;

/// Maps linear time progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing
    Linear,
    /// Sine-based ease in and out (slow start and end)
    #[default]
    EaseInOutSine,
}

impl Easing {
    /// Calculate the eased value for a given progress (0.0 to 1.0).
    ///
    /// Input outside the unit range is clamped, and the endpoints are exact.
    pub fn ease(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Parse easing from a name such as `"ease-in-out-sine"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Easing::Linear),
            "ease_in_out_sine" | "easeinoutsine" | "sine" => Some(Easing::EaseInOutSine),
            _ => None,
        }
    }
}
