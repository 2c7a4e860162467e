use super::constants::*;

/// Page motion parameters handed to the controller at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub reveal_threshold: f64,
    pub reveal_bottom_inset_px: i32,
    pub parallax_base_speed: f64,
    pub parallax_speed_step: f64,
    pub ripple_duration_ms: i32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_inset_px: REVEAL_BOTTOM_INSET_PX,
            parallax_base_speed: PARALLAX_BASE_SPEED,
            parallax_speed_step: PARALLAX_SPEED_STEP,
            ripple_duration_ms: RIPPLE_DURATION_MS,
        }
    }
}

impl MotionConfig {
    /// CSS root margin for the reveal observer, shrinking only the bottom edge.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_inset_px)
    }

    /// Delay before a ripple node is removed; also its animation length.
    pub fn ripple_lifetime_ms(&self) -> i32 {
        self.ripple_duration_ms
    }
}
