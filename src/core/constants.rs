/// Motion tuning constants shared by the pure helpers and the web wiring.
///
/// These values define observable timing/geometry of the page effects and are
/// kept here so the host-side tests can assert on them directly.
// Reveal: fraction of the element that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.1;
// Reveal: trigger 50px before the element's bottom edge would enter view
pub const REVEAL_BOTTOM_INSET_PX: i32 = 50;

// Parallax: speed = BASE + index * STEP
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.2;

// Ripple lifetime; matches the 0.6s keyframe animation
pub const RIPPLE_DURATION_MS: i32 = 600;

// Neighbor de-emphasis while another item is hovered
pub const NEIGHBOR_DIM_TRANSFORM: &str = "scale(0.95) translateY(10px)";
pub const NEIGHBOR_DIM_OPACITY: &str = "0.7";

// Intro: delay before the `visible` class lands
pub const INTRO_REVEAL_DELAY_MS: i32 = 300;

// Smooth scroll default duration
pub const SMOOTH_SCROLL_DEFAULT_MS: f64 = 1000.0;

// Social item nudge on hover
pub const SOCIAL_HOVER_SHIFT_PX: f64 = 10.0;
