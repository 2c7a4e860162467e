pub mod config;
pub mod constants;
pub mod easing;
pub mod intro;
pub mod lifecycle;
pub mod modal;
pub mod neighbors;
pub mod parallax;
pub mod perf;
pub mod reveal;
pub mod ripple;
pub mod social;
pub mod styles;
pub mod timers;

pub use config::MotionConfig;
