use glam::DVec2;

/// Element bounds in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }
}

/// Square ripple placed relative to the hovered element, centered on the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub offset: DVec2,
}

impl RippleGeometry {
    pub fn anchored(bounds: Bounds, pointer: DVec2) -> Self {
        let size = bounds.size.max_element();
        let offset = pointer - bounds.origin - DVec2::splat(size / 2.0);
        Self { size, offset }
    }

    /// Inline style for the ripple node, animating over `duration_ms`. The
    /// `ripple` keyframes live in a shared style element injected once per
    /// document.
    pub fn css_text(&self, duration_ms: i32) -> String {
        format!(
            "position: absolute; width: {s}px; height: {s}px; left: {x}px; top: {y}px; \
             background: rgba(184, 142, 47, 0.3); border-radius: 50%; transform: scale(0); \
             animation: ripple {d}s ease-out; pointer-events: none; z-index: 1;",
            s = self.size,
            x = self.offset.x,
            y = self.offset.y,
            d = duration_ms as f64 / 1000.0,
        )
    }
}

pub const RIPPLE_KEYFRAMES_CSS: &str = "@keyframes ripple {\n  to {\n    transform: scale(2);\n    opacity: 0;\n  }\n}\n";
