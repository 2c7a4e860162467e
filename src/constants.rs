/// DOM names the page scripts depend on.
///
/// Selectors and class names must match the static markup and stylesheet;
/// changing one here without the other silently disables the effect.
// Tracked element sets
pub const SOCIAL_ITEM_SELECTOR: &str = ".social-item";
pub const PORTFOLIO_ITEM_SELECTOR: &str = ".portfolio-item";
pub const REVEAL_SELECTOR: &str = ".social-item, .portfolio-item";
pub const HERO_SELECTOR: &str = ".hero-content";
pub const INTRO_SELECTOR: &str = ".hero-content, .portfolio-item";

// Children queried inside tracked items
pub const SOCIAL_TEXT_SELECTOR: &str = ".social-text";
pub const PORTFOLIO_IMAGE_SELECTOR: &str = ".portfolio-image";

// Marker classes (appearance lives in the stylesheet)
pub const REVEALED_CLASS: &str = "animate-in";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

// Injected style element for the ripple keyframes
pub const RIPPLE_STYLE_ID: &str = "ripple-styles";

// Modal structure
pub const MODAL_CLASS: &str = "portfolio-modal";
pub const MODAL_OVERLAY_SELECTOR: &str = ".modal-overlay";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";

// Host window property holding the page handle
pub const PAGE_HANDLE_PROPERTY: &str = "animationController";

// Target for external profile links
pub const EXTERNAL_LINK_TARGET: &str = "_blank";
