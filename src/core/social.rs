/// Profile handle printed in the social list; bare entries are resolved
/// against the portfolio sites.
pub const PROFILE_HANDLE: &str = "aashifasheikh12";

pub const BEHANCE_BASE: &str = "https://behance.net";
pub const DRIBBBLE_BASE: &str = "https://dribbble.com/";

/// Map the visible text of a social item to the URL it should open.
///
/// Full URLs open as-is. A handle with a path (`/handle`) is a Behance
/// profile, a bare handle is a Dribbble profile. Anything else is inert.
pub fn resolve_profile_url(text: &str) -> Option<String> {
    if text.contains("https://") {
        Some(text.to_string())
    } else if text.contains(PROFILE_HANDLE) {
        if text.contains('/') {
            Some(format!("{BEHANCE_BASE}{text}"))
        } else {
            Some(format!("{DRIBBBLE_BASE}{text}"))
        }
    } else {
        None
    }
}

#[inline]
pub fn translate_x(px: f64) -> String {
    format!("translateX({}px)", px)
}
