/// Alternating entrance class for portfolio item `index`.
#[inline]
pub fn slide_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "slide-in-left"
    } else {
        "slide-in-right"
    }
}
