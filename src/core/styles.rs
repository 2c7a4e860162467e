/// Document side of style injection: lookup by id and appending a `<style>`.
pub trait StyleHost {
    type Error;

    fn has_element(&self, id: &str) -> bool;
    fn append_style(&self, id: &str, css: &str) -> Result<(), Self::Error>;
}

/// Append a `<style>` with `id` unless one already exists.
/// Returns true when a new element was added.
pub fn inject_style_once<H: StyleHost>(host: &H, id: &str, css: &str) -> Result<bool, H::Error> {
    if host.has_element(id) {
        return Ok(false);
    }
    host.append_style(id, css)?;
    Ok(true)
}
