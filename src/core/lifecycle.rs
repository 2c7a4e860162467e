/// Owns resources (listener closures, frame callbacks) until they are
/// released, at most once.
///
/// Release hands the value back to the caller instead of dropping it, so a
/// callback that lives inside the value can trigger its own release and have
/// the drop deferred until it has returned.
#[derive(Debug)]
pub struct ReleaseOnce<T> {
    held: Option<T>,
    released: bool,
}

impl<T> Default for ReleaseOnce<T> {
    fn default() -> Self {
        Self {
            held: None,
            released: false,
        }
    }
}

impl<T> ReleaseOnce<T> {
    /// Store the value. After release the value is handed straight back.
    pub fn hold(&mut self, value: T) -> Option<T> {
        if self.released {
            return Some(value);
        }
        self.held = Some(value);
        None
    }

    pub fn get(&self) -> Option<&T> {
        self.held.as_ref()
    }

    /// `Some` exactly once, on the first call; later calls get `None`.
    pub fn release(&mut self) -> Option<T> {
        if self.released {
            return None;
        }
        self.released = true;
        self.held.take()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
