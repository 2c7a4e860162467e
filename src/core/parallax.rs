/// Speed factor for the element at `index` in the tracked sequence.
#[inline]
pub fn speed_factor(base: f64, step: f64, index: usize) -> f64 {
    base + index as f64 * step
}

/// Vertical translation in CSS pixels for a scroll offset and speed.
#[inline]
pub fn offset_for(scroll_y: f64, speed: f64) -> f64 {
    let y = -(scroll_y * speed);
    // avoid printing "-0px"
    if y == 0.0 {
        0.0
    } else {
        y
    }
}

#[inline]
pub fn translate_y(y: f64) -> String {
    format!("translateY({}px)", y)
}

#[derive(Clone, Debug)]
pub struct ParallaxRow<E> {
    pub element: E,
    pub speed: f64,
}

/// Ordered `(element, speed)` pairs, computed once at setup.
#[derive(Clone, Debug)]
pub struct ParallaxTable<E> {
    rows: Vec<ParallaxRow<E>>,
}

impl<E> ParallaxTable<E> {
    pub fn new(elements: impl IntoIterator<Item = E>, base: f64, step: f64) -> Self {
        let rows = elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| ParallaxRow {
                element,
                speed: speed_factor(base, step, i),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ParallaxRow<E>] {
        &self.rows
    }

    /// Translation for every row at the given scroll offset, in table order.
    pub fn offsets(&self, scroll_y: f64) -> impl Iterator<Item = (&E, f64)> + '_ {
        self.rows
            .iter()
            .map(move |row| (&row.element, offset_for(scroll_y, row.speed)))
    }
}

/// Debounce-to-next-frame gate: at most one frame request outstanding.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called by the frame callback once it runs.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
