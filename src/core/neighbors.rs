use super::constants::{NEIGHBOR_DIM_OPACITY, NEIGHBOR_DIM_TRANSFORM};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Dimmed,
}

impl Emphasis {
    /// Inline transform value; empty clears the override.
    pub fn transform(self) -> &'static str {
        match self {
            Emphasis::Normal => "",
            Emphasis::Dimmed => NEIGHBOR_DIM_TRANSFORM,
        }
    }

    /// Inline opacity value; empty clears the override.
    pub fn opacity(self) -> &'static str {
        match self {
            Emphasis::Normal => "",
            Emphasis::Dimmed => NEIGHBOR_DIM_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Enter,
    Leave,
}

impl HoverPhase {
    pub fn neighbor_emphasis(self) -> Emphasis {
        match self {
            HoverPhase::Enter => Emphasis::Dimmed,
            HoverPhase::Leave => Emphasis::Normal,
        }
    }
}

/// Style changes for every tracked item except `active`. The active item is
/// never touched.
pub fn neighbor_plan(
    count: usize,
    active: usize,
    phase: HoverPhase,
) -> impl Iterator<Item = (usize, Emphasis)> {
    let emphasis = phase.neighbor_emphasis();
    (0..count)
        .filter(move |&i| i != active)
        .map(move |i| (i, emphasis))
}
