/// One-way visibility flags for the observed element set.
///
/// A flag flips false -> true on the first intersecting entry and never flips
/// back. After [`RevealTracker::disconnect`] no further transitions happen,
/// even for entries that were already queued when the observer went away.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    connected: bool,
}

/// What the observer callback should do for one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First time visible: add the marker class.
    Revealed,
    /// Already visible; the class add would be a no-op.
    AlreadyRevealed,
    /// Not intersecting, unknown index or observer disconnected.
    Ignored,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
            connected: true,
        }
    }

    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> RevealOutcome {
        if !self.connected || !is_intersecting {
            return RevealOutcome::Ignored;
        }
        match self.revealed.get_mut(index) {
            Some(flag) if *flag => RevealOutcome::AlreadyRevealed,
            Some(flag) => {
                *flag = true;
                RevealOutcome::Revealed
            }
            None => RevealOutcome::Ignored,
        }
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
