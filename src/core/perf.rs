/// Navigation timing marks, in milliseconds relative to the time origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationMarks {
    pub fetch_start: f64,
    pub dom_content_loaded_event_start: f64,
    pub dom_content_loaded_event_end: f64,
    pub load_event_start: f64,
    pub load_event_end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadTimings {
    pub load_time: f64,
    pub dom_content_loaded: f64,
    pub total_time: f64,
}

impl From<NavigationMarks> for LoadTimings {
    fn from(m: NavigationMarks) -> Self {
        Self {
            load_time: m.load_event_end - m.load_event_start,
            dom_content_loaded: m.dom_content_loaded_event_end - m.dom_content_loaded_event_start,
            total_time: m.load_event_end - m.fetch_start,
        }
    }
}


/// Document load phase, as reported by `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Interactive,
    Complete,
}

impl LoadPhase {
    /// Once complete, the `load` event has already fired and listening for it
    /// would never trigger.
    pub fn load_already_fired(self) -> bool {
        self == LoadPhase::Complete
    }
}
