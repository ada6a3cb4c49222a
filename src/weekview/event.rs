use rat_event::{ConsumedEvent, Outcome};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WeekOutcome {
    /// The given event has not been used at all.
    Continue,
    /// The event has been recognized, but the result was nil.
    /// Further processing for this event may stop.
    Unchanged,
    /// The event has been recognized and there is some change
    /// due to it.
    /// Further processing for this event may stop.
    /// Rendering the ui is advised.
    Changed,
    /// The selection has changed.
    Selected,
}

impl ConsumedEvent for WeekOutcome {
    fn is_consumed(&self) -> bool {
        *self != WeekOutcome::Continue
    }
}

impl From<Outcome> for WeekOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Continue => WeekOutcome::Continue,
            Outcome::Unchanged => WeekOutcome::Unchanged,
            Outcome::Changed => WeekOutcome::Changed,
        }
    }
}

impl From<WeekOutcome> for Outcome {
    fn from(value: WeekOutcome) -> Self {
        match value {
            WeekOutcome::Continue => Outcome::Continue,
            WeekOutcome::Unchanged => Outcome::Unchanged,
            WeekOutcome::Changed => Outcome::Changed,
            WeekOutcome::Selected => Outcome::Changed,
        }
    }
}
