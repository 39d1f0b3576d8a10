//! Per-session interaction counters.

use crate::game::ClickOutcome;

#[derive(Default, Debug)]
pub struct SessionStats {
    pub moves_applied: u64,
    pub rejected_attempts: u64,
    pub cancellations: u64,
}

impl SessionStats {
    /// Classify one input outcome into the counters. Selection starts
    /// and ignored events are not counted; they resolve into one of the
    /// other outcomes (or nothing) later.
    pub fn record(&mut self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::MoveApplied => self.moves_applied += 1,
            ClickOutcome::RejectedIllegalMove | ClickOutcome::RejectedEmptySource => {
                self.rejected_attempts += 1
            }
            ClickOutcome::SelectionCancelled => self.cancellations += 1,
            ClickOutcome::SelectionStarted | ClickOutcome::Ignored => {}
        }
    }

    /// Fraction of move attempts that were rejected.
    pub fn rejection_rate(&self) -> f64 {
        let attempts = self.moves_applied + self.rejected_attempts;
        if attempts == 0 {
            0.0
        } else {
            self.rejected_attempts as f64 / attempts as f64
        }
    }
}
