use serde::{Deserialize, Serialize};

/// A scheduled prompt to revisit a problem. `due_date` is in epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub due_date: f64,
}

impl Reminder {
    pub fn new(due_date: f64) -> Self {
        Self { due_date }
    }

    /// Past and present due dates both count as due.
    pub fn is_due(&self, now: f64) -> bool {
        self.due_date <= now
    }
}
