//! Completion summary for the status line.
use super::{Dataset, PersistedState};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(dataset: &Dataset, state: &PersistedState) -> Self {
        let total = dataset.len();
        Self {
            completed: state.completed_count(total),
            total,
        }
    }

    /// Percentage in `0.0..=100.0`. An empty bank reports 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} completed ({:.1}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_status_line() {
        let progress = Progress {
            completed: 1,
            total: 3,
        };
        assert_eq!(progress.to_string(), "1/3 completed (33.3%)");
    }

    #[test]
    fn test_nothing_done() {
        let progress = Progress {
            completed: 0,
            total: 3,
        };
        assert_eq!(progress.to_string(), "0/3 completed (0.0%)");
    }

    #[test]
    fn test_empty_bank() {
        let progress = Progress {
            completed: 0,
            total: 0,
        };
        assert_eq!(progress.percentage(), 0.0);
        assert_eq!(progress.to_string(), "0/0 completed (0.0%)");
    }
}
