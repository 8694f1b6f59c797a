//! Command layer: combines the dataset with persisted progress and renders
//! the text shown for each command.
//!
//! Every command loads the state fresh from the store, so the file is
//! filtered against the current dataset before anything else happens.

use crate::error::Result;
use crate::models::{Dataset, PersistedState, ProblemId, ProblemRecord, Progress, Reminder};
use crate::storage::StateStore;
use crate::time::{self, Clock};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

pub const EMPTY_BANK_MESSAGE: &str =
    "All problems marked completed. To continue, reset or toggle problem completion(s).";
pub const RESET_MESSAGE: &str = "Progress reset. Problem bank refilled with all problems.";

/// Result of `App::toggle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Completed(ProblemId),
    Reopened(ProblemId),
    UnknownId(ProblemId),
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(id) => write!(f, "Marked {id} as complete."),
            Self::Reopened(id) => write!(f, "Moved {id} back into the problem bank."),
            Self::UnknownId(id) => write!(f, "{}", not_found(*id)),
        }
    }
}

/// Result of `App::remind`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RemindOutcome {
    Scheduled { id: ProblemId, due_date: f64 },
    UnknownId(ProblemId),
}

impl fmt::Display for RemindOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled { id, due_date } => write!(
                f,
                "Reminder set for {id}, due {}.",
                time::format_date(*due_date)
            ),
            Self::UnknownId(id) => write!(f, "{}", not_found(*id)),
        }
    }
}

fn not_found(id: ProblemId) -> String {
    format!("Problem id {id} not found in this problem bank.")
}

pub struct App {
    dataset: Dataset,
    store: StateStore,
    clock: Clock,
}

impl App {
    pub fn new(dataset: Dataset, store: StateStore, clock: Clock) -> Self {
        Self {
            dataset,
            store,
            clock,
        }
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Current state, filtered against the dataset and written back.
    pub fn state(&self) -> Result<PersistedState> {
        self.store.load(self.dataset.all_ids())
    }

    /// Lists due reminders, then suggests up to `count` distinct problems from
    /// the bank. Counts above the bank size are clamped.
    pub fn pick<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<String> {
        let state = self.state()?;
        let mut lines = self.due_reminder_lines(&state);

        if state.remaining.is_empty() {
            lines.push(EMPTY_BANK_MESSAGE.to_string());
            return Ok(lines.join("\n"));
        }

        let count = count.max(1);
        let available = state.remaining.len();
        if count > available {
            lines.push(format!(
                "Only {available} problem(s) remaining; suggesting {available}."
            ));
            lines.push(String::new());
        }

        let picks: Vec<ProblemId> = state
            .remaining
            .choose_multiple(rng, count.min(available))
            .copied()
            .collect();

        for (n, id) in picks.into_iter().enumerate() {
            if n > 0 {
                lines.push(String::new());
            }
            match self.dataset.record(id) {
                Some(record) => lines.extend(suggestion(record)),
                None => lines.push(format!("Suggested: #{id}")),
            }
        }

        Ok(lines.join("\n"))
    }

    pub fn status(&self) -> Result<String> {
        let state = self.state()?;
        let mut lines = vec![Progress::of(&self.dataset, &state).to_string()];

        if !state.reminders.is_empty() {
            let due = state.due_reminders(self.clock.now_epoch()).len();
            lines.push(format!(
                "Reminders: {} scheduled, {due} due",
                state.reminders.len()
            ));
        }

        Ok(lines.join("\n"))
    }

    /// Flips `id` between completed and remaining. Unknown ids change nothing.
    pub fn toggle(&self, id: ProblemId) -> Result<ToggleOutcome> {
        let state = self.state()?;

        if !self.dataset.contains(id) {
            return Ok(ToggleOutcome::UnknownId(id));
        }

        if state.is_remaining(id) {
            self.store.mark_completed(state, id)?;
            info!("marked {id} complete");
            Ok(ToggleOutcome::Completed(id))
        } else {
            self.store
                .unmark_completed(state, self.dataset.all_ids(), id)?;
            info!("returned {id} to the bank");
            Ok(ToggleOutcome::Reopened(id))
        }
    }

    /// Schedules a reminder `days` whole days from now. Zero means due now.
    pub fn remind(&self, id: ProblemId, days: u32) -> Result<RemindOutcome> {
        let state = self.state()?;

        if !self.dataset.contains(id) {
            return Ok(RemindOutcome::UnknownId(id));
        }

        let due_date = time::days_after(self.clock.now_epoch(), days);
        self.store.schedule_reminder(state, id, due_date)?;
        info!("scheduled reminder for {id} in {days} day(s)");
        Ok(RemindOutcome::Scheduled { id, due_date })
    }

    pub fn list_completed(&self) -> Result<String> {
        let state = self.state()?;
        let completed = state.completed_ids(self.dataset.all_ids());

        if completed.is_empty() {
            return Ok("No problems marked completed.".to_string());
        }

        let mut lines = vec![format!("Completed ({}):", completed.len())];
        lines.extend(completed.into_iter().map(|id| format!("  {}", self.label(id))));
        Ok(lines.join("\n"))
    }

    pub fn list_reminders(&self) -> Result<String> {
        let state = self.state()?;
        let reminders = state.reminders_by_due();

        if reminders.is_empty() {
            return Ok("No reminders scheduled.".to_string());
        }

        let now = self.clock.now_epoch();
        let mut lines = vec![format!("Scheduled reminders ({}):", reminders.len())];
        for (id, reminder) in reminders {
            let marker = if reminder.is_due(now) { " [due]" } else { "" };
            lines.push(format!(
                "  {} - {}{marker}",
                self.label(id),
                time::format_date(reminder.due_date)
            ));
        }
        Ok(lines.join("\n"))
    }

    pub fn reset(&self) -> Result<String> {
        self.store.reset(self.dataset.all_ids())?;
        info!("progress reset");
        Ok(RESET_MESSAGE.to_string())
    }

    fn due_reminder_lines(&self, state: &PersistedState) -> Vec<String> {
        let due = state.due_reminders(self.clock.now_epoch());
        if due.is_empty() {
            return Vec::new();
        }

        let mut lines = vec!["Due reminders:".to_string()];
        lines.extend(
            due.into_iter()
                .map(|(id, reminder)| self.reminder_line(id, reminder)),
        );
        lines.push(String::new());
        lines
    }

    fn reminder_line(&self, id: ProblemId, reminder: Reminder) -> String {
        format!(
            "  {} (due {})",
            self.label(id),
            time::format_date(reminder.due_date)
        )
    }

    fn label(&self, id: ProblemId) -> String {
        self.dataset
            .record(id)
            .map(ProblemRecord::label)
            .unwrap_or_else(|| format!("#{id}"))
    }
}

/// Suggestion block. The topic is left out so it does not give the solution away.
fn suggestion(record: &ProblemRecord) -> [String; 3] {
    [
        format!("Suggested: [{}] {}", record.difficulty, record.title),
        record.link.clone(),
        format!("Use \"toggle {}\" to mark complete when done.", record.id),
    ]
}
