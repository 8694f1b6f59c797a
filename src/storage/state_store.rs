//! State file operations for the problem bank
//!
//! The store is the only code that reads or writes the state file. Each
//! operation takes the caller's current `PersistedState` by value, writes the
//! full document back when something changed, and returns the state the
//! caller should keep using.

use crate::error::{Error, Result};
use crate::models::{PersistedState, ProblemId, Reminder};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape as read back, before stale or malformed entries are dropped.
#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    remaining: Vec<Value>,
    #[serde(default)]
    reminders: BTreeMap<String, Value>,
}

impl RawState {
    fn remaining_ids(&self) -> impl Iterator<Item = ProblemId> + '_ {
        self.remaining.iter().filter_map(|value| {
            let id = as_problem_id(value);
            if id.is_none() {
                warn!("dropping malformed remaining entry {value}");
            }
            id
        })
    }

    fn reminder_entries(&self) -> impl Iterator<Item = (ProblemId, Reminder)> + '_ {
        self.reminders.iter().filter_map(|(key, value)| {
            let id = key.parse::<ProblemId>().ok()?;
            let due_date = value.get("due_date").and_then(Value::as_f64)?;
            Some((id, Reminder::new(due_date)))
        })
    }
}

/// Integer ids, also accepting whole-number floats such as `2.0`.
fn as_problem_id(value: &Value) -> Option<ProblemId> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as ProblemId)
    })
}

#[derive(Clone, Debug)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Opens a store backed by `path`, creating its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the state, dropping ids outside `valid_ids`, and writes the
    /// filtered result back. A missing file yields (and persists) the fresh
    /// state. An unparseable file is never repaired.
    pub fn load(&self, valid_ids: &[ProblemId]) -> Result<PersistedState> {
        if !self.path.exists() {
            info!("no state at {}, starting fresh", self.path.display());
            let state = PersistedState::fresh(valid_ids);
            self.save(&state)?;
            return Ok(state);
        }

        let contents = fs::read(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let raw: RawState =
            serde_json::from_slice(&contents).map_err(|source| Error::StateCorrupt {
                path: self.path.clone(),
                source,
            })?;

        let state =
            PersistedState::reconcile(raw.remaining_ids(), raw.reminder_entries(), valid_ids);

        let dropped_remaining = raw.remaining.len() - state.remaining.len();
        let dropped_reminders = raw.reminders.len() - state.reminders.len();
        if dropped_remaining + dropped_reminders > 0 {
            debug!(
                "dropped {dropped_remaining} remaining and {dropped_reminders} reminder entries not in the dataset"
            );
        }

        self.save(&state)?;
        Ok(state)
    }

    /// Overwrites the state file. The write is not atomic.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let json =
            serde_json::to_string_pretty(state).map_err(|e| Error::io(&self.path, e.into()))?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))?;
        debug!(
            "saved state to {} ({} remaining, {} reminders)",
            self.path.display(),
            state.remaining.len(),
            state.reminders.len()
        );
        Ok(())
    }

    /// Refills the bank with every id and clears all reminders.
    pub fn reset(&self, all_ids: &[ProblemId]) -> Result<PersistedState> {
        let state = PersistedState::fresh(all_ids);
        self.save(&state)?;
        Ok(state)
    }

    /// Takes `id` out of the bank and cancels its reminder. Ids not in the
    /// bank leave the state untouched and nothing is written.
    pub fn mark_completed(&self, state: PersistedState, id: ProblemId) -> Result<PersistedState> {
        self.commit(state.without_remaining(id), state)
    }

    /// Returns `id` to the bank in dataset order and cancels its reminder.
    /// Unknown ids and ids already in the bank are a no-op.
    pub fn unmark_completed(
        &self,
        state: PersistedState,
        all_ids: &[ProblemId],
        id: ProblemId,
    ) -> Result<PersistedState> {
        self.commit(state.with_remaining(all_ids, id), state)
    }

    /// Inserts or replaces the reminder for `id`. `due_date` is epoch seconds
    /// and may already be in the past, but must be finite.
    pub fn schedule_reminder(
        &self,
        state: PersistedState,
        id: ProblemId,
        due_date: f64,
    ) -> Result<PersistedState> {
        if !due_date.is_finite() {
            return Err(Error::InvalidDueDate { id, due_date });
        }
        let updated = state.with_reminder(id, Reminder::new(due_date));
        self.save(&updated)?;
        Ok(updated)
    }

    fn commit(
        &self,
        updated: Option<PersistedState>,
        current: PersistedState,
    ) -> Result<PersistedState> {
        match updated {
            Some(updated) => {
                self.save(&updated)?;
                Ok(updated)
            }
            None => Ok(current),
        }
    }
}
