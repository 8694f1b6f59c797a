//! The mutable progress record written to the state file.
//!
//! Every transition returns a new value instead of editing in place, so the
//! caller's copy and the persisted copy never alias. Transitions that would
//! change nothing return `None` and the caller keeps the state it already has.

use super::{ProblemId, Reminder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Incomplete problems, in dataset order, without duplicates.
    pub remaining: Vec<ProblemId>,
    pub reminders: BTreeMap<ProblemId, Reminder>,
}

impl PersistedState {
    /// Every problem remaining, no reminders.
    pub fn fresh(all_ids: &[ProblemId]) -> Self {
        let mut seen = HashSet::with_capacity(all_ids.len());
        let remaining = all_ids.iter().copied().filter(|id| seen.insert(*id)).collect();
        Self {
            remaining,
            reminders: BTreeMap::new(),
        }
    }

    /// Rebuilds a state from possibly stale entries, keeping only ids in
    /// `valid_ids` and ordering `remaining` by `valid_ids`.
    pub fn reconcile(
        remaining: impl IntoIterator<Item = ProblemId>,
        reminders: impl IntoIterator<Item = (ProblemId, Reminder)>,
        valid_ids: &[ProblemId],
    ) -> Self {
        let valid: HashSet<ProblemId> = valid_ids.iter().copied().collect();
        let wanted: HashSet<ProblemId> = remaining.into_iter().collect();

        let mut seen = HashSet::with_capacity(wanted.len());
        let remaining = valid_ids
            .iter()
            .copied()
            .filter(|id| wanted.contains(id) && seen.insert(*id))
            .collect();

        let reminders = reminders
            .into_iter()
            .filter(|(id, _)| valid.contains(id))
            .collect();

        Self {
            remaining,
            reminders,
        }
    }

    pub fn is_remaining(&self, id: ProblemId) -> bool {
        self.remaining.contains(&id)
    }

    pub fn completed_count(&self, total: usize) -> usize {
        total.saturating_sub(self.remaining.len())
    }

    /// Ids of `all_ids` that are no longer in the bank, in dataset order.
    pub fn completed_ids(&self, all_ids: &[ProblemId]) -> Vec<ProblemId> {
        let remaining: HashSet<ProblemId> = self.remaining.iter().copied().collect();
        all_ids
            .iter()
            .copied()
            .filter(|id| !remaining.contains(id))
            .collect()
    }

    /// Removes `id` from the bank and cancels its reminder.
    pub fn without_remaining(&self, id: ProblemId) -> Option<Self> {
        if !self.is_remaining(id) {
            return None;
        }

        let remaining = self.remaining.iter().copied().filter(|&r| r != id).collect();
        let mut reminders = self.reminders.clone();
        reminders.remove(&id);

        Some(Self {
            remaining,
            reminders,
        })
    }

    /// Puts `id` back into the bank, re-deriving dataset order, and cancels
    /// its reminder. `None` for ids outside `all_ids` or already remaining.
    pub fn with_remaining(&self, all_ids: &[ProblemId], id: ProblemId) -> Option<Self> {
        if !all_ids.contains(&id) || self.is_remaining(id) {
            return None;
        }

        let mut members: HashSet<ProblemId> = self.remaining.iter().copied().collect();
        members.insert(id);

        let mut seen = HashSet::with_capacity(members.len());
        let remaining = all_ids
            .iter()
            .copied()
            .filter(|r| members.contains(r) && seen.insert(*r))
            .collect();

        let mut reminders = self.reminders.clone();
        reminders.remove(&id);

        Some(Self {
            remaining,
            reminders,
        })
    }

    /// Inserts or replaces the reminder for `id`, regardless of bank membership.
    pub fn with_reminder(&self, id: ProblemId, reminder: Reminder) -> Self {
        let mut reminders = self.reminders.clone();
        reminders.insert(id, reminder);

        Self {
            remaining: self.remaining.clone(),
            reminders,
        }
    }

    /// All reminders, earliest first.
    pub fn reminders_by_due(&self) -> Vec<(ProblemId, Reminder)> {
        let mut entries: Vec<_> = self.reminders.iter().map(|(&id, &r)| (id, r)).collect();
        entries.sort_by(|a, b| a.1.due_date.total_cmp(&b.1.due_date).then(a.0.cmp(&b.0)));
        entries
    }

    /// Reminders whose due date is at or before `now`, earliest first.
    pub fn due_reminders(&self, now: f64) -> Vec<(ProblemId, Reminder)> {
        self.reminders_by_due()
            .into_iter()
            .filter(|(_, r)| r.is_due(now))
            .collect()
    }
}
