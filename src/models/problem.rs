//! A practice problem from the bank. Loaded once and never mutated.
use serde::{Deserialize, Serialize};

pub type ProblemId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: ProblemId,
    pub title: String,
    pub difficulty: String,
    pub topic: String,
    pub link: String,
}

impl ProblemRecord {
    /// One-line label used in listings, e.g. `#1 [Easy] Two Sum`.
    pub fn label(&self) -> String {
        format!("#{} [{}] {}", self.id, self.difficulty, self.title)
    }
}
