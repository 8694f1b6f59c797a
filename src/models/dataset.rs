//! Dataset is the ordered problem bank plus a lookup by id.
use super::{ProblemId, ProblemRecord};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<ProblemRecord>,
    index: HashMap<ProblemId, usize>,
    ids: Vec<ProblemId>,
}

impl Dataset {
    /// Builds the index. A repeated id keeps its first position in `all_ids`
    /// but resolves to the last record carrying it.
    pub fn from_records(records: Vec<ProblemRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        let mut ids = Vec::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id, position).is_none() {
                ids.push(record.id);
            }
        }

        Self {
            records,
            index,
            ids,
        }
    }

    pub fn record(&self, id: ProblemId) -> Option<&ProblemRecord> {
        self.index.get(&id).and_then(|&pos| self.records.get(pos))
    }

    pub fn contains(&self, id: ProblemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Unique ids in dataset order.
    pub fn all_ids(&self) -> &[ProblemId] {
        &self.ids
    }

    /// Number of distinct problems.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ProblemId, title: &str) -> ProblemRecord {
        ProblemRecord {
            id,
            title: title.to_string(),
            difficulty: "Medium".to_string(),
            topic: "Graphs".to_string(),
            link: format!("https://leetcode.com/problems/{id}/"),
        }
    }

    #[test]
    fn test_ids_follow_dataset_order() {
        let dataset = Dataset::from_records(vec![record(3, "c"), record(1, "a"), record(2, "b")]);
        assert_eq!(dataset.all_ids(), &[3, 1, 2]);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let dataset = Dataset::from_records(vec![
            record(1, "first"),
            record(2, "other"),
            record(1, "second"),
        ]);

        assert_eq!(dataset.all_ids(), &[1, 2]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.record(1).unwrap().title, "second");
    }

    #[test]
    fn test_unknown_id() {
        let dataset = Dataset::from_records(vec![record(1, "a")]);
        assert!(dataset.record(999).is_none());
        assert!(!dataset.contains(999));
        assert!(dataset.contains(1));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.all_ids().is_empty());
    }
}
