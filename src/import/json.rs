//! JSON import of the problem bank.
//! Reads an array of problem objects and builds a `Dataset` from it.

use crate::error::{Error, Result};
use crate::models::{Dataset, ProblemRecord};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Loads the dataset at `path`.
///
/// Fails with `DatasetNotFound` when the file is missing and `DatasetInvalid`
/// when it is not a JSON array. Entries that do not match `ProblemRecord` are
/// skipped with a warning so one bad row does not hide the rest of the bank.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(|source| Error::DatasetInvalid {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<ProblemRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping dataset entry {position} in {}: {e}", path.display()),
        }
    }

    let dataset = Dataset::from_records(records);
    debug!(
        "loaded {} problems from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bank.json",
            r#"[
  {"id": 1, "title": "Two Sum", "difficulty": "Easy", "topic": "Arrays", "link": "https://leetcode.com/problems/two-sum/"},
  {"id": 15, "title": "3Sum", "difficulty": "Medium", "topic": "Two Pointers", "link": "https://leetcode.com/problems/3sum/"}
]"#,
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.all_ids(), &[1, 15]);
        assert_eq!(dataset.record(15).unwrap().title, "3Sum");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");

        let err = load_dataset(&missing).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_not_an_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bank.json", r#"{"id": 1}"#);

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, Error::DatasetInvalid { .. }));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bank.json",
            r#"[
  {"id": 1, "title": "a", "difficulty": "Easy", "topic": "t", "link": "l"},
  {"title": "no id", "difficulty": "Easy", "topic": "t", "link": "l"},
  {"id": "3", "title": "string id", "difficulty": "Easy", "topic": "t", "link": "l"},
  {"id": 4, "title": "d", "difficulty": "Hard", "topic": "t", "link": "l"}
]"#,
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.all_ids(), &[1, 4]);
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bank.json",
            r#"[
  {"id": 7, "title": "old", "difficulty": "Easy", "topic": "t", "link": "l"},
  {"id": 7, "title": "new", "difficulty": "Easy", "topic": "t", "link": "l"}
]"#,
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.record(7).unwrap().title, "new");
    }
}
