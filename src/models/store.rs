use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::problem::ProblemDescriptor;

/// A descriptor file that could not be read or parsed. Recorded, logged,
/// and excluded from the run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub message: String,
}

/// The read-only problem store: every descriptor that parsed, plus the
/// files that did not.
#[derive(Debug, Default)]
pub struct ProblemStore {
    problems: Vec<ProblemDescriptor>,
    parse_failures: Vec<ParseFailure>,
}

impl ProblemStore {
    pub fn problems(&self) -> &[ProblemDescriptor] {
        &self.problems
    }

    pub fn parse_failures(&self) -> &[ParseFailure] {
        &self.parse_failures
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ProblemDescriptor> {
        self.problems.iter().find(|p| p.id == id)
    }
}

/// Enumerate every `*.json` descriptor under `dir`.
///
/// Unparseable files are recorded and skipped; an unreadable directory is
/// the only hard failure. Descriptors come back sorted by id so repeated
/// runs report in the same order regardless of directory iteration order.
pub fn load_store(dir: &Path) -> Result<ProblemStore, StoreError> {
    let entries = fs::read_dir(dir).map_err(|e| StoreError::Unreadable {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut store = ProblemStore::default();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                store.parse_failures.push(ParseFailure {
                    path,
                    message: format!("Failed to read file: {}", e),
                });
                continue;
            }
        };

        match serde_json::from_str::<ProblemDescriptor>(&contents) {
            Ok(problem) => store.problems.push(problem),
            Err(e) => store.parse_failures.push(ParseFailure {
                path,
                message: format!("Failed to parse descriptor: {}", e),
            }),
        }
    }

    store.problems.sort_by(|a, b| a.id.cmp(&b.id));
    store.parse_failures.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("drillbit_store_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_loads_shipped_store() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("problems");
        let store = load_store(&dir).unwrap();
        assert!(store.find("contains_duplicate").is_some());
        assert!(store.find("two_sum").is_some());
        assert!(store.parse_failures().is_empty());
    }

    #[test]
    fn test_descriptors_sorted_by_id() {
        let dir = scratch_store(
            "sorted",
            &[
                ("zz.json", r#"{ "id": "zebra", "functionName": "zebra" }"#),
                ("aa.json", r#"{ "id": "apple", "functionName": "apple" }"#),
            ],
        );
        let store = load_store(&dir).unwrap();
        let ids: Vec<&str> = store.problems().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["apple", "zebra"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_descriptor_recorded_not_fatal() {
        let dir = scratch_store(
            "bad_file",
            &[
                ("good.json", r#"{ "id": "good", "functionName": "good" }"#),
                ("bad.json", "{ not json"),
            ],
        );
        let store = load_store(&dir).unwrap();
        assert_eq!(store.problems().len(), 1);
        assert_eq!(store.parse_failures().len(), 1);
        assert!(store.parse_failures()[0].path.ends_with("bad.json"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_non_json_files_ignored() {
        let dir = scratch_store(
            "mixed",
            &[
                ("readme.txt", "not a descriptor"),
                ("ok.json", r#"{ "id": "ok", "functionName": "ok" }"#),
            ],
        );
        let store = load_store(&dir).unwrap();
        assert_eq!(store.problems().len(), 1);
        assert!(store.parse_failures().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_store_is_ok() {
        let dir = scratch_store("empty", &[]);
        let store = load_store(&dir).unwrap();
        assert!(store.is_empty());
        assert!(store.parse_failures().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unreadable_store_is_hard_failure() {
        let dir = std::env::temp_dir().join("drillbit_store_does_not_exist");
        let _ = fs::remove_dir_all(&dir);
        assert!(load_store(&dir).is_err());
    }
}
