//! Persistent local leaderboard: ranked, capped, stored as JSON.

use crate::constants::{LEADERBOARD_CAPACITY, TOP_TEN_CUTOFF};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One finished run. Field names match the storage layout used since the
/// first release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Final score (clamped score * multiplier - elapsed seconds).
    pub score: i64,
    #[serde(rename = "rawScore")]
    pub raw_score: u32,
    /// Elapsed time as "M:SS".
    pub time: String,
    #[serde(rename = "timeInSeconds")]
    pub time_in_seconds: i64,
    pub date: String,
}

/// Owns the persisted entry collection across runs. Load-on-open,
/// save-on-write. When storage is unavailable the store degrades to
/// in-memory only for the session; callers never see an error.
pub struct LeaderboardStore {
    entries: Vec<LeaderboardEntry>,
    path: Option<PathBuf>,
}

impl LeaderboardStore {
    /// Open the store at the platform config location, loading existing
    /// entries. Missing or corrupt files yield an empty leaderboard.
    pub fn open() -> Self {
        match store_path() {
            Ok(path) => {
                let entries = load_entries(&path);
                Self {
                    entries,
                    path: Some(path),
                }
            }
            Err(e) => {
                eprintln!("leaderboard storage unavailable ({}), scores will not persist", e);
                Self::in_memory()
            }
        }
    }

    /// A store that never touches disk (degraded mode and tests).
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            path: None,
        }
    }

    /// A store backed by an explicit file (tests).
    pub fn with_path(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Insert an entry: append, sort descending by final score, trim to
    /// capacity, persist. Returns whether the entry landed in the top ten.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> bool {
        self.entries.push(entry.clone());
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));

        let position = self
            .entries
            .iter()
            .position(|e| e == &entry)
            .unwrap_or(self.entries.len());
        let is_top_ten = position < TOP_TEN_CUTOFF;

        self.entries.truncate(LEADERBOARD_CAPACITY);
        self.persist();
        is_top_ten
    }

    /// Entries ordered highest score first, at most `limit` of them.
    pub fn list(&self, limit: usize) -> &[LeaderboardEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the collection, on disk too.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Some(path) = &self.path {
            if let Err(e) = save_entries(path, &self.entries) {
                eprintln!("failed to persist leaderboard ({}), keeping scores in memory only", e);
                self.path = None;
            }
        }
    }
}

/// Leaderboard file at the platform config dir (created if needed).
fn store_path() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "quizmaze").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
    })?;

    let config_dir = project_dirs.config_dir();
    fs::create_dir_all(config_dir)?;

    Ok(config_dir.join("leaderboard.json"))
}

/// Load entries, or an empty list when the file is missing or corrupt.
fn load_entries(path: &Path) -> Vec<LeaderboardEntry> {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

fn save_entries(path: &Path, entries: &[LeaderboardEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            raw_score: 0,
            time: "0:42".to_string(),
            time_in_seconds: 42,
            date: "2026-08-30".to_string(),
        }
    }

    #[test]
    fn test_insert_keeps_descending_order() {
        let mut store = LeaderboardStore::in_memory();
        store.insert(entry("a", 100));
        store.insert(entry("b", 300));
        store.insert(entry("c", 200));

        let scores: Vec<i64> = store.list(10).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
    }

    #[test]
    fn test_top_ten_detection() {
        let mut store = LeaderboardStore::in_memory();
        for i in 0..10 {
            assert!(store.insert(entry("filler", 1000 - i)));
        }
        // Eleventh place is not a record
        assert!(!store.insert(entry("late", 1)));
        // A high score still is
        assert!(store.insert(entry("champ", 5000)));
    }

    #[test]
    fn test_capacity_truncates_lowest() {
        let mut store = LeaderboardStore::in_memory();
        for i in 0..LEADERBOARD_CAPACITY {
            store.insert(entry("filler", i as i64 + 10));
        }
        assert_eq!(store.len(), LEADERBOARD_CAPACITY);

        // The 51st entry pushes out the lowest score
        store.insert(entry("newcomer", 9999));
        assert_eq!(store.len(), LEADERBOARD_CAPACITY);
        assert_eq!(store.list(1)[0].name, "newcomer");
        assert!(store.list(LEADERBOARD_CAPACITY).iter().all(|e| e.score != 10));
    }

    #[test]
    fn test_lowest_incoming_entry_is_dropped() {
        let mut store = LeaderboardStore::in_memory();
        for _ in 0..LEADERBOARD_CAPACITY {
            store.insert(entry("filler", 100));
        }
        assert!(!store.insert(entry("too-low", 1)));
        assert_eq!(store.len(), LEADERBOARD_CAPACITY);
        assert!(store.list(LEADERBOARD_CAPACITY).iter().all(|e| e.name == "filler"));
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = LeaderboardStore::in_memory();
        store.insert(entry("a", 1));
        store.clear();
        assert!(store.is_empty());
        assert!(store.list(10).is_empty());
    }

    #[test]
    fn test_list_limit() {
        let mut store = LeaderboardStore::in_memory();
        for i in 0..5 {
            store.insert(entry("x", i));
        }
        assert_eq!(store.list(3).len(), 3);
        assert_eq!(store.list(100).len(), 5);
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = std::env::temp_dir().join("quizmaze-leaderboard-test");
        let path = dir.join("leaderboard.json");
        let _ = fs::remove_file(&path);

        {
            let mut store = LeaderboardStore::with_path(path.clone());
            store.insert(entry("saved", 250));
        }

        let store = LeaderboardStore::with_path(path.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list(1)[0].name, "saved");
        assert_eq!(store.list(1)[0].score, 250);

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = std::env::temp_dir().join("quizmaze-leaderboard-corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("leaderboard.json");
        fs::write(&path, "{not json").unwrap();

        let store = LeaderboardStore::with_path(path.clone());
        assert!(store.is_empty());

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_entry_storage_field_names() {
        let json = serde_json::to_string(&entry("Ana", 170)).unwrap();
        assert!(json.contains("\"rawScore\""));
        assert!(json.contains("\"timeInSeconds\""));
        assert!(json.contains("\"time\""));
    }
}
