//! High-score persistence port.
//!
//! The contract is a single scalar: read once at startup, written when the
//! session ends with a better score. Failures degrade silently — a missing
//! or unreadable file just means no high score yet.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Narrow interface the game loop saves through.
pub trait HighScoreStore: Send {
    fn load(&self) -> u64;
    fn save(&mut self, score: u64) -> io::Result<()>;
}

/// Plain-integer file store.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u64 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    pub value: u64,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u64 {
        self.value
    }

    fn save(&mut self, score: u64) -> io::Result<()> {
        self.value = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join("gridfire_highscore_test_rt");
        let _ = fs::remove_file(&path);

        let mut store = FileHighScoreStore::new(&path);
        assert_eq!(store.load(), 0, "missing file reads as no high score");

        store.save(4200).unwrap();
        assert_eq!(store.load(), 4200);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_garbage_reads_as_zero() {
        let path = std::env::temp_dir().join("gridfire_highscore_test_garbage");
        fs::write(&path, "not a number").unwrap();

        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.load(), 0);

        let _ = fs::remove_file(&path);
    }
}
