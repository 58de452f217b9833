//! Best-time persistence backed by a JSON file.
//!
//! The record is a single JSON object (`{"best_ms": 41000}`) so it stays
//! hand-inspectable and forward-compatible with extra fields. Anything wrong
//! with the file on load (missing, unreadable, malformed, or the legacy `-1`
//! unset sentinel) degrades to "no recorded best" rather than failing the
//! game.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tui_pairs_core::ScoreStore;

/// Environment variable overriding the score file location.
pub const SCORE_FILE_ENV: &str = "TUI_PAIRS_SCORE_FILE";

/// Default score file, relative to the working directory.
pub const DEFAULT_SCORE_FILE: &str = ".tui-pairs-best.json";

#[derive(Debug, Serialize, Deserialize)]
struct BestRecord {
    /// Best time in milliseconds, or `-1` when unset.
    best_ms: i64,
}

/// File-backed [`ScoreStore`] with a JSON record.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store from `TUI_PAIRS_SCORE_FILE` or the default path.
    pub fn from_env() -> Self {
        let path = std::env::var_os(SCORE_FILE_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_SCORE_FILE), PathBuf::from);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Option<BestRecord> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> Option<u32> {
        let record = self.read_record()?;
        // Negative values cover the BEST_TIME_UNSET sentinel.
        if record.best_ms < 0 {
            return None;
        }
        u32::try_from(record.best_ms).ok()
    }

    fn save(&mut self, best_ms: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let record = BestRecord {
            best_ms: i64::from(best_ms),
        };
        let raw = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
        fs::write(&self.path, raw)
    }
}
