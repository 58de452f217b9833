//! Score store contract - best-time persistence seam
//!
//! The session reads the best time once at construction and writes it once
//! per won round. The medium (file, key-value store, OS preference store) is
//! the implementor's business; a failing load degrades to "no recorded best"
//! and a failing save is reported to the presentation layer without blocking
//! the end of the round.

use std::io;

/// Get/set of the single persisted best-time value.
pub trait ScoreStore {
    /// Load the persisted best time in milliseconds.
    ///
    /// `None` means no recorded best; implementors map unreadable or
    /// malformed state here rather than failing.
    fn load(&mut self) -> Option<u32>;

    /// Persist a new best time in milliseconds.
    fn save(&mut self, best_ms: u32) -> io::Result<()>;
}

/// In-memory store for tests and store-less play.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best_ms: Option<u32>,
    fail_saves: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-recorded best time.
    pub fn with_best(best_ms: u32) -> Self {
        Self {
            best_ms: Some(best_ms),
            fail_saves: false,
        }
    }

    /// Make every `save` call fail (for exercising the save-failure path).
    pub fn failing() -> Self {
        Self {
            best_ms: None,
            fail_saves: true,
        }
    }

    /// The currently stored value.
    pub fn best_ms(&self) -> Option<u32> {
        self.best_ms
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Option<u32> {
        self.best_ms
    }

    fn save(&mut self, best_ms: u32) -> io::Result<()> {
        if self.fail_saves {
            return Err(io::Error::new(io::ErrorKind::Other, "store unavailable"));
        }
        self.best_ms = Some(best_ms);
        Ok(())
    }
}
