//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (game logic, terminal rendering, persistence).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `CHECK_DELAY_MS` | 2000 | Delay before a selected pair is resolved |
//!
//! The check delay exists so the player can memorize both revealed faces
//! before the pair flips back (or clears). It is counted in accumulated
//! virtual tick time, so any host cadence works.
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{FaceId, Phase, TokenId};
//!
//! let a = FaceId(3);
//! let b = FaceId(3);
//! assert_eq!(a, b);
//!
//! let phase = Phase::Idle;
//! assert!(!phase.is_running());
//!
//! let id = TokenId(0);
//! assert_eq!(id.index(), 0);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a selected pair is resolved (2 seconds, accumulated tick time)
pub const CHECK_DELAY_MS: u32 = 2000;

/// Default number of face pairs on a board (16 tokens)
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Sentinel stored when no best time has been recorded yet
pub const BEST_TIME_UNSET: i64 = -1;

/// Face identity of a token.
///
/// Opaque and comparable: two tokens match iff their `FaceId`s are equal.
/// The value is assigned at deal time and never tied to any rendering asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Display glyph for a face ('A', 'B', ... wrapping after 26).
    pub fn glyph(&self) -> char {
        (b'A' + (self.0 % 26) as u8) as char
    }
}

/// Stable handle to a token on the board.
///
/// Handles index into the board's token slice and stay valid for the whole
/// round; removed tokens keep their slot. Sessions hold `TokenId`s, never
/// token references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub usize);

impl TokenId {
    /// Index into the board's token slice.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Session phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round active yet.
    Idle,
    /// Round running, no token selected this turn.
    Playing,
    /// First token of the turn is revealed, waiting for the second.
    AwaitingSecondSelection,
    /// Both tokens revealed; the check delay is counting down.
    Checking,
    /// Round won; selections are ignored until restart.
    Ended,
}

impl Phase {
    /// Whether round time advances in this phase.
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            Phase::Playing | Phase::AwaitingSecondSelection | Phase::Checking
        )
    }

    /// Convert to string (for views and debugging)
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::AwaitingSecondSelection => "awaiting-second",
            Phase::Checking => "checking",
            Phase::Ended => "ended",
        }
    }
}

/// Outcome events emitted by the session for the presentation layer.
///
/// Fire-and-forget: the host drains these after every entry point and maps
/// them to rendering, animation, or sound. No return value is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A token's face was turned up.
    TokenRevealed(TokenId),
    /// A token's face was turned back down (mismatch resolution).
    TokenHidden(TokenId),
    /// Both selected tokens matched and were cleared.
    PairMatched(TokenId, TokenId),
    /// The selected tokens did not match.
    PairMismatched(TokenId, TokenId),
    /// A two-token turn completed; payload is the running attempt count.
    AttemptRecorded(u32),
    /// The displayed elapsed time advanced (payload in milliseconds).
    TimeUpdated(u32),
    /// The board was cleared.
    RoundWon { elapsed_ms: u32, new_best: bool },
    /// Persisting a new best time failed; the in-memory best is still set.
    BestTimeSaveFailed,
}

/// Player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Select the token under the cursor.
    Select,
    /// Restart with a freshly dealt board.
    Restart,
}

impl UiAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            UiAction::CursorLeft => "cursorLeft",
            UiAction::CursorRight => "cursorRight",
            UiAction::CursorUp => "cursorUp",
            UiAction::CursorDown => "cursorDown",
            UiAction::Select => "select",
            UiAction::Restart => "restart",
        }
    }
}
