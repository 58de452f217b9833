//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the pair-matching rules and round state
//! management. It has **zero dependencies** on UI or I/O (the score store is
//! an injected trait), making it:
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any host loop can drive it at any cadence
//!
//! # Module Structure
//!
//! - [`token`]: a board cell (face identity + revealed/removed flags)
//! - [`board`]: the validated token collection for one round
//! - [`session`]: the turn state machine (selection, timing, win detection)
//! - [`deal`]: deterministic shuffled face ordering
//! - [`store`]: best-time persistence contract and in-memory double
//!
//! # Game Rules
//!
//! - A turn is two distinct token selections; the second starts a fixed
//!   check delay so both faces stay visible before resolving
//! - Matching faces are removed permanently; mismatches flip back down
//! - Attempts count completed turns; elapsed time accumulates while a round
//!   runs and freezes when the board is cleared
//! - Clearing the board ends the round and compares elapsed time against
//!   the persisted best
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{deal, Board, GameSession, MemoryScoreStore};
//! use tui_pairs_types::{Phase, TokenId};
//!
//! let board = Board::new(deal::deal(2, 7)).unwrap();
//! let mut session = GameSession::new(board, MemoryScoreStore::new());
//!
//! session.start_round();
//! session.select_token(TokenId(0));
//! session.select_token(TokenId(1));
//! session.tick(2000); // count the check delay down
//!
//! assert!(session.phase() == Phase::Playing || session.phase() == Phase::Ended);
//! for event in session.take_events() {
//!     // render / animate / play a sound
//!     let _ = event;
//! }
//! ```

pub mod board;
pub mod deal;
pub mod session;
pub mod store;
pub mod token;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use deal::SimpleRng;
pub use session::GameSession;
pub use store::{MemoryScoreStore, ScoreStore};
pub use token::Token;
