//! Session module - the state machine driving a round
//!
//! Ties together board, tokens, timing, attempt counting, and best-score
//! bookkeeping. The host loop drives it through three entry points:
//! [`GameSession::select_token`], [`GameSession::tick`], and
//! [`GameSession::start_round`]. All transitions happen synchronously inside
//! those calls; the pair-check delay is accumulated virtual time across
//! ticks, never a blocking wait, so abandoning a round simply never resolves
//! the pending pair.
//!
//! Outcome events are queued internally and drained by the host with
//! [`GameSession::take_events`].

use arrayvec::ArrayVec;
use tui_pairs_types::{GameEvent, Phase, TokenId, CHECK_DELAY_MS};

use crate::board::Board;
use crate::store::ScoreStore;

/// The turn state machine for one board at a time.
///
/// The session owns its board and an injected [`ScoreStore`]; the best time
/// is read once at construction and written once per won round. Selections
/// are held as [`TokenId`] handles into the board, never token references.
#[derive(Debug)]
pub struct GameSession<S: ScoreStore> {
    board: Board,
    store: S,
    phase: Phase,
    /// Current turn's selections, in order. Never more than two.
    picks: ArrayVec<TokenId, 2>,
    attempts: u32,
    elapsed_ms: u32,
    best_time_ms: Option<u32>,
    check_delay_ms: u32,
    check_timer_ms: u32,
    /// Outcome of the most recently ended round, until the next restart.
    last_round_new_best: Option<bool>,
    events: Vec<GameEvent>,
}

impl<S: ScoreStore> GameSession<S> {
    /// Create an idle session over `board`, loading the best time from `store`.
    pub fn new(board: Board, mut store: S) -> Self {
        let best_time_ms = store.load();
        Self {
            board,
            store,
            phase: Phase::Idle,
            picks: ArrayVec::new(),
            attempts: 0,
            elapsed_ms: 0,
            best_time_ms,
            check_delay_ms: CHECK_DELAY_MS,
            check_timer_ms: 0,
            last_round_new_best: None,
            events: Vec::new(),
        }
    }

    /// Override the pair-check delay (milliseconds of accumulated tick time).
    pub fn with_check_delay(mut self, delay_ms: u32) -> Self {
        self.check_delay_ms = delay_ms;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed two-token turns this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Accumulated round time in milliseconds.
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Best time across all rounds ever completed, if any was recorded.
    pub fn best_time_ms(&self) -> Option<u32> {
        self.best_time_ms
    }

    /// First selection of the current turn, if any.
    pub fn first_selection(&self) -> Option<TokenId> {
        self.picks.first().copied()
    }

    /// Second selection of the current turn, if any.
    pub fn second_selection(&self) -> Option<TokenId> {
        self.picks.get(1).copied()
    }

    /// Time left before the pending pair resolves (zero outside Checking).
    pub fn check_remaining_ms(&self) -> u32 {
        self.check_timer_ms
    }

    /// Whether the most recently ended round set a new best time.
    ///
    /// `None` while no round has ended since the last restart.
    pub fn last_round_new_best(&self) -> Option<bool> {
        self.last_round_new_best
    }

    /// Start (or restart) a round on the current board.
    ///
    /// Resets attempts, elapsed time, and selections; the best time carries
    /// across rounds. May be called mid-round, abandoning the current turn.
    pub fn start_round(&mut self) {
        self.board.reset();
        self.picks.clear();
        self.attempts = 0;
        self.elapsed_ms = 0;
        self.check_timer_ms = 0;
        self.last_round_new_best = None;
        self.phase = Phase::Playing;
    }

    /// Equivalent to [`start_round`](Self::start_round); named entry point
    /// for mid-round restarts.
    pub fn restart_round(&mut self) {
        self.start_round();
    }

    /// Install a freshly dealt board for the next round and go idle.
    ///
    /// A pending pair check on the old board is dropped with it.
    pub fn swap_board(&mut self, board: Board) {
        self.board = board;
        self.picks.clear();
        self.check_timer_ms = 0;
        self.last_round_new_best = None;
        self.phase = Phase::Idle;
    }

    /// Report a player selection.
    ///
    /// Invalid selections (removed token, unknown handle, re-selecting the
    /// current first pick, or any selection outside Playing /
    /// AwaitingSecondSelection) are silently ignored: the UI may fail to
    /// disable interaction, but the session stays safe regardless.
    pub fn select_token(&mut self, id: TokenId) {
        if !matches!(self.phase, Phase::Playing | Phase::AwaitingSecondSelection) {
            return;
        }
        if self.picks.contains(&id) {
            return;
        }
        let Some(token) = self.board.token_mut(id) else {
            return;
        };
        if token.is_removed() {
            return;
        }

        token.reveal();
        self.picks.push(id);
        self.events.push(GameEvent::TokenRevealed(id));

        if self.picks.len() == 1 {
            self.phase = Phase::AwaitingSecondSelection;
        } else {
            self.attempts += 1;
            self.events.push(GameEvent::AttemptRecorded(self.attempts));
            self.check_timer_ms = self.check_delay_ms;
            self.phase = Phase::Checking;
        }
    }

    /// Advance virtual time by `dt_ms`.
    ///
    /// Time accumulates in Playing, AwaitingSecondSelection, and Checking;
    /// it is frozen in Idle and Ended. The tick cadence may be irregular.
    pub fn tick(&mut self, dt_ms: u32) {
        if !self.phase.is_running() {
            return;
        }

        let before_s = self.elapsed_ms / 1000;
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms / 1000 != before_s {
            self.events.push(GameEvent::TimeUpdated(self.elapsed_ms));
        }

        if self.phase == Phase::Checking {
            self.check_timer_ms = self.check_timer_ms.saturating_sub(dt_ms);
            if self.check_timer_ms == 0 {
                self.resolve_pair();
            }
        }
    }

    /// Take the queued outcome events, leaving the queue empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Resolve the pending pair. Only reachable from Checking, and the phase
    /// leaves Checking before returning, so a single tick can never resolve
    /// twice.
    fn resolve_pair(&mut self) {
        let &[first, second] = self.picks.as_slice() else {
            return;
        };
        self.picks.clear();

        let matched = match (self.board.token(first), self.board.token(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };

        if matched {
            if let Some(token) = self.board.token_mut(first) {
                token.remove();
            }
            if let Some(token) = self.board.token_mut(second) {
                token.remove();
            }
            self.events.push(GameEvent::PairMatched(first, second));

            if self.board.is_cleared() {
                self.phase = Phase::Ended;
                self.finish_round();
            } else {
                self.phase = Phase::Playing;
            }
        } else {
            if let Some(token) = self.board.token_mut(first) {
                token.hide();
            }
            if let Some(token) = self.board.token_mut(second) {
                token.hide();
            }
            self.events.push(GameEvent::PairMismatched(first, second));
            self.events.push(GameEvent::TokenHidden(first));
            self.events.push(GameEvent::TokenHidden(second));
            self.phase = Phase::Playing;
        }
    }

    /// End-of-round evaluation. Runs exactly once per round, only from the
    /// Checking -> Ended transition.
    fn finish_round(&mut self) {
        let new_best = self
            .best_time_ms
            .is_none_or(|best| self.elapsed_ms < best);

        if new_best {
            self.best_time_ms = Some(self.elapsed_ms);
            // A failing save is reported but never blocks ending the round,
            // and the in-memory best stays updated.
            if self.store.save(self.elapsed_ms).is_err() {
                self.events.push(GameEvent::BestTimeSaveFailed);
            }
        }

        self.last_round_new_best = Some(new_best);
        self.events.push(GameEvent::RoundWon {
            elapsed_ms: self.elapsed_ms,
            new_best,
        });
    }
}
