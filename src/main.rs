//! Terminal pair-matching runner (default binary).
//!
//! Hosts the game session: delivers selections and fixed time ticks, drains
//! outcome events, and redraws through the crossterm renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::deal::deal;
use tui_pairs::core::{Board, GameSession};
use tui_pairs::input::{handle_key_event, should_quit, Cursor};
use tui_pairs::store::JsonScoreStore;
use tui_pairs::term::{GameView, TerminalRenderer};
use tui_pairs::types::{Phase, UiAction, DEFAULT_PAIR_COUNT, TICK_MS};

/// Board columns for the default 8-pair layout (4x4).
const GRID_COLS: usize = 4;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let board = Board::new(deal(DEFAULT_PAIR_COUNT, wall_clock_seed()))?;
    let token_count = board.len();
    let mut session = GameSession::new(board, JsonScoreStore::from_env());

    let view = GameView::new(GRID_COLS);
    let mut cursor = Cursor::new(GRID_COLS, token_count);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut dirty = true;

    loop {
        if dirty {
            term.draw(&view.render(&session, cursor.token()))?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        match action {
                            UiAction::Select => {
                                if session.phase() == Phase::Idle {
                                    session.start_round();
                                } else {
                                    session.select_token(cursor.token());
                                }
                            }
                            UiAction::Restart => {
                                let board =
                                    Board::new(deal(DEFAULT_PAIR_COUNT, wall_clock_seed()))?;
                                cursor = Cursor::new(GRID_COLS, board.len());
                                session.swap_board(board);
                                session.start_round();
                            }
                            _ => cursor.apply(action),
                        }
                        dirty = true;
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);

            // Events are the hook points for sounds and animations; here
            // any of them just means the screen is stale.
            if !session.take_events().is_empty() {
                dirty = true;
            }
        }
    }
}
