//! Session state machine tests: turn flow, timing, and best-score rules.
//!
//! The four lettered scenarios at the bottom follow the game's reference
//! walkthroughs on a two-pair board laid out `[A, B, A, B]`.

use tui_pairs::core::{Board, GameSession, MemoryScoreStore, ScoreStore};
use tui_pairs::types::{FaceId, GameEvent, Phase, TokenId, CHECK_DELAY_MS};

const A0: TokenId = TokenId(0);
const B0: TokenId = TokenId(1);
const A1: TokenId = TokenId(2);
const B1: TokenId = TokenId(3);

fn two_pair_board() -> Board {
    Board::new(vec![FaceId(0), FaceId(1), FaceId(0), FaceId(1)]).unwrap()
}

fn started(store: MemoryScoreStore) -> GameSession<MemoryScoreStore> {
    let mut session = GameSession::new(two_pair_board(), store);
    session.start_round();
    session
}

#[test]
fn attempts_only_count_completed_turns() {
    let mut session = started(MemoryScoreStore::new());

    session.select_token(A0); // first pick: no attempt yet
    assert_eq!(session.attempts(), 0);

    session.select_token(A0); // duplicate: ignored
    session.select_token(TokenId(42)); // unknown: ignored
    assert_eq!(session.attempts(), 0);

    session.select_token(B0); // turn completes
    assert_eq!(session.attempts(), 1);

    session.select_token(A1); // Checking: ignored
    assert_eq!(session.attempts(), 1);
}

#[test]
fn duplicate_first_selection_emits_nothing() {
    let mut session = started(MemoryScoreStore::new());
    session.select_token(A0);
    session.take_events();

    session.select_token(A0);
    assert!(session.take_events().is_empty());
    assert_eq!(session.phase(), Phase::AwaitingSecondSelection);
}

#[test]
fn self_pairing_is_impossible() {
    let mut session = started(MemoryScoreStore::new());
    session.select_token(A0);
    session.select_token(A0);
    session.tick(CHECK_DELAY_MS);

    let events = session.take_events();
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::PairMatched(_, _) | GameEvent::PairMismatched(_, _))));
}

#[test]
fn elapsed_is_monotone_and_freezes_after_winning() {
    let mut session = started(MemoryScoreStore::new());

    let mut last = 0;
    for dt in [16, 0, 250, 3, 1000] {
        session.tick(dt);
        assert!(session.elapsed_ms() >= last);
        last = session.elapsed_ms();
    }

    session.select_token(A0);
    session.select_token(A1);
    session.tick(CHECK_DELAY_MS);
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS);
    assert_eq!(session.phase(), Phase::Ended);

    let final_time = session.elapsed_ms();
    session.tick(10_000);
    assert_eq!(session.elapsed_ms(), final_time);
}

#[test]
fn best_score_law_across_rounds() {
    // Round 1 wins in e1 with a new best; round 2 takes e2 >= e1 and must
    // not be a new best.
    let mut session = started(MemoryScoreStore::new());
    session.tick(1000);
    session.select_token(A0);
    session.select_token(A1);
    session.tick(CHECK_DELAY_MS);
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS);

    let e1 = session.elapsed_ms();
    assert!(session
        .take_events()
        .contains(&GameEvent::RoundWon { elapsed_ms: e1, new_best: true }));
    assert_eq!(session.best_time_ms(), Some(e1));

    session.restart_round();
    session.tick(e1); // slower by construction: same turns plus this head start
    session.select_token(A0);
    session.select_token(A1);
    session.tick(CHECK_DELAY_MS);
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS);

    let e2 = session.elapsed_ms();
    assert!(e2 >= e1);
    assert!(session
        .take_events()
        .contains(&GameEvent::RoundWon { elapsed_ms: e2, new_best: false }));
    assert_eq!(session.best_time_ms(), Some(e1));
}

#[test]
fn scenario_a_two_matches_win_the_round() {
    let mut session = started(MemoryScoreStore::new());

    // Select index0 (A); ticking past the delay resolves nothing with only
    // one token selected.
    session.select_token(A0);
    let events = session.take_events();
    assert!(events.contains(&GameEvent::TokenRevealed(A0)));

    session.tick(CHECK_DELAY_MS + 100);
    assert_eq!(session.phase(), Phase::AwaitingSecondSelection);
    assert!(!session
        .take_events()
        .iter()
        .any(|e| matches!(e, GameEvent::PairMatched(_, _) | GameEvent::PairMismatched(_, _))));

    // Select index2 (A): attempt 1, then the delay resolves a match.
    session.select_token(A1);
    assert!(session
        .take_events()
        .contains(&GameEvent::AttemptRecorded(1)));

    session.tick(CHECK_DELAY_MS);
    let events = session.take_events();
    assert!(events.contains(&GameEvent::PairMatched(A0, A1)));
    assert!(!session.board().is_cleared());

    // Second pair clears the board; no best was recorded, so it's a new best.
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS);

    let events = session.take_events();
    assert!(events.contains(&GameEvent::PairMatched(B0, B1)));
    assert!(events.contains(&GameEvent::RoundWon {
        elapsed_ms: session.elapsed_ms(),
        new_best: true,
    }));
    assert!(session.board().is_cleared());
}

#[test]
fn scenario_b_mismatch_flips_back() {
    let mut session = started(MemoryScoreStore::new());

    session.select_token(A0);
    session.select_token(B0);
    session.take_events();
    session.tick(CHECK_DELAY_MS);

    let events = session.take_events();
    assert!(events.contains(&GameEvent::PairMismatched(A0, B0)));

    let first = session.board().token(A0).unwrap();
    let second = session.board().token(B0).unwrap();
    assert!(!first.is_revealed() && !first.is_removed());
    assert!(!second.is_revealed() && !second.is_removed());
    assert_eq!(session.attempts(), 1);
}

#[test]
fn scenario_c_slower_round_is_not_a_new_best() {
    let mut session = started(MemoryScoreStore::with_best(10_000));

    session.tick(8_000);
    session.select_token(A0);
    session.select_token(A1);
    session.tick(CHECK_DELAY_MS); // elapsed now 10s
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS); // elapsed now 12s

    assert_eq!(session.elapsed_ms(), 12_000);
    assert!(session.take_events().contains(&GameEvent::RoundWon {
        elapsed_ms: 12_000,
        new_best: false,
    }));
    assert_eq!(session.best_time_ms(), Some(10_000));
}

#[test]
fn scenario_d_selection_during_checking_is_ignored() {
    let mut session = started(MemoryScoreStore::new());

    session.select_token(A0);
    session.select_token(B0);
    session.take_events();
    assert_eq!(session.phase(), Phase::Checking);

    session.select_token(A1);
    assert!(session.take_events().is_empty());
    assert_eq!(session.first_selection(), Some(A0));
    assert_eq!(session.second_selection(), Some(B0));
}

#[test]
fn store_receives_exactly_the_new_best() {
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingStore(Rc<RefCell<Vec<u32>>>);
    impl ScoreStore for RecordingStore {
        fn load(&mut self) -> Option<u32> {
            None
        }
        fn save(&mut self, best_ms: u32) -> std::io::Result<()> {
            self.0.borrow_mut().push(best_ms);
            Ok(())
        }
    }

    let saves = Rc::new(RefCell::new(Vec::new()));
    let mut session = GameSession::new(two_pair_board(), RecordingStore(Rc::clone(&saves)));
    session.start_round();
    session.tick(500);
    session.select_token(A0);
    session.select_token(A1);
    session.tick(CHECK_DELAY_MS);
    session.select_token(B0);
    session.select_token(B1);
    session.tick(CHECK_DELAY_MS);

    assert_eq!(session.phase(), Phase::Ended);
    // One save per round end, carrying the winning elapsed time.
    assert_eq!(*saves.borrow(), vec![session.elapsed_ms()]);
}
