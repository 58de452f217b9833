//! GameView: maps session state into styled text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_pairs_core::{GameSession, ScoreStore, Token};
use tui_pairs_types::{Phase, TokenId};

/// Semantic styling for a span; the renderer picks the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Normal,
    /// A face-down card.
    Card,
    /// A face-up card.
    Revealed,
    /// The cell under the cursor.
    Cursor,
    /// HUD labels and values.
    Hud,
    /// End-of-round banner.
    Banner,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Maps a session into rows of styled spans.
pub struct GameView {
    /// Grid columns used to lay the board out.
    cols: usize,
}

impl GameView {
    pub fn new(cols: usize) -> Self {
        Self { cols: cols.max(1) }
    }

    /// Render the whole screen for the given session and cursor cell.
    pub fn render<S: ScoreStore>(
        &self,
        session: &GameSession<S>,
        cursor: TokenId,
    ) -> Vec<Vec<Span>> {
        let mut rows = Vec::new();

        rows.push(vec![Span::new("  tui-pairs", SpanKind::Banner)]);
        rows.push(Vec::new());

        for chunk_start in (0..session.board().len()).step_by(self.cols) {
            let mut row = vec![Span::new("  ", SpanKind::Normal)];
            let chunk_end = (chunk_start + self.cols).min(session.board().len());
            for index in chunk_start..chunk_end {
                let id = TokenId(index);
                let token = session.board().token(id);
                row.push(self.cell_span(token, id == cursor));
                row.push(Span::new(" ", SpanKind::Normal));
            }
            rows.push(row);
        }

        rows.push(Vec::new());
        rows.push(self.hud_row(session));
        rows.push(self.status_row(session));

        rows
    }

    fn cell_span(&self, token: Option<&Token>, under_cursor: bool) -> Span {
        let Some(token) = token else {
            return Span::new("     ", SpanKind::Normal);
        };

        let (text, kind) = if token.is_removed() {
            ("     ".to_string(), SpanKind::Normal)
        } else if token.is_revealed() {
            (format!("[ {} ]", token.face().glyph()), SpanKind::Revealed)
        } else {
            ("[ ? ]".to_string(), SpanKind::Card)
        };

        if under_cursor {
            Span::new(text, SpanKind::Cursor)
        } else {
            Span::new(text, kind)
        }
    }

    fn hud_row<S: ScoreStore>(&self, session: &GameSession<S>) -> Vec<Span> {
        let best = match session.best_time_ms() {
            Some(ms) => format!("{} s", ms / 1000),
            None => "--".to_string(),
        };
        vec![Span::new(
            format!(
                "  Attempts: {}   Time: {} s   Best Time: {}",
                session.attempts(),
                session.elapsed_ms() / 1000,
                best
            ),
            SpanKind::Hud,
        )]
    }

    fn status_row<S: ScoreStore>(&self, session: &GameSession<S>) -> Vec<Span> {
        match session.phase() {
            Phase::Idle => vec![Span::new(
                "  press space to start playing",
                SpanKind::Hud,
            )],
            Phase::Playing | Phase::AwaitingSecondSelection => vec![Span::new(
                "  arrows move, space flips, r restarts, q quits",
                SpanKind::Hud,
            )],
            Phase::Checking => vec![Span::new("  checking...", SpanKind::Hud)],
            Phase::Ended => {
                let banner = if session.last_round_new_best() == Some(true) {
                    "  Congratulations! New Best Time!"
                } else {
                    "  Good Job!"
                };
                vec![
                    Span::new(banner, SpanKind::Banner),
                    Span::new(
                        format!("   Final Time: {} s (r to restart)", session.elapsed_ms() / 1000),
                        SpanKind::Hud,
                    ),
                ]
            }
        }
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pairs_core::{Board, GameSession, MemoryScoreStore};
    use tui_pairs_types::FaceId;

    fn session() -> GameSession<MemoryScoreStore> {
        let faces = vec![FaceId(0), FaceId(1), FaceId(0), FaceId(1)];
        let mut session = GameSession::new(Board::new(faces).unwrap(), MemoryScoreStore::new());
        session.start_round();
        session
    }

    fn flat_text(rows: &[Vec<Span>]) -> String {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn hidden_board_renders_question_marks() {
        let view = GameView::new(2);
        let rows = view.render(&session(), TokenId(0));
        let text = flat_text(&rows);

        assert_eq!(text.matches("[ ? ]").count(), 4);
        assert!(text.contains("Attempts: 0"));
        assert!(text.contains("Best Time: --"));
    }

    #[test]
    fn revealed_token_shows_its_glyph() {
        let mut session = session();
        session.select_token(TokenId(0));

        let view = GameView::new(2);
        let text = flat_text(&view.render(&session, TokenId(1)));

        assert!(text.contains("[ A ]"));
        assert_eq!(text.matches("[ ? ]").count(), 3);
    }

    #[test]
    fn cursor_cell_is_styled() {
        let view = GameView::new(2);
        let rows = view.render(&session(), TokenId(3));

        let cursor_spans: Vec<&Span> = rows
            .iter()
            .flatten()
            .filter(|span| span.kind == SpanKind::Cursor)
            .collect();
        assert_eq!(cursor_spans.len(), 1);
    }

    #[test]
    fn removed_tokens_leave_blank_cells() {
        let mut session = session();
        session.select_token(TokenId(0));
        session.select_token(TokenId(2));
        session.tick(2000);

        let view = GameView::new(2);
        let text = flat_text(&view.render(&session, TokenId(1)));
        assert_eq!(text.matches("[ ? ]").count(), 2);
    }

    #[test]
    fn win_banner_reports_new_best() {
        let faces = vec![FaceId(0), FaceId(0)];
        let mut session = GameSession::new(Board::new(faces).unwrap(), MemoryScoreStore::new());
        session.start_round();
        session.tick(1000);
        session.select_token(TokenId(0));
        session.select_token(TokenId(1));
        session.tick(2000);

        let view = GameView::default();
        let text = flat_text(&view.render(&session, TokenId(0)));
        assert!(text.contains("New Best Time!"));
        assert!(text.contains("Final Time: 3 s"));
    }

    #[test]
    fn win_banner_without_new_best() {
        let faces = vec![FaceId(0), FaceId(0)];
        let mut session =
            GameSession::new(Board::new(faces).unwrap(), MemoryScoreStore::with_best(500));
        session.start_round();
        session.tick(1000);
        session.select_token(TokenId(0));
        session.select_token(TokenId(1));
        session.tick(2000);

        let view = GameView::default();
        let text = flat_text(&view.render(&session, TokenId(0)));
        assert!(text.contains("Good Job!"));
    }
}
