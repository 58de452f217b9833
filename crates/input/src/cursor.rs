//! Board cursor - grid navigation over token cells.
//!
//! There is no pointing device in a terminal, so the player steers a
//! highlighted cell instead. The cursor knows the grid shape
//! only, not the board contents: moving onto a removed cell is allowed (the
//! session ignores selecting it), which keeps navigation predictable.

use crate::types::{TokenId, UiAction};

/// A clamped cursor over a `cols x rows` cell grid laid out row-major.
///
/// The last row may be partially filled; horizontal moves clamp to the cells
/// that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    cols: usize,
    len: usize,
}

impl Cursor {
    /// Create a cursor at cell 0 for `len` cells arranged in `cols` columns.
    pub fn new(cols: usize, len: usize) -> Self {
        Self {
            index: 0,
            cols: cols.max(1),
            len: len.max(1),
        }
    }

    /// Current cell as a token handle.
    pub fn token(&self) -> TokenId {
        TokenId(self.index)
    }

    /// Current (column, row) position.
    pub fn position(&self) -> (usize, usize) {
        (self.index % self.cols, self.index / self.cols)
    }

    /// Apply a cursor-movement action; other actions are ignored.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::CursorLeft => self.step(-1, 0),
            UiAction::CursorRight => self.step(1, 0),
            UiAction::CursorUp => self.step(0, -1),
            UiAction::CursorDown => self.step(0, 1),
            UiAction::Select | UiAction::Restart => {}
        }
    }

    fn step(&mut self, dx: isize, dy: isize) {
        let (col, row) = self.position();
        let rows = self.len.div_ceil(self.cols);

        let new_col = col.saturating_add_signed(dx).min(self.cols - 1);
        let new_row = row.saturating_add_signed(dy).min(rows - 1);

        // Clamp into the partially-filled last row.
        let candidate = new_row * self.cols + new_col;
        self.index = candidate.min(self.len - 1);
    }
}
