//! Token module - a single board cell
//!
//! A token carries a face identity plus two flags: `revealed` (face currently
//! shown) and `removed` (permanently cleared after a successful pair check).
//! Tokens never change identity after creation; removal replaces destroying
//! the object.

use tui_pairs_types::FaceId;

/// A board cell holding a face identity and its visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    face: FaceId,
    revealed: bool,
    removed: bool,
}

impl Token {
    /// Create a hidden, in-play token with the given face.
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            revealed: false,
            removed: false,
        }
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Turn the face up. Idempotent; silently ignored once removed.
    pub fn reveal(&mut self) {
        if self.removed {
            return;
        }
        self.revealed = true;
    }

    /// Turn the face back down (mismatch resolution).
    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Whether the two tokens carry the same face.
    ///
    /// A token compared against itself reports true; the session layer is
    /// responsible for never pairing a token with itself.
    pub fn matches(&self, other: &Token) -> bool {
        self.face == other.face
    }

    /// Permanently clear the token. Irreversible; also hides the face.
    pub fn remove(&mut self) {
        self.removed = true;
        self.revealed = false;
    }

    /// Return the token to its freshly-dealt state (round restart).
    pub(crate) fn reset(&mut self) {
        self.revealed = false;
        self.removed = false;
    }
}
