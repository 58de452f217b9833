//! Board module - the fixed token collection for one round
//!
//! The board owns an ordered `Vec<Token>` built from an externally-ordered
//! face list (shuffling is the caller's concern, see [`crate::deal`]).
//! Tokens are addressed by stable [`TokenId`] handles; removed tokens keep
//! their slot so handles never dangle.
//!
//! Construction validates the pair invariant up front: an odd token count or
//! a face appearing an odd number of times is a programmer error and fails
//! fast rather than producing an unsolvable round.

use std::collections::HashMap;

use thiserror::Error;
use tui_pairs_types::{FaceId, TokenId};

use crate::token::Token;

/// Board construction failures (precondition violations).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board requires an even token count, got {0}")]
    OddTokenCount(usize),
    #[error("face {0:?} appears {1} times, expected exactly 2")]
    UnpairedFace(FaceId, usize),
    #[error("board requires at least one pair")]
    Empty,
}

/// The full ordered set of tokens for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tokens: Vec<Token>,
}

impl Board {
    /// Build a board from an ordered face list.
    ///
    /// Every face must appear exactly twice; order is taken as-is.
    pub fn new(faces: Vec<FaceId>) -> Result<Self, BoardError> {
        if faces.is_empty() {
            return Err(BoardError::Empty);
        }
        if faces.len() % 2 != 0 {
            return Err(BoardError::OddTokenCount(faces.len()));
        }

        let mut counts: HashMap<FaceId, usize> = HashMap::new();
        for face in &faces {
            *counts.entry(*face).or_insert(0) += 1;
        }
        for (face, count) in counts {
            if count != 2 {
                return Err(BoardError::UnpairedFace(face, count));
            }
        }

        Ok(Self {
            tokens: faces.into_iter().map(Token::new).collect(),
        })
    }

    /// Number of tokens (always even).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of face pairs.
    pub fn pair_count(&self) -> usize {
        self.tokens.len() / 2
    }

    /// Look up a token by handle. Returns `None` for out-of-range handles.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.index())
    }

    /// All tokens in board order, including removed ones (for rendering).
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lazy, restartable iterator over the non-removed tokens.
    ///
    /// Each call starts a fresh pass; the presentation layer uses this to
    /// decide which cells still accept interaction.
    pub fn active_tokens(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_removed())
            .map(|(i, token)| (TokenId(i), token))
    }

    /// True iff every token has been removed.
    pub fn is_cleared(&self) -> bool {
        self.tokens.iter().all(Token::is_removed)
    }

    /// Return every token to hidden/in-play without changing the face order.
    pub fn reset(&mut self) {
        for token in &mut self.tokens {
            token.reset();
        }
    }
}
