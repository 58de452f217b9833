//! Input crate - keyboard mapping and board cursor navigation.

pub use tui_pairs_types as types;

pub mod cursor;
pub mod map;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
