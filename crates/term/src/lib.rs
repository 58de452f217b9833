//! Terminal presentation crate.
//!
//! [`GameView`] is pure (session state in, styled rows out) and unit-tested;
//! [`TerminalRenderer`] owns the raw-mode/alternate-screen terminal and
//! flushes rows with crossterm.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Span, SpanKind};
pub use renderer::TerminalRenderer;
