//! Game session logic for the Tetris Stack piece manager.
//!
//! This crate ties the core containers and the piece factory together:
//!
//! - [`Session`] owns the upcoming-piece queue, the reserve stack, and the
//!   factory, and exposes the player-facing operations (play, reserve, use a
//!   reserved piece, swap).
//! - [`swap`] implements the two exchange operations between queue and stack.
//! - [`GameError`] and [`SwapError`] are the user-facing error taxonomy; every
//!   error leaves both containers exactly as they were.

pub mod error;
pub mod session;
pub mod swap;

pub use self::{
    error::{GameError, SwapError},
    session::{PlayOutcome, ReserveOutcome, Session},
};
