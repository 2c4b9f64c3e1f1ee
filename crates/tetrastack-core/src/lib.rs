//! Core data structures for the Tetris Stack piece manager.
//!
//! This crate provides the fundamental value type and the two bounded
//! containers the piece manager is built on. These structures are used across
//! piece generation, game session management, and the console front end.
//!
//! # Overview
//!
//! - [`piece`]: The [`Piece`] value type, its [`PieceKind`] alphabet, and the
//!   monotonically increasing [`PieceId`].
//! - [`queue`]: [`PieceQueue`], a fixed-capacity FIFO ring buffer holding the
//!   upcoming pieces.
//! - [`stack`]: [`ReserveStack`], a fixed-capacity LIFO buffer holding the
//!   reserved pieces.
//!
//! Both containers reject inserts at capacity and removals when empty without
//! mutating their state, so any sequence of operations keeps them valid.
//!
//! # Examples
//!
//! ```
//! use tetrastack_core::{Piece, PieceId, PieceKind, PieceQueue, ReserveStack};
//!
//! let mut queue = PieceQueue::new();
//! let mut reserve = ReserveStack::new();
//!
//! queue.enqueue(Piece::new(PieceKind::I, PieceId::new(0))).unwrap();
//! queue.enqueue(Piece::new(PieceKind::T, PieceId::new(1))).unwrap();
//!
//! // Move the front of the queue onto the reserve stack.
//! let front = queue.dequeue().unwrap();
//! reserve.push(front).unwrap();
//!
//! assert_eq!(queue.len(), 1);
//! assert_eq!(reserve.top().map(|p| p.id()), Some(PieceId::new(0)));
//! ```

pub mod piece;
pub mod queue;
pub mod stack;

pub use self::{
    piece::{Piece, PieceId, PieceKind},
    queue::PieceQueue,
    stack::ReserveStack,
};
