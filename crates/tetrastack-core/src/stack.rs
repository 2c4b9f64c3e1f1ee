//! Bounded LIFO stack of reserved pieces.

use std::fmt::{self, Display};

use crate::piece::Piece;

/// A fixed-capacity LIFO stack of pieces.
///
/// Holds at most [`ReserveStack::CAPACITY`] pieces; the top is the
/// most-recently-pushed one. Pushing onto a full stack and popping from an
/// empty stack both fail without touching the stack's state.
///
/// # Examples
///
/// ```
/// use tetrastack_core::{Piece, PieceId, PieceKind, ReserveStack};
///
/// let mut reserve = ReserveStack::new();
/// reserve
///     .push(Piece::new(PieceKind::L, PieceId::new(10)))
///     .unwrap();
/// reserve
///     .push(Piece::new(PieceKind::O, PieceId::new(11)))
///     .unwrap();
///
/// assert_eq!(reserve.top().map(|p| p.id().value()), Some(11));
/// assert_eq!(reserve.pop().map(|p| p.id().value()), Some(11));
/// assert_eq!(reserve.pop().map(|p| p.id().value()), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; Self::CAPACITY],
    len: usize,
}

impl ReserveStack {
    /// Number of pieces the stack can hold.
    pub const CAPACITY: usize = 3;

    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; Self::CAPACITY],
            len: 0,
        }
    }

    /// Returns the number of reserved pieces.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is reserved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the stack is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    /// Pushes a piece on top of the stack.
    ///
    /// # Errors
    ///
    /// Hands the piece back as `Err` if the stack is full; the stack is left
    /// unchanged.
    pub fn push(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top piece, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Piece> {
        let piece = self.slots[self.len.checked_sub(1)?].take()?;
        self.len -= 1;
        Some(piece)
    }

    /// Returns the top piece without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Piece> {
        self.peek_from_top(0)
    }

    /// Returns the piece `offset` positions below the top.
    ///
    /// Returns `None` when `offset >= len`.
    #[must_use]
    pub fn peek_from_top(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.len - 1 - offset].as_ref()
    }

    /// Mutable access to the top piece (swap support).
    #[must_use]
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.peek_from_top_mut(0)
    }

    /// Mutable access to the piece `offset` positions below the top (swap
    /// support). The slot stays occupied; only the piece value is exchanged.
    #[must_use]
    pub fn peek_from_top_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.len - 1 - offset].as_mut()
    }

    /// Iterates over the reserved pieces from top to base.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(|offset| self.peek_from_top(offset))
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ReserveStack {
    /// Renders the pieces top to base, or an `(empty)` sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, piece) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(piece, f)?;
        }
        Ok(())
    }
}
