//! Bounded FIFO queue of upcoming pieces.

use std::fmt::{self, Display};

use crate::piece::Piece;

/// A fixed-capacity FIFO queue of pieces with wrap-around indexing.
///
/// The queue stores pieces in a ring buffer of [`PieceQueue::CAPACITY`] slots.
/// Logical position `i` (0 = front, the oldest piece) maps to storage slot
/// `(head + i) % CAPACITY`. Inserting into a full queue and removing from an
/// empty queue both fail without touching the queue's state.
///
/// # Examples
///
/// ```
/// use tetrastack_core::{Piece, PieceId, PieceKind, PieceQueue};
///
/// let mut queue = PieceQueue::new();
/// for id in 0..3 {
///     queue
///         .enqueue(Piece::new(PieceKind::I, PieceId::new(id)))
///         .unwrap();
/// }
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.dequeue().map(|p| p.id().value()), Some(0));
/// assert_eq!(queue.front().map(|p| p.id().value()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; Self::CAPACITY],
    head: usize,
    len: usize,
}

impl PieceQueue {
    /// Number of pieces the queue can hold.
    pub const CAPACITY: usize = 5;

    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; Self::CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of pieces currently queued.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no pieces.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == Self::CAPACITY
    }

    /// Appends a piece at the back of the queue.
    ///
    /// # Errors
    ///
    /// Hands the piece back as `Err` if the queue is full; the queue is left
    /// unchanged.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), Piece> {
        if self.is_full() {
            return Err(piece);
        }
        self.slots[(self.head + self.len) % Self::CAPACITY] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front piece, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        let piece = self.slots[self.head].take()?;
        self.head = (self.head + 1) % Self::CAPACITY;
        self.len -= 1;
        Some(piece)
    }

    /// Returns the front piece without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Returns the piece at logical position `offset` from the front.
    ///
    /// Returns `None` when `offset >= len`.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % Self::CAPACITY].as_ref()
    }

    /// Mutable access to the front piece (swap support).
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        self.get_mut(0)
    }

    /// Mutable access to the piece at logical position `offset` (swap
    /// support). The slot stays occupied; only the piece value is exchanged.
    #[must_use]
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % Self::CAPACITY].as_mut()
    }

    /// Iterates over the queued pieces from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(|offset| self.get(offset))
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PieceQueue {
    /// Renders the pieces front to back, or an `(empty)` sentinel.
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
