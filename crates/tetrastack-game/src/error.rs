//! Error types for session and swap operations.

/// A swap operation's preconditions were not met.
///
/// Both variants report how many pieces the operation needed on that side and
/// how many were actually there. A failed swap never mutates either container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SwapError {
    /// The queue holds fewer pieces than the swap needs.
    #[display("the queue holds {available} piece(s) but the swap needs {needed}")]
    NotEnoughQueued {
        /// Pieces the swap needs on the queue side.
        needed: usize,
        /// Pieces actually queued.
        available: usize,
    },
    /// The reserve stack holds fewer pieces than the swap needs.
    #[display("the reserve holds {available} piece(s) but the swap needs {needed}")]
    NotEnoughReserved {
        /// Pieces the swap needs on the reserve side.
        needed: usize,
        /// Pieces actually reserved.
        available: usize,
    },
}

/// A player action could not be carried out.
///
/// All of these are recoverable: they are reported to the player and the
/// session continues unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The queue has no piece to play or reserve.
    #[display("no pieces in the queue")]
    QueueEmpty,
    /// The reserve stack has no piece to use.
    #[display("no reserved pieces to use")]
    ReserveEmpty,
    /// The reserve stack is already at capacity.
    #[display("the reserve stack is full")]
    ReserveFull,
    /// A swap operation failed its precondition check.
    #[display("{_0}")]
    Swap(#[from] SwapError),
}
