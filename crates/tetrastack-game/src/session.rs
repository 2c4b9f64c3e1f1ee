//! A running piece-manager session.

use tetrastack_core::{Piece, PieceQueue, ReserveStack};
use tetrastack_generator::PieceFactory;

use crate::{
    error::GameError,
    swap::{swap_block_three, swap_front_top},
};

/// Result of playing the front piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The piece that was played.
    pub played: Piece,
    /// The piece generated to top the queue back up, if the queue had room.
    pub replacement: Option<Piece>,
}

/// Result of moving the front piece onto the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveOutcome {
    /// The piece that was reserved.
    pub reserved: Piece,
    /// The piece generated to top the queue back up, if the queue had room.
    pub replacement: Option<Piece>,
}

/// A piece-manager session: the upcoming-piece queue, the reserve stack, and
/// the factory that feeds them.
///
/// The queue starts filled to capacity. Every operation that removes a piece
/// from the queue tops it back up from the factory; using a reserved piece
/// does not, because the queue was not touched.
///
/// # Examples
///
/// ```
/// use tetrastack_game::Session;
/// use tetrastack_generator::PieceFactory;
///
/// let mut session = Session::new(PieceFactory::from_seed(42));
/// assert!(session.queue().is_full());
///
/// let outcome = session.play().unwrap();
/// assert_eq!(outcome.played.id().value(), 0);
/// // The queue was refilled straight away.
/// assert!(session.queue().is_full());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    queue: PieceQueue,
    reserve: ReserveStack,
    factory: PieceFactory,
}

impl Session {
    /// Creates a session with a freshly filled queue and an empty reserve.
    #[must_use]
    pub fn new(mut factory: PieceFactory) -> Self {
        let mut queue = PieceQueue::new();
        factory.refill(&mut queue);
        Self {
            queue,
            reserve: ReserveStack::new(),
            factory,
        }
    }

    /// The upcoming-piece queue, front first.
    #[must_use]
    pub const fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// The reserve stack, top first.
    #[must_use]
    pub const fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// The seed the session's factory was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.factory.seed()
    }

    /// Plays the piece at the front of the queue.
    ///
    /// The queue is topped back up afterwards; the outcome reports the new
    /// piece when one was generated.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::QueueEmpty`] if there is nothing to play.
    pub fn play(&mut self) -> Result<PlayOutcome, GameError> {
        let played = self.queue.dequeue().ok_or(GameError::QueueEmpty)?;
        let replacement = self.factory.refill(&mut self.queue).into_iter().next();
        Ok(PlayOutcome {
            played,
            replacement,
        })
    }

    /// Moves the front piece of the queue onto the reserve stack.
    ///
    /// The reserve is checked for room before the queue is touched, so a full
    /// reserve never costs a queued piece. The queue is topped back up after
    /// the move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ReserveFull`] if the reserve is at capacity, or
    /// [`GameError::QueueEmpty`] if there is nothing to reserve.
    pub fn reserve_front(&mut self) -> Result<ReserveOutcome, GameError> {
        if self.reserve.is_full() {
            return Err(GameError::ReserveFull);
        }
        let reserved = self.queue.dequeue().ok_or(GameError::QueueEmpty)?;
        self.reserve
            .push(reserved)
            .map_err(|_| GameError::ReserveFull)?;
        let replacement = self.factory.refill(&mut self.queue).into_iter().next();
        Ok(ReserveOutcome {
            reserved,
            replacement,
        })
    }

    /// Uses (pops) the piece on top of the reserve stack.
    ///
    /// The queue is not refilled: it was not touched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ReserveEmpty`] if nothing is reserved.
    pub fn use_reserved(&mut self) -> Result<Piece, GameError> {
        self.reserve.pop().ok_or(GameError::ReserveEmpty)
    }

    /// Exchanges the queue's front piece with the reserve's top piece.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Swap`] if either container is empty.
    pub fn swap_current(&mut self) -> Result<(), GameError> {
        swap_front_top(&mut self.queue, &mut self.reserve)?;
        Ok(())
    }

    /// Exchanges the queue's front three pieces with the reserve's three.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Swap`] if either side holds fewer than three
    /// pieces.
    pub fn swap_block(&mut self) -> Result<(), GameError> {
        swap_block_three(&mut self.queue, &mut self.reserve)?;
        Ok(())
    }
}
