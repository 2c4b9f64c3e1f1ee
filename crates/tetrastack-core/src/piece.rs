//! Piece representation.

use std::fmt::{self, Display};

/// The shape of a piece, one of the fixed four-symbol alphabet.
///
/// This enum provides a type-safe representation of the piece alphabet,
/// preventing invalid shape tags at compile time.
///
/// # Examples
///
/// ```
/// use tetrastack_core::PieceKind;
///
/// let kind = PieceKind::T;
/// assert_eq!(kind.letter(), 'T');
///
/// // Iterate over the whole alphabet
/// for kind in PieceKind::ALL {
///     println!("{kind}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    /// The I piece.
    I,
    /// The O piece.
    O,
    /// The T piece.
    T,
    /// The L piece.
    L,
}

impl PieceKind {
    /// Array containing every piece kind.
    ///
    /// Useful for iterating over the alphabet or drawing a kind at random.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrastack_core::PieceKind;
    ///
    /// assert_eq!(PieceKind::ALL.len(), 4);
    /// assert_eq!(PieceKind::ALL[0], PieceKind::I);
    /// ```
    pub const ALL: [Self; 4] = [Self::I, Self::O, Self::T, Self::L];

    /// Returns the display letter of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrastack_core::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.letter(), 'I');
    /// assert_eq!(PieceKind::L.letter(), 'L');
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::I => 'I',
            Self::O => 'O',
            Self::T => 'T',
            Self::L => 'L',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.letter(), f)
    }
}

/// Unique identifier of a piece.
///
/// Ids are assigned at creation by the piece factory, increase monotonically,
/// and are never reused for the lifetime of a session.
///
/// # Examples
///
/// ```
/// use tetrastack_core::PieceId;
///
/// let id = PieceId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u32);

impl PieceId {
    /// Creates an id from its numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A single piece: a shape tag plus a unique id.
///
/// Pieces are plain `Copy` values and are never mutated after creation; they
/// move between the queue and the reserve stack by value.
///
/// # Examples
///
/// ```
/// use tetrastack_core::{Piece, PieceId, PieceKind};
///
/// let piece = Piece::new(PieceKind::O, PieceId::new(3));
/// assert_eq!(piece.kind(), PieceKind::O);
/// assert_eq!(piece.id(), PieceId::new(3));
/// assert_eq!(piece.to_string(), "[O 3]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: PieceId,
}

impl Piece {
    /// Creates a piece from a kind and an id.
    #[must_use]
    pub const fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }

    /// Returns the shape tag of this piece.
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Returns the unique id of this piece.
    #[must_use]
    pub const fn id(self) -> PieceId {
        self.id
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}
