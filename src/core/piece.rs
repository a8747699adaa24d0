/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|                Move Type                 |
|==========================================|
\******************************************/

/// # Move Type representation
///
/// Tags how a movement set was generated: `Leap` for fixed-offset pieces,
/// `Slide` for ray pieces, `Custom` for sets assembled square by square,
/// and `None` for an empty set.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveType {
    #[default]
    None, Leap, Slide, Custom,
}

impl MoveType {
    /// Number of elements in the MoveType enum
    pub const NUM: usize = 4;
}

crate::impl_from_to_primitive!(MoveType);

/******************************************\
|==========================================|
|              Move Geometry               |
|==========================================|
\******************************************/

/// Knight leap offsets, two files and one rank (or one file and two ranks) away.
const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King leap offsets, the eight neighbouring squares.
const KING_OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pawn capture offsets, forward-diagonal relative to the side to move.
const WHITE_PAWN_OFFSETS: [(i16, i16); 2] = [(-1, 1), (1, 1)];
const BLACK_PAWN_OFFSETS: [(i16, i16); 2] = [(-1, -1), (1, -1)];

/// Slider direction vectors, repeated until the board edge.
const BISHOP_DIRECTIONS: [(i16, i16); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRECTIONS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const QUEEN_DIRECTIONS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl PieceType {
    /// Returns how this piece type moves.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{MoveType, PieceType};
    ///
    /// assert_eq!(PieceType::Knight.move_type(), MoveType::Leap);
    /// assert_eq!(PieceType::Queen.move_type(), MoveType::Slide);
    /// ```
    pub const fn move_type(&self) -> MoveType {
        match self {
            PieceType::Pawn | PieceType::Knight | PieceType::King => MoveType::Leap,
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => MoveType::Slide,
        }
    }

    /// Returns the `(dx, dy)` offset list for a leaper.
    /// Pawn captures depend on the colour; knight and king do not.
    ///
    /// # Panics
    /// Panics if called on a slider.
    pub const fn leap_offsets(&self, colour: Colour) -> &'static [(i16, i16)] {
        match self {
            PieceType::Knight => &KNIGHT_OFFSETS,
            PieceType::King => &KING_OFFSETS,
            PieceType::Pawn => match colour {
                Colour::White => &WHITE_PAWN_OFFSETS,
                Colour::Black => &BLACK_PAWN_OFFSETS,
            },
            _ => panic!("leap_offsets called on a sliding piece"),
        }
    }

    /// Returns the `(dx, dy)` direction list for a slider.
    ///
    /// # Panics
    /// Panics if called on a leaper.
    pub const fn slide_directions(&self) -> &'static [(i16, i16)] {
        match self {
            PieceType::Bishop => &BISHOP_DIRECTIONS,
            PieceType::Rook => &ROOK_DIRECTIONS,
            PieceType::Queen => &QUEEN_DIRECTIONS,
            _ => panic!("slide_directions called on a leaping piece"),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// String to convert from piece type to its string representation
const PIECE_STR: &str = "pnbrqk";

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_STR.chars().nth(self.index()).unwrap();
        write!(f, "{}", piece_char)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
