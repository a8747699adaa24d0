use crate::core::{BitBoard, BoardSize, Colour, MoveType, PieceType};

/******************************************\
|==========================================|
|               Movement Set               |
|==========================================|
\******************************************/

/// # Movement Set
///
/// Precomputed destination-square boards for one piece type and colour on one
/// board size: one [`BitBoard`] per origin square, generated once and read-only
/// afterwards.
///
/// The per-square boards live in a single contiguous word arena indexed by
/// flat square number rather than one heap allocation per square, which keeps
/// table generation cache-friendly on large boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementSet {
    size: BoardSize,
    move_type: MoveType,
    words_per_square: usize,
    words: Box<[u64]>,
}

impl MovementSet {
    /// Creates an empty set. Useful with [`set_square`](Self::set_square) to
    /// assemble `Custom` movement tables square by square.
    pub fn new(size: BoardSize, move_type: MoveType) -> Self {
        let words_per_square = size.word_count();
        MovementSet {
            size,
            move_type,
            words_per_square,
            words: vec![0; size.flat_size() * words_per_square].into_boxed_slice(),
        }
    }

    /// Generates the full movement table for a piece type and colour,
    /// dispatching to leap or slide generation by the piece's geometry.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{BoardSize, Colour, PieceType};
    /// use tabula::movegen::MovementSet;
    ///
    /// let knights = MovementSet::generate(BoardSize::STANDARD, PieceType::Knight, Colour::White);
    /// assert_eq!(knights.get(0).count_bits(), 2); // corner knight
    /// ```
    pub fn generate(size: BoardSize, piece_type: PieceType, colour: Colour) -> Self {
        let move_type = piece_type.move_type();
        let mut set = MovementSet::new(size, move_type);

        for square in 0..size.flat_size() {
            let board = match move_type {
                MoveType::Leap => leap_attacks(size, square, piece_type.leap_offsets(colour)),
                MoveType::Slide => {
                    ray_attacks(size, square, piece_type.slide_directions(), &BitBoard::new(size))
                }
                MoveType::None | MoveType::Custom => unreachable!(),
            };
            set.set_square(square, &board);
        }

        set
    }

    /// Returns the board geometry of the set.
    #[inline]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns how the set was generated.
    #[inline]
    pub const fn move_type(&self) -> MoveType {
        self.move_type
    }

    /// Returns the destination board for one origin square.
    ///
    /// # Panics
    /// Panics if `square` is out of range.
    pub fn get(&self, square: usize) -> BitBoard {
        assert!(square < self.size.flat_size(), "Square index out of range");
        BitBoard::from_words(self.size, self.slot(square))
    }

    /// Iterates over the destination boards in flat square order.
    pub fn iter(&self) -> impl Iterator<Item = BitBoard> + '_ {
        (0..self.size.flat_size()).map(|square| self.get(square))
    }

    /// Assigns the destination board for one origin square.
    ///
    /// # Panics
    /// Panics if `square` is out of range or `board` has a different size.
    pub fn set_square(&mut self, square: usize, board: &BitBoard) {
        assert!(square < self.size.flat_size(), "Square index out of range");
        assert!(
            board.size() == self.size,
            "MovementSet size mismatch: {} vs {}",
            board.size(),
            self.size
        );

        let start = square * self.words_per_square;
        self.words[start..start + self.words_per_square].copy_from_slice(board.words());
    }

    fn slot(&self, square: usize) -> &[u64] {
        let start = square * self.words_per_square;
        &self.words[start..start + self.words_per_square]
    }
}

/******************************************\
|==========================================|
|            Attack Generation             |
|==========================================|
\******************************************/

/// Builds the leap destination board for one origin square.
///
/// Each offset is applied once with coordinate arithmetic, so a target past
/// any board edge is simply skipped and horizontal offsets can never wrap to
/// the far side of an adjacent rank.
fn leap_attacks(size: BoardSize, square: usize, offsets: &[(i16, i16)]) -> BitBoard {
    let mut board = BitBoard::new(size);
    let (x, y) = size.coords_of(square);

    for (dx, dy) in offsets {
        let tx = x as i16 + dx;
        let ty = y as i16 + dy;
        if size.contains(tx, ty) {
            board.set(size.index_of(tx as usize, ty as usize));
        }
    }

    board
}

/// Builds a slider destination board for one origin square, walking each
/// direction until the board edge or the square after a blocker.
///
/// Every visited square is set, including a blocker's square and the edge
/// square; the attack/occupancy split is the caller's concern. With an empty
/// `occupancy` this yields the full ray set used for movement tables.
pub(crate) fn ray_attacks(
    size: BoardSize,
    square: usize,
    directions: &[(i16, i16)],
    occupancy: &BitBoard,
) -> BitBoard {
    let mut board = BitBoard::new(size);
    let (x, y) = size.coords_of(square);

    for (dx, dy) in directions {
        let mut tx = x as i16 + dx;
        let mut ty = y as i16 + dy;

        while size.contains(tx, ty) {
            let target = size.index_of(tx as usize, ty as usize);
            board.set(target);
            if occupancy.is_set(target) {
                break;
            }
            tx += dx;
            ty += dy;
        }
    }

    board
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> BoardSize {
        BoardSize::STANDARD
    }

    fn flat(x: usize, y: usize) -> usize {
        BoardSize::STANDARD.index_of(x, y)
    }

    #[test]
    fn test_all_boards_share_the_set_size() {
        let size = BoardSize::new(9, 7).unwrap();
        let set = MovementSet::generate(size, PieceType::Queen, Colour::White);
        assert_eq!(set.size(), size);
        assert_eq!(set.iter().count(), size.flat_size());
        for board in set.iter() {
            assert_eq!(board.size(), size);
        }
    }

    #[test]
    fn test_knight_corner_does_not_wrap() {
        let knights = MovementSet::generate(standard(), PieceType::Knight, Colour::White);
        let corner = knights.get(flat(0, 0));

        assert_eq!(corner.count_bits(), 2);
        assert!(corner.is_set_at(1, 2));
        assert!(corner.is_set_at(2, 1));

        // A wrapped offset would land on file 6 or 7 of a nearby rank
        for rank in 0..3 {
            assert!(!corner.is_set_at(6, rank));
            assert!(!corner.is_set_at(7, rank));
        }
    }

    #[test]
    fn test_knight_centre_has_all_eight_leaps() {
        let knights = MovementSet::generate(standard(), PieceType::Knight, Colour::Black);
        assert_eq!(knights.get(flat(4, 4)).count_bits(), 8);
    }

    #[test]
    fn test_king_edge_counts() {
        let kings = MovementSet::generate(standard(), PieceType::King, Colour::White);
        assert_eq!(kings.get(flat(0, 0)).count_bits(), 3);
        assert_eq!(kings.get(flat(4, 0)).count_bits(), 5);
        assert_eq!(kings.get(flat(4, 4)).count_bits(), 8);
    }

    #[test]
    fn test_pawn_captures_by_colour() {
        let white = MovementSet::generate(standard(), PieceType::Pawn, Colour::White);
        let black = MovementSet::generate(standard(), PieceType::Pawn, Colour::Black);

        let from = flat(4, 4);
        assert!(white.get(from).is_set_at(3, 5));
        assert!(white.get(from).is_set_at(5, 5));
        assert!(black.get(from).is_set_at(3, 3));
        assert!(black.get(from).is_set_at(5, 3));

        // Edge pawn keeps only the inward capture
        assert_eq!(white.get(flat(0, 4)).count_bits(), 1);
        assert!(white.get(flat(0, 4)).is_set_at(1, 5));
    }

    #[test]
    fn test_rook_corner_rays() {
        let rooks = MovementSet::generate(standard(), PieceType::Rook, Colour::White);
        let corner = rooks.get(flat(0, 0));

        assert_eq!(corner.count_bits(), 14);
        for i in 1..8 {
            assert!(corner.is_set_at(i, 0), "rank ray missing ({i}, 0)");
            assert!(corner.is_set_at(0, i), "file ray missing (0, {i})");
        }
        assert!(!corner.is_set_at(0, 0));
        assert!(!corner.is_set_at(1, 1));
    }

    #[test]
    fn test_bishop_centre_rays() {
        let bishops = MovementSet::generate(standard(), PieceType::Bishop, Colour::White);
        let centre = bishops.get(flat(3, 3));

        assert_eq!(centre.count_bits(), 13);
        assert!(centre.is_set_at(0, 0));
        assert!(centre.is_set_at(7, 7));
        assert!(centre.is_set_at(0, 6));
        assert!(centre.is_set_at(6, 0));
        assert!(!centre.is_set_at(3, 4));
    }

    #[test]
    fn test_queen_is_rook_or_bishop() {
        let queens = MovementSet::generate(standard(), PieceType::Queen, Colour::White);
        let rooks = MovementSet::generate(standard(), PieceType::Rook, Colour::White);
        let bishops = MovementSet::generate(standard(), PieceType::Bishop, Colour::White);

        for square in 0..standard().flat_size() {
            assert_eq!(queens.get(square), rooks.get(square) | bishops.get(square));
        }
    }

    #[test]
    fn test_move_type_tags() {
        assert_eq!(
            MovementSet::generate(standard(), PieceType::King, Colour::White).move_type(),
            MoveType::Leap
        );
        assert_eq!(
            MovementSet::generate(standard(), PieceType::Rook, Colour::White).move_type(),
            MoveType::Slide
        );
        assert_eq!(
            MovementSet::new(standard(), MoveType::Custom).move_type(),
            MoveType::Custom
        );
    }

    #[test]
    fn test_custom_set_square_round_trip() {
        let size = BoardSize::new(9, 9).unwrap();
        let mut set = MovementSet::new(size, MoveType::Custom);

        let mut board = BitBoard::new(size);
        board.set(80);
        board.set(3);
        set.set_square(40, &board);

        assert_eq!(set.get(40), board);
        assert!(set.get(39).is_empty());
        assert!(set.get(41).is_empty());
    }

    #[test]
    #[should_panic(expected = "MovementSet size mismatch")]
    fn test_set_square_size_mismatch_panics() {
        let mut set = MovementSet::new(standard(), MoveType::Custom);
        let board = BitBoard::new(BoardSize::new(9, 9).unwrap());
        set.set_square(0, &board);
    }

    #[test]
    #[should_panic(expected = "Square index out of range")]
    fn test_set_square_out_of_range_panics() {
        let mut set = MovementSet::new(standard(), MoveType::Custom);
        let board = BitBoard::new(standard());
        set.set_square(64, &board);
    }

    #[test]
    fn test_ray_attacks_stop_at_blockers() {
        let size = standard();
        let mut occupancy = BitBoard::new(size);
        occupancy.set(flat(3, 0));

        let rays = ray_attacks(size, flat(0, 0), PieceType::Rook.slide_directions(), &occupancy);

        // Blocker square included, squares beyond it excluded
        assert!(rays.is_set_at(3, 0));
        assert!(!rays.is_set_at(4, 0));
        // Unblocked file ray still reaches the edge
        assert!(rays.is_set_at(0, 7));
    }

    #[test]
    fn test_slide_on_single_rank_board() {
        // Pure horizontal movement: a 1-high board leaves only the rank rays
        let size = BoardSize::new(8, 1).unwrap();
        let rooks = MovementSet::generate(size, PieceType::Rook, Colour::White);
        assert_eq!(rooks.get(3).count_bits(), 7);

        let bishops = MovementSet::generate(size, PieceType::Bishop, Colour::White);
        assert!(bishops.get(3).is_empty());
    }
}
