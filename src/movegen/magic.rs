use crate::core::{BitBoard, BoardSize, MoveType, PieceType};
use crate::movegen::movement::ray_attacks;
use crate::utils::Prng;

/******************************************\
|==========================================|
|          Occupancy Enumeration           |
|==========================================|
\******************************************/

/// Maps `index` onto the set bits of `mask` to produce one blocker board.
///
/// Walking the mask's set bits in increasing flat-index order, bit `count` of
/// `index` decides whether the `count`-th mask square is occupied:
///
///     index = 0                         -> no mask square occupied
///     index = 2^mask.count_bits() - 1   -> every mask square occupied
///
/// This is a canonical bijection between `[0, 2^popcount)` and the subsets of
/// the mask, so enumerating `index` visits every blocker configuration exactly
/// once. Bits of `index` at position `>= popcount` are ignored; a mask with no
/// set bits yields the empty board for every index.
pub fn set_occupancy(mask: &BitBoard, index: usize) -> BitBoard {
    let mut occupancy = BitBoard::new(mask.size());
    let mut remaining = mask.clone();
    let mut count = 0;

    while let Some(square) = remaining.pop_lsb() {
        // Index bits past the width of usize are ignored by contract, and the
        // shift must not be asked for them: wide masks can carry more set bits
        // than the index has
        if count < usize::BITS as usize && index & (1usize << count) != 0 {
            occupancy.set(square);
        }
        count += 1;
    }

    occupancy
}

/******************************************\
|==========================================|
|              Attack Helpers              |
|==========================================|
\******************************************/

/// Exact attack set of a slider on `square`, stopping each ray at the first
/// blocker in `occupancy` (blocker square included).
///
/// # Panics
/// Panics if `piece_type` is not a slider.
pub fn sliding_attacks(
    size: BoardSize,
    piece_type: PieceType,
    square: usize,
    occupancy: &BitBoard,
) -> BitBoard {
    assert!(
        piece_type.move_type() == MoveType::Slide,
        "sliding_attacks requires a sliding piece"
    );
    ray_attacks(size, square, piece_type.slide_directions(), occupancy)
}

/// Mask of board edges that cannot affect a slider's reach from `square`:
/// the outermost ranks and files, except those the square itself sits on.
fn edge_mask(size: BoardSize, square: usize) -> BitBoard {
    let (x, y) = size.coords_of(square);

    let mut rank_edges = BitBoard::new(size);
    rank_edges.fill_rank(0);
    rank_edges.fill_rank(size.height() - 1);
    let mut origin_rank = BitBoard::new(size);
    origin_rank.fill_rank(y);

    let mut file_edges = BitBoard::new(size);
    file_edges.fill_file(0);
    file_edges.fill_file(size.width() - 1);
    let mut origin_file = BitBoard::new(size);
    origin_file.fill_file(x);

    (rank_edges & !origin_rank) | (file_edges & !origin_file)
}

/// Relevant-occupancy mask for a slider: the empty-board attack set with the
/// edges stripped. A blocker on the far edge never shortens the ray, so
/// dropping those squares keeps the table at `2^popcount(mask)` entries.
pub fn relevant_mask(size: BoardSize, piece_type: PieceType, square: usize) -> BitBoard {
    let empty = BitBoard::new(size);
    sliding_attacks(size, piece_type, square, &empty) & !edge_mask(size, square)
}

/******************************************\
|==========================================|
|             Magics Definition            |
|==========================================|
\******************************************/

/// A found magic multiplier for one (piece, square) pair.
///
/// `index` hashes a blocker board into `[0, 2^popcount(mask))`: each occupancy
/// word (restricted to the mask) is multiplied with the matching candidate
/// word, the products are XOR-folded, and the fold is shifted down by
/// `64 - popcount(mask)`. On boards that fit one word this is exactly the
/// classic `((occ & mask) * magic) >> shift`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magic {
    magic: BitBoard,
    mask: BitBoard,
    shift: u8,
}

impl Magic {
    /// Returns the relevant-occupancy mask the magic was searched against.
    #[inline]
    pub fn mask(&self) -> &BitBoard {
        &self.mask
    }

    /// Returns the candidate multiplier words.
    #[inline]
    pub fn magic(&self) -> &BitBoard {
        &self.magic
    }

    /// Hashes a blocker board into the attack-table index.
    #[inline]
    pub fn index(&self, occupancy: &BitBoard) -> usize {
        if self.shift >= 64 {
            return 0;
        }
        let mut fold = 0u64;
        for ((occ, mask), magic) in occupancy
            .words()
            .iter()
            .zip(self.mask.words())
            .zip(self.magic.words())
        {
            fold ^= (occ & mask).wrapping_mul(*magic);
        }
        (fold >> self.shift) as usize
    }
}

/******************************************\
|==========================================|
|           Magic Number Search            |
|==========================================|
\******************************************/

/// Candidate budget per (piece, square) search.
const MAX_ATTEMPTS: u32 = 100_000_000;

/// XOR-fold of the word-wise products of two equal-sized boards.
fn fold_mul(a: &BitBoard, b: &BitBoard) -> u64 {
    a.words()
        .iter()
        .zip(b.words())
        .fold(0u64, |acc, (x, y)| acc ^ x.wrapping_mul(*y))
}

/// Searches for a magic multiplier for a slider on `square`.
///
/// Every occupancy of the square's relevant mask is enumerated through
/// [`set_occupancy`] together with its exact attack set, then sparse-biased
/// candidates are drawn from `rng` until one hashes all occupancies without a
/// damaging collision (two occupancies may share an index only if their attack
/// sets agree). Returns `None` if the attempt budget runs out.
///
/// The candidate sequence is fully determined by the `rng` seed, so a
/// discovered magic is reproducible across runs.
pub fn find_magic(
    size: BoardSize,
    piece_type: PieceType,
    square: usize,
    rng: &mut Prng,
) -> Option<Magic> {
    let mask = relevant_mask(size, piece_type, square);
    let bits = mask.count_bits();

    // A table of 2^bits entries must be addressable; past that the search is
    // infeasible anyway
    if bits >= u64::BITS {
        return None;
    }

    // An empty mask has a single occupancy, so any candidate hashes it
    // collision-free
    if bits == 0 {
        return Some(Magic {
            magic: rng.random_board(size),
            mask,
            shift: 64,
        });
    }

    let table_size = 1usize << bits;

    // Every blocker configuration, paired with its exact attack set
    let occupancies: Vec<BitBoard> = (0..table_size)
        .map(|index| set_occupancy(&mask, index))
        .collect();
    let reference: Vec<BitBoard> = occupancies
        .iter()
        .map(|occ| sliding_attacks(size, piece_type, square, occ))
        .collect();

    let mut table = vec![BitBoard::new(size); table_size];
    let mut epoch = vec![0u32; table_size];

    for attempt in 1..=MAX_ATTEMPTS {
        let candidate = Magic {
            magic: rng.random_board(size),
            mask: mask.clone(),
            shift: 64 - bits as u8,
        };

        // Cheap quality filter: a usable candidate concentrates mask bits in
        // the upper byte of the folded product
        if (fold_mul(&mask, &candidate.magic) >> 56).count_ones() < 6 {
            continue;
        }

        // The epoch stamp lets the table be reused across attempts without
        // clearing it
        let mut collision = false;
        for (occupancy, attacks) in occupancies.iter().zip(&reference) {
            let index = candidate.index(occupancy);

            if epoch[index] < attempt {
                epoch[index] = attempt;
                table[index] = attacks.clone();
            } else if table[index] != *attacks {
                collision = true;
                break;
            }
        }

        if !collision {
            return Some(candidate);
        }
    }

    None
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn standard() -> BoardSize {
        BoardSize::STANDARD
    }

    #[test]
    fn test_set_occupancy_extremes() {
        let mut mask = BitBoard::new(standard());
        mask.set(1);
        mask.set(9);
        mask.set(18);

        let none = set_occupancy(&mask, 0);
        assert!(none.is_empty());

        let all = set_occupancy(&mask, 0b111);
        assert_eq!(all, mask);

        // High index bits beyond the popcount are ignored
        assert_eq!(set_occupancy(&mask, 0b111 | (1 << 10)), mask);
    }

    #[test]
    fn test_set_occupancy_orders_by_flat_index() {
        let mut mask = BitBoard::new(standard());
        mask.set(40);
        mask.set(2);
        mask.set(17);

        // Bit 0 of the index maps to the lowest flat index in the mask
        assert!(set_occupancy(&mask, 0b001).is_set(2));
        assert!(set_occupancy(&mask, 0b010).is_set(17));
        assert!(set_occupancy(&mask, 0b100).is_set(40));
    }

    #[test]
    fn test_set_occupancy_empty_mask() {
        let mask = BitBoard::new(standard());
        for index in [0usize, 1, 7, 1000] {
            assert!(set_occupancy(&mask, index).is_empty());
        }
    }

    #[test]
    fn test_set_occupancy_wide_mask() {
        // A mask with more set bits than the index has: the excess squares
        // simply never receive an index bit
        let size = BoardSize::new(9, 9).unwrap();
        let mask = BitBoard::from_words(size, &[u64::MAX, u64::MAX]);
        assert_eq!(mask.count_bits(), 81);

        assert!(set_occupancy(&mask, 0).is_empty());

        let all_index_bits = set_occupancy(&mask, usize::MAX);
        assert_eq!(all_index_bits.count_bits(), usize::BITS);
        assert!(all_index_bits.is_set(63));
        assert!(!all_index_bits.is_set(64));
    }

    #[test]
    fn test_occupancy_bijection() {
        let size = BoardSize::new(9, 9).unwrap();
        let mask = relevant_mask(size, PieceType::Bishop, size.index_of(0, 0));
        let popcount = mask.count_bits();

        let mut seen = HashSet::new();
        for index in 0..(1usize << popcount) {
            let occupancy = set_occupancy(&mask, index);
            // Every occupancy is a subset of the mask
            assert_eq!(&occupancy & &mask, occupancy);
            assert!(seen.insert(occupancy.words().to_vec()), "duplicate at {index}");
        }
        assert_eq!(seen.len(), 1 << popcount);
    }

    #[test]
    fn test_relevant_mask_drops_edges() {
        let mask = relevant_mask(standard(), PieceType::Rook, 0);

        // Rook on (0,0): relevant squares run to the 6th file/rank only
        assert_eq!(mask.count_bits(), 12);
        assert!(mask.is_set_at(1, 0));
        assert!(mask.is_set_at(6, 0));
        assert!(!mask.is_set_at(7, 0));
        assert!(mask.is_set_at(0, 6));
        assert!(!mask.is_set_at(0, 7));
    }

    #[test]
    fn test_sliding_attacks_with_blockers() {
        let mut occupancy = BitBoard::new(standard());
        occupancy.set(standard().index_of(4, 0));

        let attacks = sliding_attacks(standard(), PieceType::Rook, 0, &occupancy);
        assert!(attacks.is_set_at(4, 0));
        assert!(!attacks.is_set_at(5, 0));
        assert!(attacks.is_set_at(0, 7));
    }

    #[test]
    #[should_panic(expected = "sliding_attacks requires a sliding piece")]
    fn test_sliding_attacks_rejects_leapers() {
        let occupancy = BitBoard::new(standard());
        sliding_attacks(standard(), PieceType::Knight, 0, &occupancy);
    }

    #[test]
    fn test_find_magic_bishop_corner() {
        let mut rng = Prng::new(Prng::DEFAULT_SEED);
        let magic = find_magic(standard(), PieceType::Bishop, 0, &mut rng)
            .expect("no magic found within budget");

        verify_collision_free(standard(), PieceType::Bishop, 0, &magic);
    }

    #[test]
    fn test_find_magic_rook_centre() {
        let mut rng = Prng::new(0xC0FFEE);
        let square = standard().index_of(3, 3);
        let magic = find_magic(standard(), PieceType::Rook, square, &mut rng)
            .expect("no magic found within budget");

        verify_collision_free(standard(), PieceType::Rook, square, &magic);
    }

    #[test]
    fn test_find_magic_empty_mask() {
        // A bishop on a 1-high board attacks nothing, so the relevant mask is
        // empty and the single occupancy hashes trivially
        let size = BoardSize::new(8, 1).unwrap();
        let mut rng = Prng::default();
        let magic = find_magic(size, PieceType::Bishop, 3, &mut rng)
            .expect("empty mask must yield a trivial magic");

        assert!(magic.mask().is_empty());
        assert_eq!(magic.index(&BitBoard::new(size)), 0);
    }

    #[test]
    fn test_find_magic_rejects_oversized_masks() {
        // 2^popcount(mask) entries stop being addressable at 64 bits
        let size = BoardSize::new(70, 70).unwrap();
        let square = size.index_of(35, 35);
        assert!(relevant_mask(size, PieceType::Rook, square).count_bits() >= 64);

        let mut rng = Prng::default();
        assert_eq!(find_magic(size, PieceType::Rook, square, &mut rng), None);
    }

    #[test]
    fn test_find_magic_is_deterministic() {
        let mut a = Prng::new(99);
        let mut b = Prng::new(99);
        assert_eq!(
            find_magic(standard(), PieceType::Bishop, 7, &mut a),
            find_magic(standard(), PieceType::Bishop, 7, &mut b)
        );
    }

    fn verify_collision_free(size: BoardSize, piece_type: PieceType, square: usize, magic: &Magic) {
        let bits = magic.mask().count_bits();
        let table_size = 1usize << bits;
        let mut table: Vec<Option<BitBoard>> = vec![None; table_size];

        for index in 0..table_size {
            let occupancy = set_occupancy(magic.mask(), index);
            let attacks = sliding_attacks(size, piece_type, square, &occupancy);
            let slot = magic.index(&occupancy);

            assert!(slot < table_size, "hash escaped the table");
            match &table[slot] {
                None => table[slot] = Some(attacks),
                Some(stored) => assert_eq!(stored, &attacks, "damaging collision at {slot}"),
            }
        }
    }
}
