use std::fmt;

use super::BoardSize;
use crate::utils::{BoardRenderer, render};

/******************************************\
|==========================================|
|                 BitBoard                 |
|==========================================|
\******************************************/

/// Represents a word-packed bitboard over an arbitrary rectangular board.
/// Each bit corresponds to a square, from `(0, 0)` (LSB of the first word)
/// to `(width-1, height-1)`, packed row-major across as many 64-bit words
/// as the board needs.
///
/// Invariant: every bit at flat index `>= size.flat_size()` is zero. All
/// mutating operations re-mask the final storage word so padding bits can
/// never corrupt `count_bits`, iteration or set algebra.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitBoard {
    size: BoardSize,
    words: Box<[u64]>,
}

crate::impl_board_bit_op!(BitAnd, bitand, &);
crate::impl_board_bit_op!(BitOr, bitor, |);
crate::impl_board_bit_op!(BitXor, bitxor, ^);

crate::impl_board_bit_assign!(BitAndAssign, bitand_assign, &);
crate::impl_board_bit_assign!(BitOrAssign, bitor_assign, |);
crate::impl_board_bit_assign!(BitXorAssign, bitxor_assign, ^);

/******************************************\
|==========================================|
|               Constructors               |
|==========================================|
\******************************************/

impl BitBoard {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        BitBoard {
            size,
            words: vec![0; size.word_count()].into_boxed_slice(),
        }
    }

    /// Creates a board seeded from a caller-supplied word sequence.
    ///
    /// Missing words are zero-filled, excess words are ignored, and the final
    /// word is clipped with the partial mask so bits past the logical board
    /// are dropped.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{BitBoard, BoardSize};
    ///
    /// let size = BoardSize::new(5, 5).unwrap();
    /// let board = BitBoard::from_words(size, &[u64::MAX]);
    /// assert_eq!(board.count_bits(), 25);
    /// ```
    pub fn from_words(size: BoardSize, words: &[u64]) -> Self {
        let mut storage = vec![0; size.word_count()].into_boxed_slice();
        for (dst, src) in storage.iter_mut().zip(words) {
            *dst = *src;
        }
        Self::from_raw(size, storage)
    }

    /// Wraps a pre-sized word slice, enforcing the padding invariant.
    pub(crate) fn from_raw(size: BoardSize, mut words: Box<[u64]>) -> Self {
        debug_assert!(words.len() == size.word_count(), "Word count mismatch");
        if let Some(last) = words.last_mut() {
            *last &= size.partial_mask();
        }
        BitBoard { size, words }
    }

    /// Returns the board geometry.
    #[inline]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the packed storage words in increasing flat-index order.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}

/******************************************\
|==========================================|
|         BitBoard Implementation          |
|==========================================|
\******************************************/

impl BitBoard {
    /// Checks if the bit at the given flat index is set.
    ///
    /// Out-of-range indices read as `false`, mirroring the no-op convention
    /// of the mutating operations.
    #[inline]
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.size.flat_size() {
            return false;
        }
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Checks if the bit at board coordinates `(x, y)` is set.
    #[inline]
    pub fn is_set_at(&self, x: usize, y: usize) -> bool {
        x < self.size.width() && y < self.size.height() && self.is_set(self.size.index_of(x, y))
    }

    /// Sets the bit at the given flat index. Out-of-range indices are a no-op:
    /// leap generation legitimately probes targets past the board and relies
    /// on overshoot being ignored without touching adjacent words.
    #[inline]
    pub fn set(&mut self, index: usize) {
        if index < self.size.flat_size() {
            self.words[index / 64] |= 1u64 << (index % 64);
        }
    }

    /// Sets the bit at board coordinates `(x, y)`. Off-board coordinates are a no-op.
    #[inline]
    pub fn set_at(&mut self, x: usize, y: usize) {
        if x < self.size.width() && y < self.size.height() {
            self.set(self.size.index_of(x, y));
        }
    }

    /// Clears the bit at the given flat index. Out-of-range indices are a no-op.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        if index < self.size.flat_size() {
            self.words[index / 64] &= !(1u64 << (index % 64));
        }
    }

    /// Clears the bit at board coordinates `(x, y)`. Off-board coordinates are a no-op.
    #[inline]
    pub fn unset_at(&mut self, x: usize, y: usize) {
        if x < self.size.width() && y < self.size.height() {
            self.unset(self.size.index_of(x, y));
        }
    }

    /// Toggles the bit at the given flat index. Out-of-range indices are a no-op.
    #[inline]
    pub fn toggle(&mut self, index: usize) {
        if index < self.size.flat_size() {
            self.words[index / 64] ^= 1u64 << (index % 64);
        }
    }

    /// Counts the number of set bits (population count) across all words.
    #[inline]
    pub fn count_bits(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Checks if the board is empty (no bits set).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Sets every bit in the given column. Out-of-range files are a no-op.
    pub fn fill_file(&mut self, file: usize) {
        if file >= self.size.width() {
            return;
        }
        for rank in 0..self.size.height() {
            self.set(self.size.index_of(file, rank));
        }
    }

    /// Sets every bit in the given row. Out-of-range ranks are a no-op.
    pub fn fill_rank(&mut self, rank: usize) {
        if rank >= self.size.height() {
            return;
        }
        for file in 0..self.size.width() {
            self.set(self.size.index_of(file, rank));
        }
    }

    /// Returns a board containing only the lowest-flat-index set bit,
    /// computed as `word & word.wrapping_neg()` on the first nonzero word.
    /// An all-zero board yields an all-zero board.
    pub fn lsb(&self) -> BitBoard {
        let mut result = BitBoard::new(self.size);
        for (i, word) in self.words.iter().enumerate() {
            if *word != 0 {
                result.words[i] = word & word.wrapping_neg();
                break;
            }
        }
        result
    }

    /// Finds the flat index of the lowest set bit.
    /// Returns `None` if the board is empty.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{BitBoard, BoardSize};
    ///
    /// let mut board = BitBoard::new(BoardSize::new(9, 9).unwrap());
    /// board.set(70);
    /// assert_eq!(board.lsb_index(), Some(70));
    /// ```
    #[inline]
    pub fn lsb_index(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)
            .map(|(i, word)| i * 64 + word.trailing_zeros() as usize)
    }

    /// Finds and clears the lowest set bit, returning its flat index.
    /// Returns `None` if the board was empty.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<usize> {
        let index = self.lsb_index()?;
        self.words[index / 64] &= self.words[index / 64] - 1;
        Some(index)
    }

    /// Iterates over each set bit, calling `f` with its flat index.
    #[inline]
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize),
    {
        let mut board = self.clone();
        while let Some(index) = board.pop_lsb() {
            f(index);
        }
    }
}

impl std::ops::Not for &BitBoard {
    type Output = BitBoard;

    /// Produces the bit-complement, masked so padding bits never become set.
    fn not(self) -> Self::Output {
        let words = self.words.iter().map(|w| !w).collect();
        BitBoard::from_raw(self.size, words)
    }
}

impl std::ops::Not for BitBoard {
    type Output = BitBoard;

    fn not(self) -> Self::Output {
        !&self
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl fmt::Display for BitBoard {
    /// Diagnostic dump: `height` lines of `1`/`0`, top rank first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(BoardRenderer::Ascii, self))
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
