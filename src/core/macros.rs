/******************************************\
|==========================================|
|      Macro: impl_from_to_primitive       |
|==========================================|
\******************************************/

/// Generates `from_unchecked` and `index` methods for an enum that derives its variants from `u8`.
///
/// It provides:
/// - `unsafe fn from_unchecked(index: u8) -> Self`: Converts a `u8` to the enum type. Assumes the index is valid.
/// - `const fn index(&self) -> usize`: Converts the enum instance to its underlying `usize` value.
#[macro_export]
macro_rules! impl_from_to_primitive {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Converts primitive type u8 to ", stringify!($enum_name))]
            /// ## Safety
            /// - This function assumes the inputs are not malformed, so the index has a corresponding enum element with the same discriminator
            #[inline]
            pub const unsafe fn from_unchecked(index: u8) -> Self {
                debug_assert!(index < Self::NUM as u8, "Index out of bounds");
                unsafe { std::mem::transmute(index) }
            }

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` method for an enum that has a `NUM` constant
/// and an `unsafe fn from_unchecked(index: u8) -> Self` method.
/// The `iter()` method returns a `DoubleEndedIterator` over all variants of the enum.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                (0..Self::NUM as u8).map(|i| unsafe { Self::from_unchecked(i) })
            }
        }
    };
}

/******************************************\
|==========================================|
|         Macro: impl_board_bit_op         |
|==========================================|
\******************************************/

/// Implements a word-wise bitwise operator (e.g. `BitAnd`) for the heap-backed
/// [`BitBoard`](crate::core::BitBoard). Both operands must share the same
/// [`BoardSize`](crate::core::BoardSize); the result is re-masked so padding
/// bits past the logical board stay zero.
#[macro_export]
macro_rules! impl_board_bit_op {
    ($op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name for &BitBoard {
            type Output = BitBoard;

            fn $method_name(self, rhs: Self) -> Self::Output {
                assert!(
                    self.size() == rhs.size(),
                    "BitBoard size mismatch: {} vs {}",
                    self.size(),
                    rhs.size()
                );
                let words = self
                    .words()
                    .iter()
                    .zip(rhs.words())
                    .map(|(a, b)| a $op b)
                    .collect();
                BitBoard::from_raw(self.size(), words)
            }
        }

        impl std::ops::$op_name for BitBoard {
            type Output = BitBoard;

            fn $method_name(self, rhs: Self) -> Self::Output {
                &self $op &rhs
            }
        }
    };
}

/******************************************\
|==========================================|
|       Macro: impl_board_bit_assign       |
|==========================================|
\******************************************/

/// Implements the assignment counterpart (`&=`, `|=`, `^=`) of a board
/// operator. Assumes the corresponding binary operator is already defined
/// for `&BitBoard`.
#[macro_export]
macro_rules! impl_board_bit_assign {
    ($op_name:ident, $method_name:ident, $op:tt) => {
        impl std::ops::$op_name<&BitBoard> for BitBoard {
            fn $method_name(&mut self, rhs: &BitBoard) {
                *self = &*self $op rhs;
            }
        }

        impl std::ops::$op_name for BitBoard {
            fn $method_name(&mut self, rhs: BitBoard) {
                *self = &*self $op &rhs;
            }
        }
    };
}
