use thiserror::Error;

/******************************************\
|==========================================|
|                Board Size                |
|==========================================|
\******************************************/

/// # Board geometry
///
/// - Represents the dimensions of a rectangular board and the word-packing
///   maths derived from them
///
/// A square `(x, y)` with `0 <= x < width` and `0 <= y < height` maps to the
/// flat index `y * width + x`; flat index `i` lives in storage word `i / 64`
/// at bit position `i % 64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    width: u8,
    height: u8,
}

impl BoardSize {
    /// The standard 8x8 chess board.
    pub const STANDARD: BoardSize = BoardSize {
        width: 8,
        height: 8,
    };

    /// Creates a board size, rejecting zero dimensions.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{BoardSize, SizeError};
    ///
    /// assert!(BoardSize::new(8, 8).is_ok());
    /// assert_eq!(BoardSize::new(0, 8), Err(SizeError::ZeroWidth));
    /// assert_eq!(BoardSize::new(8, 0), Err(SizeError::ZeroHeight));
    /// ```
    pub const fn new(width: u8, height: u8) -> Result<Self, SizeError> {
        if width == 0 {
            return Err(SizeError::ZeroWidth);
        }
        if height == 0 {
            return Err(SizeError::ZeroHeight);
        }
        Ok(BoardSize { width, height })
    }

    /// Returns the board width (number of files).
    #[inline]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Returns the board height (number of ranks).
    #[inline]
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Returns the number of squares on the board.
    #[inline]
    pub const fn flat_size(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns the number of 64-bit words needed to pack one board.
    #[inline]
    pub const fn word_count(&self) -> usize {
        self.flat_size().div_ceil(64)
    }

    /// Returns the mask of semantically valid bits in the final storage word.
    ///
    /// All ones when `flat_size` is a multiple of 64, otherwise only the low
    /// `flat_size % 64` bits are set. Bits above the mask are padding and must
    /// always read as zero.
    #[inline]
    pub const fn partial_mask(&self) -> u64 {
        match self.flat_size() % 64 {
            0 => u64::MAX,
            rem => (1u64 << rem) - 1,
        }
    }

    /// Checks whether `(x, y)` lies on the board.
    #[inline]
    pub const fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && (x as usize) < self.width() && y >= 0 && (y as usize) < self.height()
    }

    /// Converts board coordinates to a flat square index.
    ///
    /// The coordinates are not bounds checked; callers feeding coordinates
    /// from [`contains`](Self::contains) get a valid index.
    #[inline]
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width() + x
    }

    /// Converts a flat square index back to `(x, y)` board coordinates.
    #[inline]
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width(), index / self.width())
    }
}

impl std::fmt::Display for BoardSize {
    /// Displays the size in the `WIDTHxHEIGHT` form parsed by `FromStr`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for BoardSize {
    type Err = ParseSizeError;

    /// Parses a `"8x8"`-style size string, with error checking.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tabula::core::{BoardSize, ParseSizeError};
    ///
    /// assert_eq!("8x8".parse::<BoardSize>().unwrap(), BoardSize::STANDARD);
    /// assert!(matches!("8".parse::<BoardSize>(), Err(ParseSizeError::MissingSeparator)));
    /// assert!(matches!("0x8".parse::<BoardSize>(), Err(ParseSizeError::InvalidSize(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width_str, height_str) = s.split_once('x').ok_or(ParseSizeError::MissingSeparator)?;

        let width = width_str
            .parse::<u8>()
            .map_err(|_| ParseSizeError::InvalidWidth(width_str.to_string()))?;
        let height = height_str
            .parse::<u8>()
            .map_err(|_| ParseSizeError::InvalidHeight(height_str.to_string()))?;

        BoardSize::new(width, height).map_err(ParseSizeError::InvalidSize)
    }
}

/******************************************\
|==========================================|
|               Size Errors                |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    #[error("Board width must be greater than 0")]
    ZeroWidth,
    #[error("Board height must be greater than 0")]
    ZeroHeight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    #[error("Missing 'x' separator in size string, expected WIDTHxHEIGHT")]
    MissingSeparator,
    #[error("Invalid width in size string: '{0}', expected 1-255")]
    InvalidWidth(String),
    #[error("Invalid height in size string: '{0}', expected 1-255")]
    InvalidHeight(String),
    #[error(transparent)]
    InvalidSize(SizeError),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
