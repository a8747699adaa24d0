// Core module exports

// Board representation submodules
pub mod bitboard;
pub mod macros;
pub mod piece;
pub mod size;

// Re-export common types for easier access
pub use bitboard::BitBoard;
pub use piece::{Colour, MoveType, PieceType};
pub use size::{BoardSize, ParseSizeError, SizeError};
