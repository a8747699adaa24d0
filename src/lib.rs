//! # Tabula
//!
//! Bitboard core for chess boards of arbitrary rectangular size: word-packed
//! board sets, per-square movement tables, and the occupancy/magic-number
//! machinery that sliding-piece lookup tables are built from.
pub mod core;
pub mod movegen;
pub mod utils;

pub use self::core::*;
pub use movegen::{Magic, MovementSet, find_magic, set_occupancy};
pub use utils::{BoardRenderer, Prng, render};
