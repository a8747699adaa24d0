// Movement-table generation submodules

pub mod magic;
pub mod movement;

// Re-export common types for easier access
pub use magic::{Magic, find_magic, relevant_mask, set_occupancy, sliding_attacks};
pub use movement::MovementSet;
