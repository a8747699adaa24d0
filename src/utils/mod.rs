// Utility module exports

pub mod prng;
pub mod render;

pub use prng::Prng;
pub use render::{BoardRenderer, render};
