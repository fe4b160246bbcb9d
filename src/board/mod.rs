//! Chess board representation for N-Queens placements

pub mod grid;

pub use grid::{Board, BoardError};
