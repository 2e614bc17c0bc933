pub mod board;
pub mod cell;
pub mod frame;
pub mod preset;
pub mod run;
pub mod sim;

/// A `(row, col)` position on the board, zero-indexed from the top-left.
pub type Position = (usize, usize);
