//! **cave_mazes** carves cave like mazes with a randomized growing walk and renders them as text.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod logical_grid;
pub mod maze;
pub mod renderers;
pub mod units;
pub mod utils;
