//! Randomized crossword layout generation.
//!
//! A [`Crossword`] is built greedily: every vocabulary word goes to one of its highest scoring
//! legal spots, where the score counts the letters it shares with words already on the board. A
//! [`Generator`] repeats that for many independently seeded trials and keeps the board with the
//! best [`Crossword::score`].

pub mod crossword;
pub mod fit;
pub mod generate;
pub mod grid;
pub mod vocabulary;

pub use crossword::{Crossword, PlacementError};
pub use fit::{enumerate_fits, evaluate_fit, Fit};
pub use generate::{
    parallel::ParallelGenerator, single_threaded::SingleThreadedGenerator, Checkpoint,
    GenerateError, Generator, GeneratorConfig, SeedPlacement, Trial,
};
pub use grid::{Cell, Coord, Direction, Grid, Step, Word};
