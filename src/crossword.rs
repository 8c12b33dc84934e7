use crate::{
    fit::{enumerate_fits, evaluate_fit, Fit},
    grid::{Cell, Coord, Direction, Grid, Word},
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cannot place {word} at ({row}, {col}) going {direction}")]
    Conflict {
        word: String,
        row: usize,
        col: usize,
        direction: Direction,
    },
}

/// A board under construction.
///
/// Each board owns its grid and a random source derived from `seed`, so two boards built from the
/// same seed and the same sequence of calls end up identical.
#[derive(Clone, Debug)]
pub struct Crossword {
    grid: Grid,
    intersections: usize,
    words_placed: usize,
    seed: u64,
    rng: StdRng,
}

impl Crossword {
    pub fn new(width: usize, height: usize, seed: u64) -> Crossword {
        Crossword {
            grid: Grid::new(width, height),
            intersections: 0,
            words_placed: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn intersections(&self) -> usize {
        self.intersections
    }

    pub fn words_placed(&self) -> usize {
        self.words_placed
    }

    /// Intersections are worth ten filled cells.
    pub fn score(&self) -> usize {
        self.intersections * 10 + self.grid.letter_count()
    }

    /// Places `word` at one of its best-scoring fits, picking among ties with the board's own
    /// random source. Returns the chosen fit, or `None` if the word fits nowhere.
    pub fn add_word(&mut self, word: &Word) -> Option<Fit> {
        let fits = enumerate_fits(&self.grid, word, self.words_placed == 0);

        let max_score = fits.iter().map(|fit| fit.score).max()?;
        let max_fits: Vec<&Fit> = fits.iter().filter(|fit| fit.score == max_score).collect();

        let chosen = *max_fits[self.rng.gen_range(0..max_fits.len())];
        self.place(word, chosen.coord, chosen.direction);

        Some(chosen)
    }

    /// Places `word` at a fixed spot, skipping the intersection requirement.
    ///
    /// Used for starter words supplied by configuration; an error here means the configuration
    /// itself is inconsistent.
    pub fn force_place(
        &mut self,
        word: &Word,
        coord: Coord,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        if evaluate_fit(&self.grid, word, coord, direction, true).is_none() {
            return Err(PlacementError::Conflict {
                word: word.to_string(),
                row: coord.row,
                col: coord.col,
                direction,
            });
        }

        self.place(word, coord, direction);
        Ok(())
    }

    /// Shuffles `items` with the board's random source.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    // Callers must have validated the placement with `evaluate_fit`.
    pub(crate) fn place(&mut self, word: &Word, coord: Coord, direction: Direction) {
        let step = direction.step();

        let before = self.grid.move_coords(coord, 1, step.opposite());
        let after = self.grid.move_coords(coord, word.len(), step);
        for boundary in [before, after].into_iter().flatten() {
            if self.grid.cell(boundary).is_empty() {
                self.grid.set_cell(boundary, Cell::Blocker);
            }
        }

        for (index, c) in word.chars().iter().enumerate() {
            let target = match self.grid.move_coords(coord, index, step) {
                Some(target) => target,
                None => continue,
            };

            if self.grid.cell(target) == Cell::Letter(*c) {
                self.intersections += 1;
            }

            self.grid.set_cell(target, Cell::Letter(*c));
            self.grid.set_direction(target, direction);
        }

        self.words_placed += 1;
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
