use crate::{
    crossword::{Crossword, PlacementError},
    grid::{Coord, Direction, Word},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub mod parallel;
pub mod single_threaded;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no trials to run")]
    NoTrials,
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePlacementError {
    #[error("expected WORD:ROW:COL:DIRECTION, got {0:?}")]
    Format(String),
    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
    #[error("unknown direction {0:?}, expected right or down")]
    Direction(String),
}

/// A word pinned to a fixed spot on every board before the random search starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPlacement {
    pub word: Word,
    pub coord: Coord,
    pub direction: Direction,
}

impl SeedPlacement {
    pub fn new(word: &str, coord: Coord, direction: Direction) -> SeedPlacement {
        SeedPlacement {
            word: Word::from(word),
            coord,
            direction,
        }
    }
}

impl FromStr for Direction {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" | "r" => Ok(Direction::Right),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(ParsePlacementError::Direction(String::from(s))),
        }
    }
}

impl FromStr for SeedPlacement {
    type Err = ParsePlacementError;

    /// Parses `WORD:ROW:COL:DIRECTION`, e.g. `стаж:6:4:right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(4, ':');
        let (direction, col, row, word) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(direction), Some(col), Some(row), Some(word)) if !word.trim().is_empty() => {
                (direction, col, row, word.trim())
            }
            _ => return Err(ParsePlacementError::Format(String::from(s))),
        };

        let parse_index = |value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| ParsePlacementError::Coordinate(String::from(value)))
        };

        Ok(SeedPlacement {
            word: Word::from(word),
            coord: Coord::new(parse_index(row)?, parse_index(col)?),
            direction: direction.trim().parse()?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub trials: usize,
    pub checkpoint_interval: usize,
    pub placements: Vec<SeedPlacement>,
    /// Base seed for the trial seeds. Drawn from entropy when unset.
    pub seed: Option<u64>,
    pub threads: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: 13,
            height: 13,
            trials: 100_000,
            checkpoint_interval: 100,
            placements: vec![],
            seed: None,
            threads: 1,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerateError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.checkpoint_interval == 0 {
            return Err(GenerateError::InvalidConfig(String::from(
                "checkpoint interval must be positive",
            )));
        }
        if self.threads == 0 {
            return Err(GenerateError::InvalidConfig(String::from(
                "thread count must be positive",
            )));
        }
        Ok(())
    }

    /// Source of per-trial seeds.
    pub(crate) fn seed_source(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Anything that can be ranked by a board score.
pub trait Scored {
    fn score(&self) -> usize;
}

/// One finished board along with its position in the run.
#[derive(Clone, Debug)]
pub struct Trial {
    pub crossword: Crossword,
    pub score: usize,
    pub index: usize,
}

impl Trial {
    pub fn seed(&self) -> u64 {
        self.crossword.seed()
    }
}

impl Scored for Trial {
    fn score(&self) -> usize {
        self.score
    }
}

/// Keeps the higher scoring of two candidates. Ties go to `later`.
pub fn keep_best<T: Scored>(earlier: T, later: T) -> T {
    if later.score() >= earlier.score() {
        later
    } else {
        earlier
    }
}

pub fn best_of<T: Scored, I: IntoIterator<Item = T>>(candidates: I) -> Option<T> {
    candidates.into_iter().reduce(keep_best)
}

/// Running best across checkpoint windows.
#[derive(Debug)]
pub struct Best<T> {
    current: Option<T>,
}

impl<T> Default for Best<T> {
    fn default() -> Self {
        Best { current: None }
    }
}

impl<T: Scored> Best<T> {
    pub fn offer(&mut self, candidate: T) {
        self.current = Some(match self.current.take() {
            Some(current) => keep_best(current, candidate),
            None => candidate,
        });
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.current
    }
}

/// Snapshot handed to the progress reporter.
#[derive(Debug)]
pub struct Checkpoint<'a> {
    pub completed: usize,
    pub total: usize,
    pub best: &'a Trial,
}

pub trait Generator {
    fn generate(&self, report: &mut dyn FnMut(&Checkpoint)) -> Result<Trial, GenerateError>;
}

/// Builds one board: the configured seed placements first, then every vocabulary word once in an
/// order shuffled by the board's own random source.
pub fn run_trial(
    words: &[Word],
    config: &GeneratorConfig,
    index: usize,
    seed: u64,
) -> Result<Trial, GenerateError> {
    let mut crossword = Crossword::new(config.width, config.height, seed);

    for placement in config.placements.iter() {
        crossword.force_place(&placement.word, placement.coord, placement.direction)?;
    }

    let mut order: Vec<&Word> = words.iter().collect();
    crossword.shuffle(&mut order);

    let mut missed = 0;
    for word in order {
        if crossword.add_word(word).is_none() {
            missed += 1;
        }
    }

    let score = crossword.score();
    debug!(index, seed, score, missed, "trial finished");

    Ok(Trial {
        crossword,
        score,
        index,
    })
}

/// Draws the seeds for the next `count` trials.
pub(crate) fn next_seeds(source: &mut StdRng, count: usize) -> Vec<u64> {
    (0..count).map(|_| source.gen()).collect()
}
