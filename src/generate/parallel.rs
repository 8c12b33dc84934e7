use super::{
    keep_best, next_seeds, run_trial, Best, Checkpoint, GenerateError, Generator, GeneratorConfig,
    Trial,
};
use crate::grid::Word;
use rayon::prelude::*;
use std::time::Instant;
use tracing::info;

/// Spreads each checkpoint window's trials over a rayon pool.
///
/// Trial seeds are drawn on the calling thread and windows are reduced in trial order, so for the
/// same base seed this returns exactly what [`SingleThreadedGenerator`] does.
///
/// [`SingleThreadedGenerator`]: super::single_threaded::SingleThreadedGenerator
#[derive(Clone)]
pub struct ParallelGenerator<'s> {
    words: &'s [Word],
    config: &'s GeneratorConfig,
}

impl<'s> ParallelGenerator<'s> {
    pub fn new(words: &'s [Word], config: &'s GeneratorConfig) -> ParallelGenerator<'s> {
        ParallelGenerator { words, config }
    }
}

impl<'s> Generator for ParallelGenerator<'s> {
    fn generate(&self, report: &mut dyn FnMut(&Checkpoint)) -> Result<Trial, GenerateError> {
        self.config.validate()?;
        if self.config.trials == 0 {
            return Err(GenerateError::NoTrials);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .thread_name(|index| format!("worker{}", index))
            .build()?;

        let start = Instant::now();
        let mut seed_source = self.config.seed_source();
        let mut best = Best::default();
        let mut completed = 0;

        while completed < self.config.trials {
            let window = self
                .config
                .checkpoint_interval
                .min(self.config.trials - completed);
            let seeds = next_seeds(&mut seed_source, window);

            let window_best = pool.install(|| {
                seeds
                    .par_iter()
                    .enumerate()
                    .map(|(offset, seed)| run_trial(self.words, self.config, completed + offset, *seed))
                    .try_reduce_with(|earlier, later| Ok(keep_best(earlier, later)))
            });

            if let Some(window_best) = window_best {
                best.offer(window_best?);
            }
            completed += window;

            if let Some(current) = best.current() {
                info!(
                    completed,
                    score = current.score,
                    seed = current.seed(),
                    threads = self.config.threads,
                    "trials per ms: {}",
                    completed as f32 / start.elapsed().as_millis().max(1) as f32
                );
                report(&Checkpoint {
                    completed,
                    total: self.config.trials,
                    best: current,
                });
            }
        }

        best.into_inner().ok_or(GenerateError::NoTrials)
    }
}
