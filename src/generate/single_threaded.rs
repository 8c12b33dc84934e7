use super::{
    next_seeds, run_trial, Best, Checkpoint, GenerateError, Generator, GeneratorConfig, Trial,
};
use crate::grid::Word;
use std::time::Instant;
use tracing::info;

/// Runs every trial on the calling thread, one after another.
#[derive(Clone)]
pub struct SingleThreadedGenerator<'s> {
    words: &'s [Word],
    config: &'s GeneratorConfig,
}

impl<'s> SingleThreadedGenerator<'s> {
    pub fn new(words: &'s [Word], config: &'s GeneratorConfig) -> SingleThreadedGenerator<'s> {
        SingleThreadedGenerator { words, config }
    }
}

impl<'s> Generator for SingleThreadedGenerator<'s> {
    fn generate(&self, report: &mut dyn FnMut(&Checkpoint)) -> Result<Trial, GenerateError> {
        self.config.validate()?;
        if self.config.trials == 0 {
            return Err(GenerateError::NoTrials);
        }

        let start = Instant::now();
        let mut seed_source = self.config.seed_source();
        let mut best = Best::default();
        let mut completed = 0;

        while completed < self.config.trials {
            let window = self
                .config
                .checkpoint_interval
                .min(self.config.trials - completed);

            for (offset, seed) in next_seeds(&mut seed_source, window).into_iter().enumerate() {
                best.offer(run_trial(self.words, self.config, completed + offset, seed)?);
            }
            completed += window;

            if let Some(current) = best.current() {
                info!(
                    completed,
                    score = current.score,
                    seed = current.seed(),
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
