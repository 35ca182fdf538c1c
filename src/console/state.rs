//! Root state of the console session.

use country_quiz::effect::Effect;
use country_quiz::lookup::LookupState;
use country_quiz::model::{QuizMode, RegionFilter};
use country_quiz::quiz::QuizState;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Startup options for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub region: RegionFilter,
    pub mode: QuizMode,
    /// Fixed seed for the random pickers, entropy when absent.
    pub seed: Option<u64>,
}

pub struct RootState {
    pub lookup: LookupState,
    pub quiz: QuizState,
    /// One-shot text shown under the next render (help, unknown command).
    pub notice: Option<String>,
}

impl RootState {
    pub fn new(config: Config) -> Self {
        let (lookup_rng, quiz_rng) = match config.seed {
            // Distinct streams so a lookup doesn't shift the quiz picks
            Some(seed) => (StdRng::seed_from_u64(seed), StdRng::seed_from_u64(seed.wrapping_add(1))),
            None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
        };

        Self {
            lookup: LookupState::new(lookup_rng),
            quiz: QuizState::new(config.region, config.mode, quiz_rng),
            notice: None,
        }
    }

    /// Effects to run once the session starts.
    pub fn mount(&mut self) -> Vec<Effect> {
        self.quiz.mount()
    }
}
