use crate::*;

/// Search parameters.
///
/// Defaults come from the crate constants; the builder methods override
/// them, e.g. from command line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    determinizations: usize,
    attempts: usize,
    seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            determinizations: DETERMINIZATIONS,
            attempts: FALLBACK_ATTEMPTS,
            seed: SEED,
        }
    }
}

impl Config {
    pub fn with_determinizations(self, determinizations: usize) -> Self {
        Self {
            determinizations,
            ..self
        }
    }
    pub fn with_attempts(self, attempts: usize) -> Self {
        Self { attempts, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    /// Independent determinizations per decision.
    pub fn determinizations(&self) -> usize {
        self.determinizations
    }
    /// Proposals tried for the searched card before the open fallback.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
