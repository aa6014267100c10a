use super::*;
use crate::cards::Card;
use crate::gameplay::*;
use crate::mcts::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Determinized search agent.
///
/// Picks which of its two cards to play by searching over sampled hidden
/// states with rollout policy `R`, then finds a legal action for that card
/// by rejection sampling. Decisions are a pure function of the configured
/// seed, the observed view and the drawn card.
#[derive(Debug, Clone)]
pub struct Monte<R: Rollout = Fish> {
    config: Config,
    rollout: PhantomData<R>,
}

impl<R: Rollout> Default for Monte<R> {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

impl<R: Rollout> From<Config> for Monte<R> {
    fn from(config: Config) -> Self {
        Self {
            config,
            rollout: PhantomData,
        }
    }
}

impl<R: Rollout> Monte<R> {
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// deterministically sampling the same action for the same inputs
    fn rng(&self, view: &View, drawn: Card) -> SmallRng {
        let ref mut hasher = DefaultHasher::new();
        self.config.seed().hash(hasher);
        view.hash(hasher);
        drawn.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}

impl<R: Rollout> Player for Monte<R> {
    fn decide(&mut self, round: &Round, drawn: Card) -> Action {
        let view = round.view();
        let ref mut rng = self.rng(view, drawn);
        let choice = Search::new(view, drawn, self.config).run::<R>(rng).best();
        let attempts = self.config.attempts();
        view.hand()
            .map(|held| choice.card(held, drawn))
            .and_then(|card| Fallback::attempt(view, drawn, card, rng, attempts))
            .inspect(|action| log::debug!("seat {} plays {} ({})", view.seat(), action, choice))
            .or_else(|| {
                log::debug!("seat {} found no legal {} play", view.seat(), choice);
                Fallback::sample(view, drawn, rng)
            })
            .expect("legal action exists conditional on being asked to move")
    }
}
