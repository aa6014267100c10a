use super::*;
use crate::cards::Card;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Chooses uniformly among legal actions.
///
/// Serves both as a table opponent and as the default rollout policy.
#[derive(Debug, Clone)]
pub struct Fish(SmallRng);

impl Default for Fish {
    fn default() -> Self {
        Self::from(0)
    }
}

impl From<u64> for Fish {
    fn from(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Fish {
    /// Every legal action playing `card`.
    fn options(view: &View, drawn: Card, card: Card) -> Vec<Action> {
        Action::candidates(card, view.seat(), view.n())
            .into_iter()
            .filter(|a| view.is_legal(a, drawn))
            .collect()
    }
}

impl Rollout for Fish {
    fn play(
        &mut self,
        view: &View,
        drawn: Card,
        card: Card,
        rng: &mut SmallRng,
    ) -> Result<Action, IllegalAction> {
        Self::options(view, drawn, card)
            .choose(rng)
            .copied()
            .ok_or(IllegalAction::NoLegalPlay(card))
    }
}

impl Player for Fish {
    fn decide(&mut self, round: &Round, drawn: Card) -> Action {
        let view = round.view();
        let mut cards = view.hand().into_iter().chain([drawn]).collect::<Vec<_>>();
        cards.dedup();
        cards
            .into_iter()
            .flat_map(|c| Self::options(view, drawn, c))
            .collect::<Vec<_>>()
            .choose(&mut self.0)
            .copied()
            .expect("non empty legal actions conditional on being asked to move")
    }
}
