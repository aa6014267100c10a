use crate::Position;
use crate::cards::Card;
use crate::gameplay::*;
use rand::rngs::SmallRng;

/// Anything that can take a turn at the table.
///
/// Called only for the seat to act, after it has drawn. The returned action
/// must be accepted by the rule engine for the seat's actual hand.
pub trait Player {
    fn decide(&mut self, round: &Round, drawn: Card) -> Action;
}

/// Simulated decision-making for one seat inside a determinization.
///
/// One instance is created per seat per determinization and reset with that
/// seat's hypothesized hand before any play is requested.
pub trait Rollout: Default {
    fn reset(&mut self, _seat: Position, _hand: Option<Card>) {}
    /// A legal action playing `card`, which is one of the seat's two cards.
    fn play(
        &mut self,
        view: &View,
        drawn: Card,
        card: Card,
        rng: &mut SmallRng,
    ) -> Result<Action, IllegalAction>;
}
