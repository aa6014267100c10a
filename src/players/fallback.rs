use crate::FALLBACK_DRAWN_ODDS;
use crate::cards::Card;
use crate::gameplay::*;
use rand::Rng;

/// Rejection sampling over random action proposals.
///
/// Each proposal picks a card, a target seat uniformly, and for the Guard a
/// guess among the non-Guard ranks. Proposals that fail construction or the
/// view's legality check are discarded.
pub struct Fallback;

impl Fallback {
    /// Tries `card` up to `attempts` times.
    pub fn attempt<R: Rng>(
        view: &View,
        drawn: Card,
        card: Card,
        rng: &mut R,
        attempts: usize,
    ) -> Option<Action> {
        (0..attempts)
            .filter_map(|_| Self::propose(view, card, rng))
            .find(|a| view.is_legal(a, drawn))
    }

    /// Samples until a legal action for either card turns up.
    ///
    /// Returns `None` only when the view gives its seat no turn, in which
    /// case no proposal could ever succeed.
    pub fn sample<R: Rng>(view: &View, drawn: Card, rng: &mut R) -> Option<Action> {
        let held = view.hand()?;
        if view.is_over() || view.actor() != view.seat() {
            return None;
        }
        loop {
            let card = if rng.random_bool(FALLBACK_DRAWN_ODDS) {
                drawn
            } else {
                held
            };
            if let Some(action) = Self::propose(view, card, rng) {
                if view.is_legal(&action, drawn) {
                    return Some(action);
                }
            }
        }
    }

    fn propose<R: Rng>(view: &View, card: Card, rng: &mut R) -> Option<Action> {
        let actor = view.seat();
        let target = rng.random_range(0..view.n());
        let action = match card {
            Card::Guard => {
                let guess = Card::try_from(rng.random_range(2..=8u8)).ok()?;
                Action::guard(actor, target, guess)
            }
            Card::Priest => Action::priest(actor, target),
            Card::Baron => Action::baron(actor, target),
            Card::Handmaid => Action::handmaid(actor),
            Card::Prince => Action::prince(actor, target),
            Card::King => Action::king(actor, target),
            Card::Countess => Action::countess(actor),
            Card::Princess => return None,
        };
        action.ok()
    }
}
