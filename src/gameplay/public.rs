use super::*;
use crate::Position;
use crate::cards::Card;

/// Publicly observable table state and the rules that depend only on it.
///
/// Both the authoritative [`Game`] and a seat's [`View`] expose the same
/// public facts, so legality is decided once, here, given the acting seat's
/// two cards.
pub trait Public {
    /// Number of seats.
    fn n(&self) -> usize;
    /// The seat to act.
    fn actor(&self) -> Position;
    /// True once the round has been decided.
    fn is_over(&self) -> bool;
    /// True if the seat is out of the round.
    fn is_eliminated(&self, seat: Position) -> bool;
    /// True if the seat played a Handmaid since its last turn.
    fn is_protected(&self, seat: Position) -> bool;

    /// Seats still in the round.
    fn live(&self) -> Vec<Position> {
        (0..self.n()).filter(|s| !self.is_eliminated(*s)).collect()
    }
    /// True if some other live seat may be targeted by `seat`.
    fn is_exposed(&self, seat: Position) -> bool {
        self.live()
            .into_iter()
            .filter(|s| *s != seat)
            .any(|s| !self.is_protected(s))
    }
    /// Checks `action` for the seat to act holding `held` and having drawn `drawn`.
    fn check(&self, action: &Action, held: Card, drawn: Card) -> Result<(), IllegalAction> {
        let card = action.card();
        let actor = action.actor();
        if self.is_over() {
            return Err(IllegalAction::RoundOver);
        }
        if actor != self.actor() {
            return Err(IllegalAction::OutOfTurn(actor));
        }
        if card != held && card != drawn {
            return Err(IllegalAction::NotHeld(card));
        }
        if card.is_royal() && (held == Card::Countess || drawn == Card::Countess) {
            return Err(IllegalAction::Countess(card));
        }
        if let Some(target) = action.target() {
            if target >= self.n() {
                return Err(IllegalAction::OutOfRange(target));
            }
            if self.is_eliminated(target) {
                return Err(IllegalAction::Eliminated(target));
            }
            if target != actor && self.is_protected(target) {
                return Err(IllegalAction::Protected(target));
            }
            if target == actor && card != Card::Prince && self.is_exposed(actor) {
                return Err(IllegalAction::SelfTarget(card));
            }
        }
        Ok(())
    }
}
