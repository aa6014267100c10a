use super::*;
use crate::Position;
use crate::cards::Card;

/// What one seat can see of a round.
///
/// A read-only snapshot produced by the rule engine after every action.
/// Everything here is public except the observer's own held card.
/// Cards the observer has not seen (the deck, opponents' hands, and the
/// observer's own pending draw) are summarized by [`View::unseen`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct View {
    seat: Position,
    actor: Position,
    over: bool,
    hand: Option<Card>,
    eliminated: Vec<bool>,
    protected: Vec<bool>,
    discards: Vec<Vec<Card>>,
    deck: usize,
}

impl From<(&Game, Position)> for View {
    fn from((game, seat): (&Game, Position)) -> Self {
        Self {
            seat,
            actor: game.actor(),
            over: game.is_over(),
            hand: game.hand(seat),
            eliminated: game.seats().iter().map(Seat::eliminated).collect(),
            protected: game.seats().iter().map(Seat::protected).collect(),
            discards: game.seats().iter().map(|s| s.discards().to_vec()).collect(),
            deck: game.deck().size(),
        }
    }
}

impl View {
    /// The observing seat.
    pub fn seat(&self) -> Position {
        self.seat
    }
    /// The observer's held card, if still in the round.
    pub fn hand(&self) -> Option<Card> {
        self.hand
    }
    /// Cards left in the deck.
    pub fn deck(&self) -> usize {
        self.deck
    }
    /// A seat's discard history, oldest first.
    pub fn discards(&self, seat: Position) -> &[Card] {
        &self.discards[seat]
    }
    /// Cards the observer has not seen: the full deck less every discard
    /// and less the observer's own hand.
    pub fn unseen(&self) -> Vec<Card> {
        let mut unseen = Card::deck();
        for card in self.discards.iter().flatten().chain(self.hand.iter()) {
            if let Some(i) = unseen.iter().position(|c| c == card) {
                unseen.swap_remove(i);
            }
        }
        unseen.sort();
        unseen
    }
    /// True if the observer, having drawn `drawn`, may play `action`.
    pub fn is_legal(&self, action: &Action, drawn: Card) -> bool {
        self.hand
            .map(|held| self.check(action, held, drawn).is_ok())
            .unwrap_or(false)
    }
}

impl Public for View {
    fn n(&self) -> usize {
        self.eliminated.len()
    }
    fn actor(&self) -> Position {
        self.actor
    }
    fn is_over(&self) -> bool {
        self.over
    }
    fn is_eliminated(&self, seat: Position) -> bool {
        self.eliminated[seat]
    }
    fn is_protected(&self, seat: Position) -> bool {
        self.protected[seat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DECK_SIZE;

    #[test]
    fn unseen_excludes_discards_and_hand() {
        let mut game = arranged(&[Card::Priest, Card::King], &[Card::Guard]);
        game.draw().unwrap();
        game.apply(Action::guard(0, 1, Card::Baron).unwrap()).unwrap();
        let view = game.view(1);
        let unseen = view.unseen();
        assert_eq!(unseen.len(), DECK_SIZE - 2);
        assert!(!unseen.contains(&Card::King));
        assert_eq!(unseen.iter().filter(|c| **c == Card::Guard).count(), 4);
        assert_eq!(view.discards(0), &[Card::Guard]);
    }

    #[test]
    fn hides_other_hands() {
        let game = arranged(&[Card::Priest, Card::King], &[]);
        let view = game.view(0);
        assert_eq!(view.hand(), Some(Card::Priest));
        assert!(view.unseen().contains(&Card::King));
    }

    #[test]
    fn legality_matches_engine() {
        let mut game = arranged(&[Card::Countess, Card::Guard, Card::Baron], &[Card::Prince]);
        let view = game.view(0);
        let drawn = game.draw().unwrap();
        for card in [Card::Countess, Card::Prince] {
            for action in Action::candidates(card, 0, 3) {
                assert_eq!(view.is_legal(&action, drawn), game.try_apply(action).is_ok());
            }
        }
        assert!(!view.is_legal(&Action::prince(0, 1).unwrap(), drawn));
        assert!(view.is_legal(&Action::countess(0).unwrap(), drawn));
    }
}
