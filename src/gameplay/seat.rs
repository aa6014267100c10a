use crate::cards::Card;

/// A player's state within one round.
///
/// The held card is private information; everything else is public.
/// An eliminated seat holds nothing, its last card having joined its
/// discard pile.
///
/// # Fields
///
/// - `hand`: Held card between turns (private)
/// - `discards`: Cards played or discarded this round, oldest first
/// - `protected`: Handmaid in effect until the seat's next turn
/// - `eliminated`: Out of the round
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seat {
    hand: Option<Card>,
    discards: Vec<Card>,
    protected: bool,
    eliminated: bool,
}

impl From<Card> for Seat {
    fn from(card: Card) -> Self {
        Self {
            hand: Some(card),
            discards: Vec::new(),
            protected: false,
            eliminated: false,
        }
    }
}

impl Seat {
    /// A seat rebuilt from public facts and a hypothesized hand.
    pub fn hypothesis(hand: Option<Card>, discards: Vec<Card>, protected: bool) -> Self {
        Self {
            eliminated: hand.is_none(),
            hand,
            discards,
            protected,
        }
    }
    pub fn hand(&self) -> Option<Card> {
        self.hand
    }
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }
    pub fn protected(&self) -> bool {
        self.protected
    }
    pub fn eliminated(&self) -> bool {
        self.eliminated
    }
    /// Sum of discarded strengths, the showdown tiebreaker.
    pub fn total(&self) -> u32 {
        self.discards.iter().map(|c| c.value() as u32).sum()
    }
    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }
    pub fn reset_hand(&mut self, card: Option<Card>) {
        self.hand = card;
    }
    pub fn reset_protected(&mut self, protected: bool) {
        self.protected = protected;
    }
    /// Leaves the round, discarding whatever is held.
    pub fn eliminate(&mut self) {
        if let Some(card) = self.hand.take() {
            self.discards.push(card);
        }
        self.protected = false;
        self.eliminated = true;
    }
}
