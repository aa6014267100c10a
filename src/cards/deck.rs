use super::card::Card;
use crate::DECK_SIZE;
use rand::Rng;
use rand::seq::SliceRandom;

/// The face-down draw pile.
///
/// Cards are kept in draw order with the top of the deck at the end of the
/// underlying vector, so drawing is a pop. The position of the next draw in
/// the original sixteen-card order is [`Deck::top`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A full deck shuffled uniformly.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Card::deck();
        cards.shuffle(rng);
        Self(cards)
    }
    /// Cards remaining.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Position of the next draw counted from the start of the round.
    pub fn top(&self) -> usize {
        DECK_SIZE - self.size()
    }
    /// The next card to be drawn, if any.
    pub fn peek(&self) -> Option<Card> {
        self.0.last().copied()
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Remaining cards in draw order, top first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().rev().copied()
    }
}

/// Draw order isomorphism. The first card is the top of the deck.
impl From<Vec<Card>> for Deck {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards().collect()
    }
}
