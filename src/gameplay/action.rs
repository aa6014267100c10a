use super::*;
use crate::Position;
use crate::cards::Card;

/// A request to play one card.
///
/// Tagged by the rank played, the acting seat, an optional target seat and,
/// for the Guard only, a guessed rank. Instances can only be built through
/// the rank factories, which reject shapes that do not fit the rank.
/// Whether the action is legal in some state is for the rules to decide.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    card: Card,
    actor: Position,
    target: Option<Position>,
    guess: Option<Card>,
}

/// Rank factories.
impl Action {
    pub fn guard(actor: Position, target: Position, guess: Card) -> Result<Self, InvalidAction> {
        Self::new(Card::Guard, actor, Some(target), Some(guess))
    }
    pub fn priest(actor: Position, target: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::Priest, actor, Some(target), None)
    }
    pub fn baron(actor: Position, target: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::Baron, actor, Some(target), None)
    }
    pub fn handmaid(actor: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::Handmaid, actor, None, None)
    }
    pub fn prince(actor: Position, target: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::Prince, actor, Some(target), None)
    }
    pub fn king(actor: Position, target: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::King, actor, Some(target), None)
    }
    pub fn countess(actor: Position) -> Result<Self, InvalidAction> {
        Self::new(Card::Countess, actor, None, None)
    }
    /// Shape-checked constructor shared by every factory.
    pub fn new(
        card: Card,
        actor: Position,
        target: Option<Position>,
        guess: Option<Card>,
    ) -> Result<Self, InvalidAction> {
        match (card, target, guess) {
            (Card::Princess, _, _) => Err(InvalidAction::Unplayable(card)),
            (Card::Guard, None, _) => Err(InvalidAction::TargetRequired(card)),
            (Card::Guard, Some(_), None) => Err(InvalidAction::GuessRequired),
            (Card::Guard, Some(_), Some(Card::Guard)) => Err(InvalidAction::GuardGuess),
            (_, _, Some(_)) if card != Card::Guard => Err(InvalidAction::GuessForbidden(card)),
            (_, None, _) if card.is_targeted() => Err(InvalidAction::TargetRequired(card)),
            (_, Some(_), _) if !card.is_targeted() => Err(InvalidAction::TargetForbidden(card)),
            _ => Ok(Self {
                card,
                actor,
                target,
                guess,
            }),
        }
    }
    /// Every well-formed way for `actor` to play `card` at a table of `n` seats.
    ///
    /// Legality is not checked; filter through the rules before use.
    pub fn candidates(card: Card, actor: Position, n: usize) -> Vec<Self> {
        match card {
            Card::Princess => vec![],
            Card::Handmaid | Card::Countess => Self::new(card, actor, None, None)
                .into_iter()
                .collect(),
            Card::Guard => (0..n)
                .flat_map(|t| Card::guesses().map(move |g| (t, g)))
                .filter_map(|(t, g)| Self::guard(actor, t, g).ok())
                .collect(),
            _ => (0..n)
                .filter_map(|t| Self::new(card, actor, Some(t), None).ok())
                .collect(),
        }
    }
}

/// Accessors.
impl Action {
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn actor(&self) -> Position {
        self.actor
    }
    pub fn target(&self) -> Option<Position> {
        self.target
    }
    pub fn guess(&self) -> Option<Card> {
        self.guess
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.actor, self.card)?;
        if let Some(target) = self.target {
            write!(f, " -> {}", target)?;
        }
        if let Some(guess) = self.guess {
            write!(f, " ({})", guess)?;
        }
        Ok(())
    }
}
