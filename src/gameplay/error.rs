use crate::Position;
use crate::cards::Card;

/// An action whose shape does not fit its rank.
///
/// Raised by the [`Action`](super::Action) factories before any game state
/// is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAction {
    TargetRequired(Card),
    TargetForbidden(Card),
    GuessRequired,
    GuessForbidden(Card),
    GuardGuess,
    Unplayable(Card),
}

impl std::fmt::Display for InvalidAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetRequired(c) => write!(f, "{} needs a target", c),
            Self::TargetForbidden(c) => write!(f, "{} takes no target", c),
            Self::GuessRequired => write!(f, "Guard needs a guess"),
            Self::GuessForbidden(c) => write!(f, "{} takes no guess", c),
            Self::GuardGuess => write!(f, "Guard may not guess Guard"),
            Self::Unplayable(c) => write!(f, "{} is never played", c),
        }
    }
}

impl std::error::Error for InvalidAction {}

/// A well-formed action that the rules reject in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalAction {
    RoundOver,
    OutOfTurn(Position),
    NotHeld(Card),
    Countess(Card),
    OutOfRange(Position),
    Eliminated(Position),
    Protected(Position),
    SelfTarget(Card),
    NothingDrawn,
    AlreadyDrawn,
    DeckEmpty,
    NoLegalPlay(Card),
}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundOver => write!(f, "round is over"),
            Self::OutOfTurn(p) => write!(f, "seat {} is not to act", p),
            Self::NotHeld(c) => write!(f, "{} is not in hand", c),
            Self::Countess(c) => write!(f, "{} may not be played beside the Countess", c),
            Self::OutOfRange(p) => write!(f, "no seat {}", p),
            Self::Eliminated(p) => write!(f, "seat {} is eliminated", p),
            Self::Protected(p) => write!(f, "seat {} is protected", p),
            Self::SelfTarget(c) => write!(f, "{} may not target its player", c),
            Self::NothingDrawn => write!(f, "no card drawn this turn"),
            Self::AlreadyDrawn => write!(f, "card already drawn this turn"),
            Self::DeckEmpty => write!(f, "deck is empty"),
            Self::NoLegalPlay(c) => write!(f, "no legal way to play {}", c),
        }
    }
}

impl std::error::Error for IllegalAction {}
