use crate::cards::Card;

/// Which of the actor's two cards a branch plays.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Drawn,
    Held,
}

impl Choice {
    /// The card this choice plays.
    pub fn card(&self, held: Card, drawn: Card) -> Card {
        match self {
            Choice::Drawn => drawn,
            Choice::Held => held,
        }
    }
    /// The only permitted choice when the pair of cards forces one.
    ///
    /// 1. A drawn Princess forces the held card.
    /// 2. A held Princess forces the drawn card.
    /// 3. The Countess beside a Prince or King forces the Countess.
    pub fn forced(held: Card, drawn: Card) -> Option<Self> {
        if drawn == Card::Princess {
            Some(Choice::Held)
        } else if held == Card::Princess {
            Some(Choice::Drawn)
        } else if drawn == Card::Countess && held.is_royal() {
            Some(Choice::Drawn)
        } else if held == Card::Countess && drawn.is_royal() {
            Some(Choice::Held)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Drawn => write!(f, "drawn"),
            Choice::Held => write!(f, "held"),
        }
    }
}
