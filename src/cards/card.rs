/// A Love Letter card rank.
///
/// The discriminant is the card's strength, `1..=8`, used both for
/// comparisons (Baron duels, end-of-round showdowns) and for sampling
/// ranges (Guard guesses). The deck holds [`Card::count`] copies of each
/// rank, sixteen cards in total.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    Guard = 1,
    Priest = 2,
    Baron = 3,
    Handmaid = 4,
    Prince = 5,
    King = 6,
    Countess = 7,
    Princess = 8,
}

impl Card {
    /// Every rank, weakest first.
    pub const fn all() -> [Self; 8] {
        [
            Card::Guard,
            Card::Priest,
            Card::Baron,
            Card::Handmaid,
            Card::Prince,
            Card::King,
            Card::Countess,
            Card::Princess,
        ]
    }
    /// Ranks a Guard may name.
    pub fn guesses() -> impl Iterator<Item = Self> {
        Self::all().into_iter().filter(|c| *c != Card::Guard)
    }
    /// Strength of the card.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
    /// Copies of this rank in a full deck.
    pub const fn count(&self) -> usize {
        match self {
            Card::Guard => 5,
            Card::Priest => 2,
            Card::Baron => 2,
            Card::Handmaid => 2,
            Card::Prince => 2,
            Card::King => 1,
            Card::Countess => 1,
            Card::Princess => 1,
        }
    }
    /// True if playing this card requires naming a target seat.
    pub const fn is_targeted(&self) -> bool {
        matches!(
            self,
            Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
        )
    }
    /// True if holding the Countess alongside this card forces the Countess out.
    pub const fn is_royal(&self) -> bool {
        matches!(self, Card::Prince | Card::King)
    }
    /// The full sixteen-card multiset, sorted by rank.
    pub fn deck() -> Vec<Self> {
        Self::all()
            .into_iter()
            .flat_map(|c| std::iter::repeat_n(c, c.count()))
            .collect()
    }
}

/// u8 isomorphism over strengths `1..=8`
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| c.value() == n)
            .ok_or_else(|| format!("no card of strength {}", n))
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Card::Guard => "Guard",
                Card::Priest => "Priest",
                Card::Baron => "Baron",
                Card::Handmaid => "Handmaid",
                Card::Prince => "Prince",
                Card::King => "King",
                Card::Countess => "Countess",
                Card::Princess => "Princess",
            }
        )
    }
}
