use crate::*;

/// Win counts accumulated over many rounds.
///
/// Shared wins credit every tied seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    rounds: usize,
    wins: Vec<usize>,
}

impl Scoreboard {
    pub fn new(n: usize) -> Self {
        Self {
            rounds: 0,
            wins: vec![0; n],
        }
    }
    pub fn record(&mut self, winners: &[Position]) {
        self.rounds += 1;
        for seat in winners {
            if let Some(wins) = self.wins.get_mut(*seat) {
                *wins += 1;
            }
        }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn wins(&self, seat: Position) -> usize {
        self.wins.get(seat).copied().unwrap_or(0)
    }
    /// Fraction of rounds won by `seat`.
    pub fn share(&self, seat: Position) -> Probability {
        if self.rounds == 0 {
            0.
        } else {
            self.wins(seat) as Probability / self.rounds as Probability
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let shares = (0..self.wins.len())
            .map(|s| format!("P{} {:>5.1}%", s, 100. * self.share(s)))
            .collect::<Vec<_>>()
            .join("  ");
        write!(f, "{}", shares)
    }
}
