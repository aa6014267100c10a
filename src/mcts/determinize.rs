use super::*;
use crate::cards::*;
use crate::gameplay::*;
use rand::Rng;
use rand::seq::SliceRandom;

/// Samples a concrete state consistent with what one seat has observed.
///
/// The observer is the seat to act and has just drawn a card. Every card it
/// has not seen, less that drawn card, is shuffled and dealt one to each live
/// opponent with the remainder forming the deck beneath the drawn card. Public
/// facts (discards, protection, elimination) are copied from the view. The
/// result is a hypothesis, not a validated position.
pub struct Determinizer;

impl Determinizer {
    pub fn sample<R: Rng>(view: &View, drawn: Card, rng: &mut R) -> Result<Game, SearchError> {
        let seat = view.seat();
        if view.actor() != seat {
            return Err(SearchError::Inconsistent(format!(
                "seat {} sampling on seat {}'s turn",
                seat,
                view.actor()
            )));
        }
        let held = view
            .hand()
            .ok_or_else(|| SearchError::Inconsistent(format!("seat {} holds nothing", seat)))?;
        let mut hidden = view.unseen();
        let i = hidden
            .iter()
            .position(|c| *c == drawn)
            .ok_or_else(|| SearchError::Inconsistent(format!("{} drawn but not unseen", drawn)))?;
        hidden.remove(i);
        let opponents = view
            .live()
            .into_iter()
            .filter(|s| *s != seat)
            .collect::<Vec<_>>();
        if view.deck() == 0 || hidden.len() != opponents.len() + view.deck() - 1 {
            return Err(SearchError::Inconsistent(format!(
                "{} hidden cards for {} opponents and a deck of {}",
                hidden.len(),
                opponents.len(),
                view.deck()
            )));
        }
        hidden.shuffle(rng);
        let mut hidden = hidden.into_iter();
        let seats = (0..view.n())
            .map(|s| {
                let hand = if s == seat {
                    Some(held)
                } else if view.is_eliminated(s) {
                    None
                } else {
                    hidden.next()
                };
                Seat::hypothesis(hand, view.discards(s).to_vec(), view.is_protected(s))
            })
            .collect::<Vec<_>>();
        let deck = std::iter::once(drawn).chain(hidden).collect::<Vec<_>>();
        let game = Game::new(seats, Deck::from(deck), seat);
        log::trace!("determinized\n{}", game);
        Ok(game)
    }
}
