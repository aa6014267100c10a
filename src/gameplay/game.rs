use super::*;
use crate::cards::*;
use crate::*;
use rand::Rng;

/// The complete state of one Love Letter round.
///
/// `Game` knows every card: the draw order of the deck, each seat's hand and
/// discards, the seat to act and the card it has drawn. It serves both as the
/// authoritative referee state and as a determinized hypothesis built from a
/// seat's [`View`]. All data is owned, so `clone` yields an independent copy
/// that can be mutated without affecting siblings.
///
/// # Turn structure
///
/// A turn is [`draw`](Self::draw) followed by [`apply`](Self::apply). Between
/// the two the actor holds two cards, its `hand` and the `drawn` card. The
/// round is over at a turn boundary once a single seat is left or fewer than
/// [`MIN_DECK`] cards remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    deck: Deck,
    seats: Vec<Seat>,
    actor: Position,
    drawn: Option<Card>,
}

/// Round entry points.
impl Game {
    /// Shuffles a fresh deck and deals one card to each of `n` seats.
    pub fn deal<R: Rng>(n: usize, first: Position, rng: &mut R) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (MIN_SEATS..=N).contains(&n),
            "{} seats outside {}..={}",
            n,
            MIN_SEATS,
            N
        );
        anyhow::ensure!(first < n, "first seat {} outside table of {}", first, n);
        let mut deck = Deck::shuffled(rng);
        let seats = (0..n)
            .filter_map(|_| deck.draw())
            .map(Seat::from)
            .collect();
        Ok(Self {
            deck,
            seats,
            actor: first,
            drawn: None,
        })
    }
    /// Assembles a state from explicit parts, with nothing drawn yet.
    ///
    /// No consistency check is performed; the caller vouches for the parts.
    pub fn new(seats: Vec<Seat>, deck: Deck, actor: Position) -> Self {
        Self {
            deck,
            seats,
            actor,
            drawn: None,
        }
    }
}

/// State accessors.
impl Game {
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, seat: Position) -> &Seat {
        &self.seats[seat]
    }
    pub fn hand(&self, seat: Position) -> Option<Card> {
        self.seats[seat].hand()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    /// The card the actor drew this turn, if it has drawn.
    pub fn drawn(&self) -> Option<Card> {
        self.drawn
    }
    /// The public snapshot available to `seat`.
    pub fn view(&self, seat: Position) -> View {
        View::from((self, seat))
    }
    /// Every card on the table: deck, hands, pending draw, discards.
    pub fn inventory(&self) -> Vec<Card> {
        let mut cards = self
            .deck
            .cards()
            .chain(self.drawn)
            .chain(self.seats.iter().filter_map(Seat::hand))
            .chain(self.seats.iter().flat_map(|s| s.discards().iter().copied()))
            .collect::<Vec<_>>();
        cards.sort();
        cards
    }
}

/// Turn transitions.
impl Game {
    /// The actor draws the top card. Its Handmaid protection lapses.
    pub fn draw(&mut self) -> Result<Card, IllegalAction> {
        if self.is_over() {
            return Err(IllegalAction::RoundOver);
        }
        if self.drawn.is_some() {
            return Err(IllegalAction::AlreadyDrawn);
        }
        let card = self.deck.draw().ok_or(IllegalAction::DeckEmpty)?;
        self.seats[self.actor].reset_protected(false);
        self.drawn = Some(card);
        Ok(card)
    }
    /// Validates and resolves the actor's play, then passes the turn.
    pub fn apply(&mut self, action: Action) -> Result<(), IllegalAction> {
        let drawn = self.drawn.ok_or(IllegalAction::NothingDrawn)?;
        let held = self
            .hand(self.actor)
            .ok_or(IllegalAction::Eliminated(self.actor))?;
        self.check(&action, held, drawn)?;
        if action.card() == Card::Prince && self.deck.size() == 0 {
            return Err(IllegalAction::DeckEmpty);
        }
        self.act(action, held, drawn);
        Ok(())
    }
    /// Returns a new state with the action applied, leaving `self` untouched.
    pub fn try_apply(&self, action: Action) -> Result<Self, IllegalAction> {
        let mut child = self.clone();
        child.apply(action)?;
        Ok(child)
    }
    /// Every legal action for the actor after drawing.
    pub fn legal(&self) -> Vec<Action> {
        let (Some(held), Some(drawn)) = (self.hand(self.actor), self.drawn) else {
            return vec![];
        };
        let mut cards = vec![held, drawn];
        cards.dedup();
        cards
            .into_iter()
            .flat_map(|c| Action::candidates(c, self.actor, self.n()))
            .filter(|a| self.try_apply(*a).is_ok())
            .collect()
    }
}

/// Card effects.
impl Game {
    fn act(&mut self, action: Action, held: Card, drawn: Card) {
        let actor = self.actor;
        let card = action.card();
        let kept = if card == drawn { held } else { drawn };
        self.drawn = None;
        self.seats[actor].reset_hand(Some(kept));
        self.seats[actor].discard(card);
        match (card, action.target()) {
            (Card::Guard, Some(target)) if target != actor => {
                if self.hand(target) == action.guess() {
                    self.seats[target].eliminate();
                }
            }
            (Card::Baron, Some(target)) if target != actor => self.duel(actor, target),
            (Card::Handmaid, _) => self.seats[actor].reset_protected(true),
            (Card::Prince, Some(target)) => self.redeal(target),
            (Card::King, Some(target)) if target != actor => {
                let theirs = self.hand(target);
                let ours = self.hand(actor);
                self.seats[target].reset_hand(ours);
                self.seats[actor].reset_hand(theirs);
            }
            _ => {}
        }
        log::trace!("{}", action);
        self.next_player();
    }
    /// Baron: the weaker hand leaves the round.
    fn duel(&mut self, actor: Position, target: Position) {
        let ours = self.hand(actor).map(|c| c.value());
        let theirs = self.hand(target).map(|c| c.value());
        match ours.cmp(&theirs) {
            std::cmp::Ordering::Less => self.seats[actor].eliminate(),
            std::cmp::Ordering::Greater => self.seats[target].eliminate(),
            std::cmp::Ordering::Equal => {}
        }
    }
    /// Prince: discard and replace, unless the discard was the Princess.
    fn redeal(&mut self, target: Position) {
        match self.hand(target) {
            Some(Card::Princess) => self.seats[target].eliminate(),
            Some(card) => {
                let next = self.deck.draw();
                self.seats[target].discard(card);
                self.seats[target].reset_hand(next);
            }
            None => {}
        }
    }
    fn next_player(&mut self) {
        if self.live().is_empty() {
            return;
        }
        loop {
            self.actor = (self.actor + 1) % self.n();
            if !self.is_eliminated(self.actor) {
                break;
            }
        }
    }
}

/// Round results.
impl Game {
    /// Seats that win the round. Empty while the round is in progress.
    ///
    /// The last seat standing wins; otherwise the strongest hand, then the
    /// largest discard total. Remaining ties share the win.
    pub fn winners(&self) -> Vec<Position> {
        if !self.is_over() {
            return vec![];
        }
        let live = self.live();
        let rank = |s: &Position| (self.hand(*s), self.seats[*s].total());
        let best = live.iter().map(|s| rank(s)).max();
        live.iter().filter(|s| Some(rank(*s)) == best).copied().collect()
    }
    /// [`WINNER`] if `seat` won the round, zero otherwise.
    pub fn score(&self, seat: Position) -> u8 {
        if self.winners().contains(&seat) {
            WINNER
        } else {
            0
        }
    }
}

impl Public for Game {
    fn n(&self) -> usize {
        self.seats.len()
    }
    fn actor(&self) -> Position {
        self.actor
    }
    fn is_over(&self) -> bool {
        self.drawn.is_none() && (self.live().len() <= 1 || self.deck.size() < MIN_DECK)
    }
    fn is_eliminated(&self, seat: Position) -> bool {
        self.seats[seat].eliminated()
    }
    fn is_protected(&self, seat: Position) -> bool {
        self.seats[seat].protected()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "deck {:>2}  actor {}", self.deck.size(), self.actor)?;
        for (i, seat) in self.seats.iter().enumerate() {
            let hand = seat
                .hand()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "--".to_string());
            let discards = seat
                .discards()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let flag = if seat.protected() { "*" } else { " " };
            writeln!(f, "{}{} {:<9} | {}", i, flag, hand, discards)?;
        }
        Ok(())
    }
}

/// Builds a game with the given hands and the given cards on top of the
/// deck; every other card follows in rank order. Seat 0 acts first.
#[cfg(test)]
pub(crate) fn arranged(hands: &[Card], top: &[Card]) -> Game {
    let mut rest = Card::deck();
    for card in hands.iter().chain(top) {
        let i = rest.iter().position(|c| c == card).expect("card available");
        rest.remove(i);
    }
    let deck = top.iter().copied().chain(rest).collect::<Vec<_>>();
    let seats = hands.iter().copied().map(Seat::from).collect();
    Game::new(seats, Deck::from(deck), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    #[test]
    fn deal_one_card_each() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let game = Game::deal(4, 0, rng).unwrap();
        assert_eq!(game.deck().size(), DECK_SIZE - 4);
        assert!(game.seats().iter().all(|s| s.hand().is_some()));
        assert_eq!(game.inventory(), Card::deck());
        assert!(!game.is_over());
    }

    #[test]
    fn deal_rejects_bad_tables() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!(Game::deal(1, 0, rng).is_err());
        assert!(Game::deal(5, 0, rng).is_err());
        assert!(Game::deal(3, 3, rng).is_err());
    }

    #[test]
    fn guard_eliminates_on_correct_guess() {
        let mut game = arranged(&[Card::Priest, Card::King, Card::Baron], &[Card::Guard]);
        game.draw().unwrap();
        game.apply(Action::guard(0, 1, Card::King).unwrap()).unwrap();
        assert!(game.is_eliminated(1));
        assert_eq!(game.seat(1).discards(), &[Card::King]);
        assert_eq!(game.hand(0), Some(Card::Priest));
        assert_eq!(game.actor(), 2);
    }

    #[test]
    fn guard_misses_on_wrong_guess() {
        let mut game = arranged(&[Card::Priest, Card::King], &[Card::Guard]);
        game.draw().unwrap();
        game.apply(Action::guard(0, 1, Card::Baron).unwrap()).unwrap();
        assert!(!game.is_eliminated(1));
        assert_eq!(game.actor(), 1);
    }

    #[test]
    fn baron_eliminates_weaker_hand() {
        let mut game = arranged(&[Card::King, Card::Priest], &[Card::Baron]);
        game.draw().unwrap();
        game.apply(Action::baron(0, 1).unwrap()).unwrap();
        assert!(game.is_eliminated(1));
        assert!(game.is_over());
        assert_eq!(game.winners(), vec![0]);
        assert_eq!(game.score(0), WINNER);
        assert_eq!(game.score(1), 0);
    }

    #[test]
    fn baron_loser_can_be_the_actor() {
        let mut game = arranged(&[Card::Guard, Card::Prince, Card::Handmaid], &[Card::Baron]);
        game.draw().unwrap();
        game.apply(Action::baron(0, 1).unwrap()).unwrap();
        assert!(game.is_eliminated(0));
        assert_eq!(game.seat(0).discards(), &[Card::Baron, Card::Guard]);
        assert_eq!(game.actor(), 1);
    }

    #[test]
    fn handmaid_protects_until_next_turn() {
        let mut game = arranged(&[Card::Guard, Card::Priest], &[Card::Handmaid, Card::Guard]);
        game.draw().unwrap();
        game.apply(Action::handmaid(0).unwrap()).unwrap();
        assert!(game.is_protected(0));
        game.draw().unwrap();
        assert_eq!(
            game.try_apply(Action::priest(1, 0).unwrap()),
            Err(IllegalAction::Protected(0))
        );
        // every other seat is protected, so targeting oneself is allowed
        assert!(game.try_apply(Action::priest(1, 1).unwrap()).is_ok());
    }

    #[test]
    fn self_target_needs_cover() {
        let mut game = arranged(&[Card::Guard, Card::Priest], &[Card::Baron]);
        game.draw().unwrap();
        assert_eq!(
            game.try_apply(Action::baron(0, 0).unwrap()),
            Err(IllegalAction::SelfTarget(Card::Baron))
        );
    }

    #[test]
    fn prince_redeals_target() {
        let mut game = arranged(&[Card::Guard, Card::Baron], &[Card::Prince, Card::King]);
        game.draw().unwrap();
        game.apply(Action::prince(0, 1).unwrap()).unwrap();
        assert_eq!(game.seat(1).discards(), &[Card::Baron]);
        assert_eq!(game.hand(1), Some(Card::King));
        assert_eq!(game.inventory(), Card::deck());
    }

    #[test]
    fn prince_on_princess_eliminates() {
        let mut game = arranged(&[Card::Guard, Card::Princess], &[Card::Prince]);
        game.draw().unwrap();
        game.apply(Action::prince(0, 1).unwrap()).unwrap();
        assert!(game.is_eliminated(1));
        assert_eq!(game.winners(), vec![0]);
    }

    #[test]
    fn king_swaps_hands() {
        let mut game = arranged(&[Card::Guard, Card::Baron], &[Card::King]);
        game.draw().unwrap();
        game.apply(Action::king(0, 1).unwrap()).unwrap();
        assert_eq!(game.hand(0), Some(Card::Baron));
        assert_eq!(game.hand(1), Some(Card::Guard));
    }

    #[test]
    fn countess_forbids_royals() {
        let mut game = arranged(&[Card::Countess, Card::Guard], &[Card::King]);
        game.draw().unwrap();
        assert_eq!(
            game.try_apply(Action::king(0, 1).unwrap()),
            Err(IllegalAction::Countess(Card::King))
        );
        assert_eq!(game.legal(), vec![Action::countess(0).unwrap()]);
    }

    #[test]
    fn turn_order_is_enforced() {
        let mut game = arranged(&[Card::Guard, Card::Priest], &[Card::Baron]);
        assert_eq!(
            game.apply(Action::baron(0, 1).unwrap()),
            Err(IllegalAction::NothingDrawn)
        );
        game.draw().unwrap();
        assert_eq!(game.draw(), Err(IllegalAction::AlreadyDrawn));
        assert_eq!(
            game.apply(Action::priest(1, 0).unwrap()),
            Err(IllegalAction::OutOfTurn(1))
        );
        assert_eq!(
            game.apply(Action::king(0, 1).unwrap()),
            Err(IllegalAction::NotHeld(Card::King))
        );
    }

    #[test]
    fn showdown_when_deck_runs_low() {
        let mut deck = Card::deck();
        deck.retain(|c| *c == Card::Guard);
        deck.truncate(2);
        let seats = vec![Seat::from(Card::King), Seat::from(Card::Princess)];
        let mut game = Game::new(seats, Deck::from(deck), 0);
        game.draw().unwrap();
        game.apply(Action::guard(0, 1, Card::Priest).unwrap()).unwrap();
        assert!(game.is_over());
        assert_eq!(game.draw(), Err(IllegalAction::RoundOver));
        assert_eq!(game.winners(), vec![1]);
    }

    #[test]
    fn random_rounds_conserve_cards() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        for n in MIN_SEATS..=N {
            for _ in 0..64 {
                let mut game = Game::deal(n, 0, rng).unwrap();
                while !game.is_over() {
                    game.draw().unwrap();
                    let action = *game.legal().choose(rng).expect("some legal action");
                    game.apply(action).unwrap();
                    assert_eq!(game.inventory(), Card::deck());
                    assert!(game
                        .seats()
                        .iter()
                        .all(|s| s.eliminated() == s.hand().is_none()));
                }
                assert!(!game.winners().is_empty());
            }
        }
    }
}
