use super::*;
use crate::gameplay::*;
use crate::players::Player;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Referee for rounds between boxed players.
///
/// Holds the single source of truth for each round, asks the seat to act
/// for a decision with its own [`Round`] context, and lets every seat observe
/// the action and its refreshed view.
pub struct Table {
    players: Vec<Box<dyn Player>>,
    rng: SmallRng,
}

impl Table {
    pub fn new(players: Vec<Box<dyn Player>>, seed: u64) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (MIN_SEATS..=N).contains(&players.len()),
            "{} players outside {}..={}",
            players.len(),
            MIN_SEATS,
            N
        );
        Ok(Self {
            players,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
    pub fn n(&self) -> usize {
        self.players.len()
    }

    /// Plays one round with `first` to act and returns its winners.
    pub fn play(&mut self, first: Position) -> anyhow::Result<Vec<Position>> {
        let mut game = Game::deal(self.n(), first, &mut self.rng)?;
        let mut rounds = (0..self.n())
            .map(|seat| Round::from(game.view(seat)))
            .collect::<Vec<_>>();
        while !game.is_over() {
            let actor = game.actor();
            let drawn = game.draw()?;
            let action = self.players[actor].decide(&rounds[actor], drawn);
            game.apply(action)
                .map_err(|e| anyhow::anyhow!("seat {} played {}: {}", actor, action, e))?;
            log::trace!("{}", action);
            rounds
                .iter_mut()
                .enumerate()
                .for_each(|(seat, round)| round.observe(action, game.view(seat)));
        }
        let winners = game.winners();
        log::debug!("round won by {:?}\n{}", winners, game);
        Ok(winners)
    }

    /// Plays `rounds` rounds, rotating the first seat.
    pub fn run(&mut self, rounds: usize) -> anyhow::Result<Scoreboard> {
        let mut scoreboard = Scoreboard::new(self.n());
        for i in 0..rounds {
            let winners = self.play(i % self.n())?;
            scoreboard.record(&winners);
            if (i + 1) % 100 == 0 {
                log::info!("{:>6} rounds | {}", i + 1, scoreboard);
            }
        }
        Ok(scoreboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::mcts::Config;
    use crate::players::*;

    /// Plays the first shape-valid action for the drawn card, legal or not.
    struct Cheat;
    impl Player for Cheat {
        fn decide(&mut self, round: &Round, drawn: Card) -> Action {
            Action::candidates(drawn, round.seat(), 2)
                .first()
                .copied()
                .unwrap_or(Action::countess(round.seat()).unwrap())
        }
    }

    fn fish(n: usize) -> Vec<Box<dyn Player>> {
        (0..n)
            .map(|i| Box::new(Fish::from(i as u64)) as Box<dyn Player>)
            .collect()
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(Table::new(fish(1), 0).is_err());
        assert!(Table::new(fish(5), 0).is_err());
    }

    #[test]
    fn every_round_has_a_winner() {
        for n in MIN_SEATS..=N {
            let mut table = Table::new(fish(n), 3).unwrap();
            let scoreboard = table.run(50).unwrap();
            assert_eq!(scoreboard.rounds(), 50);
            assert!((0..n).map(|s| scoreboard.wins(s)).sum::<usize>() >= 50);
        }
    }

    #[test]
    fn illegal_plays_end_the_round() {
        let players: Vec<Box<dyn Player>> = vec![Box::new(Cheat), Box::new(Cheat)];
        let mut table = Table::new(players, 0).unwrap();
        assert!((0..32).map(|_| table.play(0)).any(|r| r.is_err()));
    }

    #[test]
    fn search_agent_completes_rounds() {
        let config = Config::default().with_determinizations(4);
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(Monte::<Fish>::from(config)),
            Box::new(Fish::from(1)),
            Box::new(Fish::from(2)),
        ];
        let mut table = Table::new(players, 17).unwrap();
        let scoreboard = table.run(30).unwrap();
        assert_eq!(scoreboard.rounds(), 30);
        assert!((0..3).map(|s| scoreboard.wins(s)).sum::<usize>() >= 30);
    }
}
