use super::*;
use crate::cards::Card;
use crate::gameplay::*;
use crate::players::Rollout;
use rand::rngs::SmallRng;

/// One decision's worth of determinized search.
///
/// Each iteration samples a hidden state from the view, seeds a rollout
/// policy per seat, draws the observer's card, then expands and settles
/// a fresh root. Iterations that fail are logged and skipped.
pub struct Search<'a> {
    view: &'a View,
    drawn: Card,
    config: Config,
}

impl<'a> Search<'a> {
    pub fn new(view: &'a View, drawn: Card, config: Config) -> Self {
        Self {
            view,
            drawn,
            config,
        }
    }

    /// Runs every iteration and aggregates the root's children.
    pub fn run<R: Rollout>(&self, rng: &mut SmallRng) -> Tally {
        let mut tally = Tally::default();
        for i in 0..self.config.determinizations() {
            match self.iterate::<R>(rng) {
                Ok(tree) => tally.record(&tree),
                Err(e) => log::debug!("determinization {} abandoned: {}", i, e),
            }
        }
        log::debug!("seat {} drew {} | {}", self.view.seat(), self.drawn, tally);
        tally
    }

    /// A single determinization, expanded one ply.
    pub fn iterate<R: Rollout>(&self, rng: &mut SmallRng) -> Result<Tree, SearchError> {
        let mut game = Determinizer::sample(self.view, self.drawn, rng)?;
        let mut policies = (0..game.n())
            .map(|seat| {
                let mut policy = R::default();
                policy.reset(seat, game.hand(seat));
                policy
            })
            .collect::<Vec<R>>();
        let top = game.draw()?;
        if top != self.drawn {
            return Err(SearchError::Inconsistent(format!(
                "drew {} instead of {}",
                top, self.drawn
            )));
        }
        let mut tree = Tree::new(game);
        let root = tree.root();
        expand(&mut tree, root, &mut policies, self.view.seat(), rng)?;
        Ok(tree)
    }
}
