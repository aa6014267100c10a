use super::*;
use crate::Utility;
use std::collections::BTreeMap;

/// Per-choice statistics summed across determinizations.
///
/// Only populated, settled children contribute. Excluded siblings and
/// abandoned iterations never reach the tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally(BTreeMap<Choice, (u32, u32)>);

impl Tally {
    /// Adds the statistics of the root's children.
    pub fn record(&mut self, tree: &Tree) {
        for child in tree.children(tree.root()) {
            if child.is_excluded() || child.visits() == 0 {
                continue;
            }
            if let Some(choice) = child.choice() {
                let (score, visits) = self.0.entry(choice).or_default();
                *score += child.score();
                *visits += child.visits();
            }
        }
    }
    pub fn visits(&self, choice: Choice) -> u32 {
        self.0.get(&choice).map(|(_, v)| *v).unwrap_or(0)
    }
    /// Win rate of a choice, if it was ever visited.
    pub fn rate(&self, choice: Choice) -> Option<Utility> {
        self.0
            .get(&choice)
            .filter(|(_, v)| *v > 0)
            .map(|(s, v)| *s as Utility / *v as Utility)
    }
    /// The choice with the better win rate. Ties go to the drawn card.
    pub fn best(&self) -> Choice {
        match (self.rate(Choice::Drawn), self.rate(Choice::Held)) {
            (None, Some(_)) => Choice::Held,
            (Some(d), Some(h)) if h > d => Choice::Held,
            _ => Choice::Drawn,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (choice, (score, visits)) in self.0.iter() {
            write!(f, "{}:{}/{} ", choice, score, visits)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::gameplay::*;

    /// A tree whose root children carry the given (choice, won) outcomes.
    fn tree(children: [Option<(Choice, bool)>; 2]) -> Tree {
        let won = {
            let mut game = arranged(&[Card::King, Card::Priest], &[Card::Baron]);
            game.draw().unwrap();
            game.apply(Action::baron(0, 1).unwrap()).unwrap();
            game
        };
        let live = arranged(&[Card::Guard, Card::Priest], &[]);
        let action = Action::handmaid(0).unwrap();
        let mut tree = Tree::new(live.clone());
        let root = tree.root();
        let pair = children.map(|c| match c {
            Some((choice, true)) => Node::branch(won.clone(), choice, action),
            Some((choice, false)) => Node::branch(live.clone(), choice, action),
            None => Node::excluded(),
        });
        let ids = tree.attach(root, pair).unwrap();
        for id in ids {
            if let Some(node) = tree.get_mut(id).filter(|n| !n.is_excluded()) {
                node.settle(0).unwrap();
            }
        }
        tree
    }

    #[test]
    fn empty_tally_prefers_drawn() {
        assert_eq!(Tally::default().best(), Choice::Drawn);
        assert_eq!(Tally::default().rate(Choice::Held), None);
    }

    #[test]
    fn higher_rate_wins() {
        let mut tally = Tally::default();
        tally.record(&tree([Some((Choice::Drawn, false)), Some((Choice::Held, true))]));
        tally.record(&tree([Some((Choice::Drawn, true)), Some((Choice::Held, true))]));
        assert_eq!(tally.rate(Choice::Drawn), Some(0.5));
        assert_eq!(tally.rate(Choice::Held), Some(1.0));
        assert_eq!(tally.best(), Choice::Held);
    }

    #[test]
    fn ties_prefer_drawn() {
        let mut tally = Tally::default();
        tally.record(&tree([Some((Choice::Drawn, true)), Some((Choice::Held, true))]));
        assert_eq!(tally.best(), Choice::Drawn);
    }

    #[test]
    fn excluded_children_never_count() {
        let mut tally = Tally::default();
        tally.record(&tree([Some((Choice::Held, false)), None]));
        tally.record(&tree([Some((Choice::Held, false)), None]));
        assert_eq!(tally.visits(Choice::Held), 2);
        assert_eq!(tally.visits(Choice::Drawn), 0);
        assert_eq!(tally.rate(Choice::Drawn), None);
        assert_eq!(tally.best(), Choice::Held);
    }

    #[test]
    fn unexpanded_trees_add_nothing() {
        let mut tally = Tally::default();
        tally.record(&Tree::new(arranged(&[Card::Guard, Card::Priest], &[])));
        assert_eq!(tally, Tally::default());
    }
}
