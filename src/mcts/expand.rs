use super::*;
use crate::Position;
use crate::gameplay::*;
use crate::players::Rollout;
use rand::rngs::SmallRng;

/// Expands a node whose actor has just drawn into its two children.
///
/// The first child plays the drawn card and the second the held card, each
/// on its own clone of the parent's state. When the pair of cards forces a
/// single play, only the first child is populated with that play and the
/// second is marked excluded. Populated children are settled for `observer`.
pub fn expand<R: Rollout>(
    tree: &mut Tree,
    id: NodeId,
    policies: &mut [R],
    observer: Position,
    rng: &mut SmallRng,
) -> Result<[NodeId; 2], SearchError> {
    let node = tree.get(id).ok_or(SearchError::Stateless)?;
    if node.is_terminal() {
        return Err(SearchError::Terminal);
    }
    let game = node.game().ok_or(SearchError::Stateless)?.clone();
    let actor = game.actor();
    let drawn = game.drawn().ok_or(IllegalAction::NothingDrawn)?;
    let held = game.hand(actor).ok_or(IllegalAction::Eliminated(actor))?;
    let view = game.view(actor);
    let policy = policies
        .get_mut(actor)
        .ok_or_else(|| SearchError::Inconsistent(format!("no policy for seat {}", actor)))?;
    let mut play = |choice: Choice| -> Result<Node, SearchError> {
        let card = choice.card(held, drawn);
        let action = policy.play(&view, drawn, card, rng)?;
        let child = game.try_apply(action)?;
        Ok(Node::branch(child, choice, action))
    };
    let pair = match Choice::forced(held, drawn) {
        Some(choice) => [play(choice)?, Node::excluded()],
        None => [play(Choice::Drawn)?, play(Choice::Held)?],
    };
    let ids = tree.attach(id, pair)?;
    for child in ids {
        match tree.get_mut(child) {
            Some(node) if !node.is_excluded() => node.settle(observer)?,
            _ => {}
        }
    }
    Ok(ids)
}
