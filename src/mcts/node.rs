use super::*;
use crate::gameplay::*;
use crate::*;

/// Arena address of a [`Node`] within its [`Tree`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

impl From<usize> for NodeId {
    fn from(i: usize) -> Self {
        Self(i)
    }
}
impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// One element of the search tree.
///
/// Owns a snapshot of the simulated round (absent only for excluded
/// siblings), the card choice and action that produced it, and the
/// statistics accumulated while settling it. Parent and child links are
/// arena indices; they carry no ownership.
#[derive(Debug, Clone)]
pub struct Node {
    game: Option<Game>,
    choice: Option<Choice>,
    action: Option<Action>,
    score: u32,
    visits: u32,
    parent: Option<NodeId>,
    children: Option<[NodeId; 2]>,
    terminal: bool,
    excluded: bool,
}

impl Node {
    /// A root holding the determinized state.
    pub fn root(game: Game) -> Self {
        Self {
            game: Some(game),
            choice: None,
            action: None,
            score: 0,
            visits: 0,
            parent: None,
            children: None,
            terminal: false,
            excluded: false,
        }
    }
    /// A child reached by playing `action` for `choice`.
    pub fn branch(game: Game, choice: Choice, action: Action) -> Self {
        Self {
            choice: Some(choice),
            action: Some(action),
            ..Self::root(game)
        }
    }
    /// A sibling ruled out by a forced play. Never aggregated.
    pub fn excluded() -> Self {
        Self {
            game: None,
            choice: None,
            action: None,
            score: 0,
            visits: 0,
            parent: None,
            children: None,
            terminal: false,
            excluded: true,
        }
    }
}

impl Node {
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }
    pub fn choice(&self) -> Option<Choice> {
        self.choice
    }
    pub fn action(&self) -> Option<Action> {
        self.action
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn visits(&self) -> u32 {
        self.visits
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn children(&self) -> Option<[NodeId; 2]> {
        self.children
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
    pub fn is_excluded(&self) -> bool {
        self.excluded
    }
    pub(super) fn link(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
    pub(super) fn adopt(&mut self, children: [NodeId; 2]) {
        self.children = Some(children);
    }
}

/// Terminal check.
impl Node {
    /// Visits the node on behalf of `observer`.
    ///
    /// The node becomes terminal if its round is over or the observer has
    /// been eliminated. A finished round the observer won credits one point.
    pub fn settle(&mut self, observer: Position) -> Result<(), SearchError> {
        let game = self.game.as_ref().ok_or(SearchError::Stateless)?;
        let over = game.is_over();
        let won = over && game.score(observer) == WINNER;
        self.terminal = over || game.is_eliminated(observer);
        self.visits += 1;
        if won {
            self.score += 1;
        }
        log::trace!(
            "settled {:?} terminal={} score={}",
            self.choice,
            self.terminal,
            self.score
        );
        Ok(())
    }
}
