use super::*;
use crate::Position;

/// A seat's per-round context.
///
/// Created from the opening view when a round starts and refreshed after
/// every action by any seat. Decision-makers receive it explicitly on each
/// call, so one player value can sit at several tables at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    seat: Position,
    view: View,
    history: Vec<Action>,
}

impl From<View> for Round {
    fn from(view: View) -> Self {
        Self {
            seat: view.seat(),
            view,
            history: Vec::new(),
        }
    }
}

impl Round {
    /// Fresh context for a round that starts with `view`.
    pub fn new(view: View) -> Self {
        Self::from(view)
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    /// The most recently observed view.
    pub fn view(&self) -> &View {
        &self.view
    }
    /// Actions observed this round, oldest first.
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    /// Records an action and replaces the retained view.
    pub fn observe(&mut self, action: Action, view: View) {
        debug_assert_eq!(view.seat(), self.seat);
        self.history.push(action);
        self.view = view;
    }
}
