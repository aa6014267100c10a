use super::*;
use crate::gameplay::Game;

/// Index arena holding one determinization's search tree.
///
/// The root sits at index zero. Children are appended in pairs by
/// [`Tree::attach`], which also records their parent. The whole arena is
/// dropped once its determinization has been tallied.
#[derive(Debug, Clone)]
pub struct Tree(Vec<Node>);

impl Tree {
    pub fn new(game: Game) -> Self {
        Self(vec![Node::root(game)])
    }
    pub fn root(&self) -> NodeId {
        NodeId::from(0)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.0.get(usize::from(id))
    }
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.0.get_mut(usize::from(id))
    }
    /// The node's parent, navigating the back-reference.
    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.get(id)
            .and_then(Node::parent)
            .and_then(|p| self.get(p))
    }
    /// The node's two children, if it has been expanded.
    pub fn children(&self, id: NodeId) -> Vec<&Node> {
        self.get(id)
            .and_then(Node::children)
            .map(|ids| ids.iter().filter_map(|c| self.get(*c)).collect())
            .unwrap_or_default()
    }
    /// Appends a pair of children beneath `parent`.
    ///
    /// Terminal nodes never receive children, and a node is expanded once.
    pub fn attach(&mut self, parent: NodeId, pair: [Node; 2]) -> Result<[NodeId; 2], SearchError> {
        let node = self.get(parent).ok_or(SearchError::Stateless)?;
        if node.is_terminal() {
            return Err(SearchError::Terminal);
        }
        if node.children().is_some() {
            return Err(SearchError::Inconsistent(format!(
                "node {:?} already expanded",
                parent
            )));
        }
        let ids = pair.map(|mut child| {
            child.link(parent);
            self.0.push(child);
            NodeId::from(self.0.len() - 1)
        });
        if let Some(node) = self.get_mut(parent) {
            node.adopt(ids);
        }
        Ok(ids)
    }
}

impl std::ops::Index<NodeId> for Tree {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Node {
        &self.0[usize::from(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::gameplay::*;

    #[test]
    fn attach_links_both_ways() {
        let game = arranged(&[Card::Guard, Card::Priest], &[Card::Baron]);
        let mut tree = Tree::new(game.clone());
        let root = tree.root();
        let action = Action::handmaid(0).unwrap();
        let pair = [
            Node::branch(game.clone(), Choice::Drawn, action),
            Node::excluded(),
        ];
        let [a, b] = tree.attach(root, pair).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree[root].children(), Some([a, b]));
        assert_eq!(tree[a].parent(), Some(root));
        assert!(tree.parent(b).is_some());
        assert_eq!(tree.children(root).len(), 2);
        assert!(tree.parent(root).is_none());
    }

    #[test]
    fn expands_once() {
        let game = arranged(&[Card::Guard, Card::Priest], &[]);
        let mut tree = Tree::new(game);
        let root = tree.root();
        tree.attach(root, [Node::excluded(), Node::excluded()]).unwrap();
        assert!(matches!(
            tree.attach(root, [Node::excluded(), Node::excluded()]),
            Err(SearchError::Inconsistent(_))
        ));
    }

    #[test]
    fn terminal_nodes_get_no_children() {
        let mut game = arranged(&[Card::King, Card::Priest], &[Card::Baron]);
        game.draw().unwrap();
        game.apply(Action::baron(0, 1).unwrap()).unwrap();
        let mut tree = Tree::new(game);
        let root = tree.root();
        tree.get_mut(root).unwrap().settle(0).unwrap();
        assert_eq!(
            tree.attach(root, [Node::excluded(), Node::excluded()]).unwrap_err(),
            SearchError::Terminal
        );
        assert!(tree.children(root).is_empty());
    }
}
