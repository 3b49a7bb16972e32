//! Search tree arena.
//!
//! Every search invocation owns one [`SearchTree`]. Nodes point back to their
//! parent by index and never know their children, so a branch is just a chain
//! of indices and the whole tree is dropped when the search returns.

use crate::route::Route;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

/// One position in the search tree. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<'g> {
    pub id: &'g str,
    pub parent: Option<NodeIndex>,
    /// Cost of the path from the root to this node.
    pub cost: u64,
}

#[derive(Debug)]
pub struct SearchTree<'g> {
    nodes: Vec<SearchNode<'g>>,
}

impl<'g> SearchTree<'g> {
    /// Create a tree holding a single root node with cost 0.
    pub fn with_root(id: &'g str) -> (Self, NodeIndex) {
        let tree = Self {
            nodes: vec![SearchNode {
                id,
                parent: None,
                cost: 0,
            }],
        };
        (tree, NodeIndex(0))
    }

    /// Generate a child of `parent` reached over an edge of `edge_cost`.
    pub fn expand(&mut self, parent: NodeIndex, id: &'g str, edge_cost: u64) -> NodeIndex {
        let cost = self.node(parent).cost.saturating_add(edge_cost);
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            cost,
        });
        NodeIndex(self.nodes.len() - 1)
    }

    pub fn node(&self, index: NodeIndex) -> &SearchNode<'g> {
        &self.nodes[index.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discard every node generated after `len` nodes existed.
    ///
    /// Only valid when no live index refers past `len`; depth-limited search
    /// uses it to drop an abandoned branch. The root is always kept.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len.max(1));
    }

    /// Number of edges between the root and `index`.
    pub fn depth(&self, index: NodeIndex) -> usize {
        self.ancestors(index).count() - 1
    }

    /// Walk the parent chain back to the root and return the route it spells.
    pub fn reconstruct(&self, index: NodeIndex) -> Route {
        let mut steps: Vec<String> = self
            .ancestors(index)
            .map(|node| node.id.to_string())
            .collect();
        steps.reverse();
        Route {
            steps,
            cost: self.node(index).cost,
        }
    }

    fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = &SearchNode<'g>> + '_ {
        let mut current = Some(index);
        std::iter::from_fn(move || {
            let node = self.node(current?);
            current = node.parent;
            Some(node)
        })
    }
}
