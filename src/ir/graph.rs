//! The IR graph: an arena of nodes plus a start and an end block.

use super::node::{Node, NodeId, NodeKind, PROJ_IN};

/// A function's value graph in SSA form.
///
/// Owns its nodes in an arena indexed by [`NodeId`]. The predecessor
/// relation restricted to data edges is acyclic, and a node may be
/// referenced by any number of consumers, so the structure is a DAG rather
/// than a tree. A graph is built once by SSA translation and read-only for
/// every downstream pass.
#[derive(Debug, Clone)]
pub struct IrGraph {
    name: String,
    nodes: Vec<Node>,
    start_block: NodeId,
    end_block: NodeId,
}

impl IrGraph {
    /// Creates an empty graph holding only its two blocks.
    pub fn new(name: impl Into<String>) -> Self {
        let mut graph = Self {
            name: name.into(),
            nodes: Vec::new(),
            start_block: NodeId(0),
            end_block: NodeId(0),
        };
        graph.start_block = graph.insert(NodeKind::Block, None, Vec::new());
        graph.end_block = graph.insert(NodeKind::Block, None, Vec::new());
        graph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_block(&self) -> NodeId {
        self.start_block
    }

    /// The block reached from the function's `Return` through its control
    /// predecessor edge; the root of every backward traversal.
    pub fn end_block(&self) -> NodeId {
        self.end_block
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.node(id).kind()
    }

    pub fn preds(&self, id: NodeId) -> &[NodeId] {
        self.node(id).preds()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All arena ids in creation order, reachable or not.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Commits a node scheduled into `block` and returns its identity.
    pub fn add_node(&mut self, kind: NodeKind, block: NodeId, preds: Vec<NodeId>) -> NodeId {
        self.insert(kind, Some(block), preds)
    }

    fn insert(&mut self, kind: NodeKind, block: Option<NodeId>, preds: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, block, preds));
        id
    }

    /// Wires `ret` as the end block's control predecessor.
    pub fn attach_to_end(&mut self, ret: NodeId) {
        self.nodes[self.end_block.index()].push_pred(ret);
    }

    /// Predecessor at `idx`, looking through a projection to its producer.
    ///
    /// Operand reads in the backend go through this so that e.g. a division
    /// result used by an addition resolves to the `Div` node's register.
    pub fn pred_skip_proj(&self, node: NodeId, idx: usize) -> NodeId {
        let pred = self.preds(node)[idx];
        match self.kind(pred) {
            NodeKind::Proj(_) => self.preds(pred)[PROJ_IN],
            _ => pred,
        }
    }

    /// Dependency-first order over every node reachable backward from the
    /// end block.
    ///
    /// Depth-first, visiting each predecessor before the node itself, with a
    /// visited set keyed on identity so each node is processed exactly once
    /// even though shared operands make the graph a DAG. Both register
    /// allocators and the code generator consume this order unmodified; it
    /// is the single definition of "dependency-respecting order" in the
    /// crate.
    pub fn postorder(&self) -> Vec<NodeId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        visited[self.end_block.index()] = true;
        self.scan(self.end_block, &mut visited, &mut order);
        order
    }

    fn scan(&self, node: NodeId, visited: &mut [bool], order: &mut Vec<NodeId>) {
        for &pred in self.preds(node) {
            if !visited[pred.index()] {
                visited[pred.index()] = true;
                self.scan(pred, visited, order);
            }
        }
        order.push(node);
    }
}
