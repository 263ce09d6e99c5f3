//! IR node representation.
//!
//! A node is one IR operation: arithmetic, constant, control or structural.
//! Nodes live in their graph's arena and refer to each other through
//! [`NodeId`] indices; there are no owning pointers between nodes.

use std::fmt;

/// Arena index of a node inside its [`IrGraph`](super::IrGraph).
///
/// This is node identity: value numbering compares candidates structurally
/// before they are committed, and everything afterwards refers to a node by
/// its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Which result a projection extracts from a multi-result producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjKind {
    /// The computed value, e.g. the quotient of a division.
    Result,
    /// The side-effect ordering token.
    SideEffect,
}

/// The closed set of IR operations.
///
/// Register-need and lowering dispatch over this enum with exhaustive
/// matches and no wildcard arm, so adding a kind is a compile-time-checked
/// omission at every dispatch site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Function entry marker; no runtime effect.
    Start,
    /// Control-flow grouping. Straight-line functions have exactly one body
    /// block plus the end block.
    Block,
    /// Literal integer.
    ConstInt(i32),
    Add,
    Sub,
    Mul,
    /// Division. May trap, so it carries a side-effect predecessor ordering
    /// it against other trapping operations.
    Div,
    /// Remainder, with the same side-effect ordering as [`NodeKind::Div`].
    Mod,
    /// Extracts one result from a multi-result producer.
    Proj(ProjKind),
    /// Control-flow merge. Never produced for straight-line input and not
    /// supported by the code generator.
    Phi,
    /// Terminates the function, yielding its `RETURN_RESULT` predecessor.
    Return,
}

impl NodeKind {
    /// Whether a node of this kind occupies a result register.
    ///
    /// `Block`, `Start`, `Proj` and `Return` pass control or values through
    /// without materializing anything.
    pub fn needs_register(&self) -> bool {
        match self {
            NodeKind::Proj(_) | NodeKind::Start | NodeKind::Block | NodeKind::Return => false,
            NodeKind::ConstInt(_)
            | NodeKind::Add
            | NodeKind::Sub
            | NodeKind::Mul
            | NodeKind::Div
            | NodeKind::Mod
            | NodeKind::Phi => true,
        }
    }

    /// Short name used by diagnostics and the graph printer.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Block => "Block",
            NodeKind::ConstInt(_) => "ConstInt",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Sub",
            NodeKind::Mul => "Mul",
            NodeKind::Div => "Div",
            NodeKind::Mod => "Mod",
            NodeKind::Proj(ProjKind::Result) => "ProjResult",
            NodeKind::Proj(ProjKind::SideEffect) => "ProjSideEffect",
            NodeKind::Phi => "Phi",
            NodeKind::Return => "Return",
        }
    }
}

/// Predecessor index of a binary operation's left operand.
pub const LEFT: usize = 0;
/// Predecessor index of a binary operation's right operand.
pub const RIGHT: usize = 1;
/// Predecessor index of the side-effect token on `Div`/`Mod`.
pub const SIDE_EFFECT: usize = 2;
/// Predecessor index of the side-effect token on `Return`.
pub const RETURN_SIDE_EFFECT: usize = 0;
/// Predecessor index of the value a `Return` yields.
pub const RETURN_RESULT: usize = 1;
/// Predecessor index of a projection's producer.
pub const PROJ_IN: usize = 0;

/// One IR operation with its predecessor edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    /// Block the node is scheduled into; `None` for blocks themselves.
    block: Option<NodeId>,
    preds: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, block: Option<NodeId>, preds: Vec<NodeId>) -> Self {
        Self { kind, block, preds }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn block(&self) -> Option<NodeId> {
        self.block
    }

    /// Operand and/or control predecessors, in role order.
    pub fn preds(&self) -> &[NodeId] {
        &self.preds
    }

    pub(crate) fn push_pred(&mut self, pred: NodeId) {
        self.preds.push(pred);
    }
}
