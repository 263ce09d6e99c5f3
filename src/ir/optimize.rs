//! Construction-time optimizations.
//!
//! The translator offers every candidate value node to an [`Optimizer`]
//! before committing it to the graph. The strategy is injected, so
//! alternative or additional local optimizations can be substituted without
//! touching the translator itself.

use std::collections::HashMap;

use super::node::{NodeId, NodeKind};

/// Pluggable dedup policy consulted during SSA construction.
///
/// [`Optimizer::existing`] is queried with a candidate's kind and operand
/// identity list; returning `Some` makes the translator drop the candidate
/// and use the returned node for all further references.
/// [`Optimizer::committed`] records a node the translator did insert.
pub trait Optimizer {
    fn existing(&self, kind: &NodeKind, preds: &[NodeId]) -> Option<NodeId>;

    fn committed(&mut self, kind: &NodeKind, preds: &[NodeId], node: NodeId);
}

/// Local (intra-block) common-subexpression elimination.
///
/// Two candidates are equivalent iff their kinds match and their operand
/// lists are pointwise identical by node identity. The table lives for one
/// translation of one graph; there is no cross-function or cross-pass
/// memoization, and `Phi` candidates are never unified since equivalence
/// does not hold across control-flow joins.
#[derive(Debug, Default)]
pub struct LocalValueNumbering {
    table: HashMap<Signature, NodeId>,
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Signature {
    kind: NodeKind,
    preds: Vec<NodeId>,
}

impl Signature {
    fn of(kind: &NodeKind, preds: &[NodeId]) -> Self {
        Self {
            kind: kind.clone(),
            preds: preds.to_vec(),
        }
    }
}

impl LocalValueNumbering {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Optimizer for LocalValueNumbering {
    fn existing(&self, kind: &NodeKind, preds: &[NodeId]) -> Option<NodeId> {
        if matches!(kind, NodeKind::Phi) {
            return None;
        }
        self.table.get(&Signature::of(kind, preds)).copied()
    }

    fn committed(&mut self, kind: &NodeKind, preds: &[NodeId], node: NodeId) {
        if matches!(kind, NodeKind::Phi) {
            return;
        }
        self.table.insert(Signature::of(kind, preds), node);
    }
}

/// Null strategy: every candidate is committed as-is.
#[derive(Debug, Default)]
pub struct NoOptimizer;

impl Optimizer for NoOptimizer {
    fn existing(&self, _kind: &NodeKind, _preds: &[NodeId]) -> Option<NodeId> {
        None
    }

    fn committed(&mut self, _kind: &NodeKind, _preds: &[NodeId], _node: NodeId) {}
}
