//! SSA construction from validated syntax trees.

use std::collections::HashMap;

use crate::ast::{BinOp, Expr, Function, Stmt};
use crate::core::{CompileError, CompileResult};

use super::node::{NodeId, NodeKind, ProjKind};
use super::optimize::Optimizer;
use super::IrGraph;

/// Translates one validated function into an [`IrGraph`] in SSA form.
///
/// Every local computation becomes exactly one node, referenced by identity
/// from then on; variable names only exist during the walk, as the `defs`
/// map from name to the node that last defined it on the (single) control
/// path. Candidate value nodes are offered to the injected [`Optimizer`]
/// before they are committed, so a deduplicated candidate never reaches the
/// graph and no dangling references can arise.
///
/// One translation produces one graph and never mutates a previously
/// produced one.
pub struct SsaTranslation<'f, O> {
    function: &'f Function,
    graph: IrGraph,
    optimizer: O,
    /// Current definition of each variable.
    defs: HashMap<&'f str, NodeId>,
    /// Side-effect token threading Div/Mod trap ordering into Return.
    side_effect: NodeId,
}

impl<'f, O: Optimizer> SsaTranslation<'f, O> {
    pub fn new(function: &'f Function, optimizer: O) -> Self {
        let mut graph = IrGraph::new(function.name.clone());
        let block = graph.start_block();
        let start = graph.add_node(NodeKind::Start, block, Vec::new());
        let side_effect =
            graph.add_node(NodeKind::Proj(ProjKind::SideEffect), block, vec![start]);
        Self {
            function,
            graph,
            optimizer,
            defs: HashMap::new(),
            side_effect,
        }
    }

    /// Consumes the translator and yields the function's graph.
    pub fn translate(mut self) -> CompileResult<IrGraph> {
        log::debug!("translating function {}", self.function.name);
        for stmt in &self.function.body {
            match stmt {
                Stmt::Assign { name, value } => {
                    let node = self.expr(value)?;
                    self.defs.insert(name.as_str(), node);
                }
                Stmt::Return { value } => {
                    let result = self.expr(value)?;
                    let block = self.graph.start_block();
                    let ret = self.graph.add_node(
                        NodeKind::Return,
                        block,
                        vec![self.side_effect, result],
                    );
                    self.graph.attach_to_end(ret);
                    return Ok(self.graph);
                }
            }
        }
        Err(CompileError::MissingReturn {
            function: self.function.name.clone(),
        })
    }

    fn expr(&mut self, expr: &Expr) -> CompileResult<NodeId> {
        match expr {
            Expr::IntLit(value) => Ok(self.value_node(NodeKind::ConstInt(*value), Vec::new())),
            Expr::Var(name) => {
                self.defs
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| CompileError::UndefinedVariable {
                        function: self.function.name.clone(),
                        name: name.clone(),
                    })
            }
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.expr(lhs)?;
                let rhs = self.expr(rhs)?;
                Ok(self.binary(*op, lhs, rhs))
            }
        }
    }

    fn binary(&mut self, op: BinOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        match op {
            BinOp::Add => self.value_node(NodeKind::Add, vec![lhs, rhs]),
            BinOp::Sub => self.value_node(NodeKind::Sub, vec![lhs, rhs]),
            BinOp::Mul => self.value_node(NodeKind::Mul, vec![lhs, rhs]),
            BinOp::Div => self.trapping(NodeKind::Div, lhs, rhs),
            BinOp::Mod => self.trapping(NodeKind::Mod, lhs, rhs),
        }
    }

    /// Div/Mod may trap, so the node consumes the current side-effect token
    /// and produces the next one; its value is read through a `Result`
    /// projection.
    fn trapping(&mut self, kind: NodeKind, lhs: NodeId, rhs: NodeId) -> NodeId {
        let side_effect = self.side_effect;
        let node = self.value_node(kind, vec![lhs, rhs, side_effect]);
        self.side_effect = self.value_node(NodeKind::Proj(ProjKind::SideEffect), vec![node]);
        self.value_node(NodeKind::Proj(ProjKind::Result), vec![node])
    }

    /// Offers a candidate to the optimizer and commits it only when no
    /// equivalent node exists yet.
    fn value_node(&mut self, kind: NodeKind, preds: Vec<NodeId>) -> NodeId {
        if let Some(existing) = self.optimizer.existing(&kind, &preds) {
            log::trace!("value numbering reuses {existing} for {}", kind.name());
            return existing;
        }
        let block = self.graph.start_block();
        let node = self.graph.add_node(kind.clone(), block, preds.clone());
        self.optimizer.committed(&kind, &preds, node);
        node
    }
}
