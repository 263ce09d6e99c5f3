//! Graph-based SSA intermediate representation.
//!
//! Each function becomes one [`IrGraph`]: an arena of [`node::Node`]s whose
//! predecessor edges carry both data operands and control dependencies.
//! [`translate::SsaTranslation`] builds the graph from a validated syntax
//! tree, consulting an [`optimize::Optimizer`] for every candidate node so
//! structurally identical computations are shared during construction.
//!
//! Graphs are immutable after translation; the backend only reads them.

pub mod graph;
pub mod node;
pub mod optimize;
pub mod printer;
pub mod translate;

pub use graph::IrGraph;
pub use node::{Node, NodeId, NodeKind, ProjKind};
pub use optimize::{LocalValueNumbering, NoOptimizer, Optimizer};
pub use translate::SsaTranslation;
