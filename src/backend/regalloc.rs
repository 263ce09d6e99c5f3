//! Register allocation interfaces.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::ir::{IrGraph, NodeId};

/// A named allocation target, virtual or physical.
///
/// A register is the result location of exactly one node per allocation
/// pass; its `Display` form is the name that appears in the emitted text.
pub trait Register: fmt::Display + Copy + Eq + Hash {}

/// Assigns a result location to every register-needing node of a graph.
///
/// Implementations own a private mutable map for the duration of one
/// [`RegisterAllocator::allocate_registers`] call and hand it back as a
/// snapshot; maps are recomputed fresh per graph per pass, never cached.
/// The assignment walks [`IrGraph::postorder`], so it is deterministic and
/// agrees with the instruction-emission order.
pub trait RegisterAllocator {
    type Reg: Register;

    fn allocate_registers(&mut self, graph: &IrGraph) -> HashMap<NodeId, Self::Reg>;
}
