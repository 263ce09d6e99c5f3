//! Abstract assembly: the unbounded virtual register namespace.

use std::collections::HashMap;
use std::fmt;

use crate::ir::{IrGraph, NodeId};

use super::regalloc::{Register, RegisterAllocator};

/// A virtual register.
///
/// Its display form, `_v<id>`, doubles as the label of the zero-initialized
/// data-section slot backing it in the emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualRegister(pub u32);

impl fmt::Display for VirtualRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_v{}", self.0)
    }
}

impl Register for VirtualRegister {}

/// Hands out fresh virtual ids in dependency-first traversal order.
#[derive(Debug, Default)]
pub struct VirtualRegisterAllocator {
    next: u32,
}

impl VirtualRegisterAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegisterAllocator for VirtualRegisterAllocator {
    type Reg = VirtualRegister;

    fn allocate_registers(&mut self, graph: &IrGraph) -> HashMap<NodeId, VirtualRegister> {
        let mut registers = HashMap::new();
        for id in graph.postorder() {
            if graph.kind(id).needs_register() {
                let reg = VirtualRegister(self.next);
                self.next += 1;
                log::trace!("{}: {id} -> {reg}", graph.name());
                registers.insert(id, reg);
            }
        }
        registers
    }
}
