//! x86-64 physical registers.

use std::collections::HashMap;
use std::fmt;

use crate::ir::{IrGraph, NodeId};

use super::regalloc::{Register, RegisterAllocator};

/// One of the fixed pool of 32-bit general-purpose registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct X64Register(&'static str);

impl X64Register {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for X64Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

impl Register for X64Register {}

/// The allocation pool, cycled through in traversal order.
pub const REGISTER_POOL: [X64Register; 14] = [
    X64Register("eax"),
    X64Register("ebx"),
    X64Register("ecx"),
    X64Register("edx"),
    X64Register("esi"),
    X64Register("edi"),
    X64Register("r8d"),
    X64Register("r9d"),
    X64Register("r10d"),
    X64Register("r11d"),
    X64Register("r12d"),
    X64Register("r13d"),
    X64Register("r14d"),
    X64Register("r15d"),
];

/// Round-robin mapper onto [`REGISTER_POOL`].
///
/// Same traversal and register-need predicate as the virtual allocator, but
/// the namespace is `POOL[counter % 14]` with one counter per graph. There
/// is no liveness analysis and no interference checking: a slot is reused
/// every 14 assignments whether or not its previous value is still live, so
/// graphs with more than 14 simultaneously live register-needing values are
/// outside this allocator's contract.
#[derive(Debug, Default)]
pub struct X64RegisterAllocator {
    counter: usize,
}

impl X64RegisterAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegisterAllocator for X64RegisterAllocator {
    type Reg = X64Register;

    fn allocate_registers(&mut self, graph: &IrGraph) -> HashMap<NodeId, X64Register> {
        let mut registers = HashMap::new();
        for id in graph.postorder() {
            if graph.kind(id).needs_register() {
                let reg = REGISTER_POOL[self.counter % REGISTER_POOL.len()];
                self.counter += 1;
                log::trace!("{}: {id} -> {reg}", graph.name());
                registers.insert(id, reg);
            }
        }
        registers
    }
}
