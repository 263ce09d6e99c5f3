//! Assembly emission.
//!
//! Lowers a list of function graphs into one AT&T-syntax translation unit.
//! This is an abstract-assembly stage: every allocated virtual register is
//! backed by a named, zero-initialized storage slot in `.data`, and
//! instructions move values between those slots and a small set of scratch
//! CPU registers rather than keeping them in transient register state.

use std::collections::HashMap;

use crate::core::{CompileError, CompileResult};
use crate::ir::node::{LEFT, RETURN_RESULT, RIGHT};
use crate::ir::{IrGraph, NodeId, NodeKind};

use super::aasm::{VirtualRegister, VirtualRegisterAllocator};
use super::regalloc::RegisterAllocator;

/// Emits the full translation unit for a list of function graphs.
///
/// Section order: global declarations, data section (one slot per allocated
/// register, per function), the process-entry stub, then one labeled
/// instruction block per function. Each per-function pass runs a fresh
/// allocator over the same deterministic traversal, so the data-section
/// pass and the emission pass agree on every assignment.
#[derive(Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_code(&self, program: &[IrGraph]) -> CompileResult<String> {
        let mut out = String::new();

        out.push_str(".global main\n");
        for graph in program {
            out.push_str(&format!(".global _{}\n", graph.name()));
        }

        out.push_str(".data\n");
        for graph in program {
            let registers = VirtualRegisterAllocator::new().allocate_registers(graph);
            for id in graph.postorder() {
                if let Some(reg) = registers.get(&id) {
                    out.push_str(&format!("{reg}:\n.long 0\n"));
                }
            }
        }

        out.push_str(".text\n");
        out.push_str("main:\n");
        out.push_str("  call _main\n");
        out.push_str("  # move the return value into the first argument for the exit syscall\n");
        out.push_str("  movq %rax, %rdi\n");
        out.push_str("  movq $0x3C, %rax\n");
        out.push_str("  syscall\n");

        for graph in program {
            log::debug!("generating code for function {}", graph.name());
            out.push_str(&format!("_{}:\n", graph.name()));
            let registers = VirtualRegisterAllocator::new().allocate_registers(graph);
            self.generate_for_graph(graph, &registers, &mut out)?;
        }

        Ok(out)
    }

    fn generate_for_graph(
        &self,
        graph: &IrGraph,
        registers: &HashMap<NodeId, VirtualRegister>,
        out: &mut String,
    ) -> CompileResult<()> {
        for id in graph.postorder() {
            self.emit_node(graph, registers, id, out)?;
        }
        Ok(())
    }

    fn emit_node(
        &self,
        graph: &IrGraph,
        registers: &HashMap<NodeId, VirtualRegister>,
        node: NodeId,
        out: &mut String,
    ) -> CompileResult<()> {
        match graph.kind(node) {
            NodeKind::Add => self.binary(graph, registers, node, "addl", out)?,
            NodeKind::Sub => self.binary(graph, registers, node, "subl", out)?,
            NodeKind::Mul => self.binary(graph, registers, node, "imull", out)?,
            // imodl is not a real x86 mnemonic; stand-in kept from the
            // abstract-assembly stage.
            NodeKind::Mod => self.binary(graph, registers, node, "imodl", out)?,
            NodeKind::Div => {
                let left = register_of(registers, graph.pred_skip_proj(node, LEFT))?;
                let right = register_of(registers, graph.pred_skip_proj(node, RIGHT))?;
                let dest = register_of(registers, node)?;
                // Widen-then-divide: sign-extend into edx:eax first.
                out.push_str(&format!("  movl {left},%eax\n"));
                out.push_str("  cdq\n");
                out.push_str(&format!("  idivl {right}\n"));
                out.push_str(&format!("  movl %eax,{dest}\n"));
            }
            NodeKind::ConstInt(value) => {
                let dest = register_of(registers, node)?;
                out.push_str(&format!("  movl ${value},{dest}\n"));
            }
            NodeKind::Return => {
                let result = register_of(registers, graph.pred_skip_proj(node, RETURN_RESULT))?;
                out.push_str(&format!("  movl {result}(,1),%eax\n"));
                out.push_str("  ret\n");
            }
            NodeKind::Phi => {
                return Err(CompileError::UnsupportedNode { kind: "Phi" });
            }
            NodeKind::Block | NodeKind::Proj(_) | NodeKind::Start => {}
        }
        Ok(())
    }

    /// Generic binary lowering: load both operand slots into scratch
    /// registers, combine, store LEFT-op-RIGHT into the node's slot.
    fn binary(
        &self,
        graph: &IrGraph,
        registers: &HashMap<NodeId, VirtualRegister>,
        node: NodeId,
        opcode: &str,
        out: &mut String,
    ) -> CompileResult<()> {
        let left = register_of(registers, graph.pred_skip_proj(node, LEFT))?;
        let right = register_of(registers, graph.pred_skip_proj(node, RIGHT))?;
        let dest = register_of(registers, node)?;
        out.push_str(&format!("  movl {left}(,1),%ebx\n"));
        out.push_str(&format!("  movl {right}(,1),%ecx\n"));
        out.push_str(&format!("  {opcode} %ecx,%ebx\n"));
        out.push_str(&format!("  movl %ebx,{dest}\n"));
        Ok(())
    }
}

fn register_of(
    registers: &HashMap<NodeId, VirtualRegister>,
    node: NodeId,
) -> CompileResult<VirtualRegister> {
    registers
        .get(&node)
        .copied()
        .ok_or(CompileError::MissingRegister { node: node.0 })
}
