//! ssac - graph-SSA middle and back end for a small C-like language.
//!
//! The crate turns a validated abstract syntax tree into a graph-based SSA
//! intermediate representation, value-numbers it during construction,
//! allocates registers and emits textual x86-64 assembly for an external
//! assembler/linker.
//!
//! # Primary Usage
//!
//! ```
//! use ssac::ast::{Expr, Function, Stmt};
//!
//! let main = Function::new("main", vec![Stmt::Return { value: Expr::IntLit(42) }]);
//! let asm = ssac::compile(&[main]).unwrap();
//! assert!(asm.contains("movl $42,_v0"));
//! ```
//!
//! # Architecture
//!
//! - [`ast`] - validated input trees, produced by external front ends
//! - [`ir`] - graph IR, SSA translation, value numbering
//! - [`backend`] - register allocation and assembly emission
//! - [`core`] - shared infrastructure (errors)
//! - [`driver`] - external-collaborator boundary (files, assembler, dumps)

pub mod ast;
pub mod backend;
pub mod core;
pub mod driver;
pub mod ir;

// Re-export common types from organized modules
pub use crate::core::{CompileError, CompileResult};
pub use backend::{
    CodeGenerator, Register, RegisterAllocator, VirtualRegister, VirtualRegisterAllocator,
    X64Register, X64RegisterAllocator,
};
pub use ir::{
    IrGraph, LocalValueNumbering, NoOptimizer, NodeId, NodeKind, Optimizer, SsaTranslation,
};

/// Compiles validated functions into one x86-64 assembly translation unit.
///
/// Translates every function with a fresh [`LocalValueNumbering`], checks
/// that an entry point named `main` exists, then lowers all graphs. Pure:
/// no filesystem, environment or process access; the assembler hand-off
/// belongs to the caller (see [`driver`]).
pub fn compile(functions: &[ast::Function]) -> CompileResult<String> {
    let graphs = translate_program(functions)?;
    CodeGenerator::new().generate_code(&graphs)
}

/// Translates every function into its graph.
///
/// A missing `main` is a whole-program error: it is reported only after all
/// functions have been translated, so it never masks a translation failure
/// in another function.
pub fn translate_program(functions: &[ast::Function]) -> CompileResult<Vec<IrGraph>> {
    let mut graphs = Vec::with_capacity(functions.len());
    let mut found_main = false;
    for function in functions {
        if function.name == "main" {
            found_main = true;
        }
        graphs.push(SsaTranslation::new(function, LocalValueNumbering::new()).translate()?);
    }
    if !found_main {
        return Err(CompileError::MissingMain);
    }
    Ok(graphs)
}
