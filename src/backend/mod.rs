//! Register allocation and assembly emission.
//!
//! Two allocator stages share one contract ([`regalloc::RegisterAllocator`])
//! and one traversal order: [`aasm`] assigns an unbounded virtual namespace
//! (the unit of abstract assembly and of data-section sizing) and [`x64`]
//! cycles the same order through the fixed physical pool. [`codegen`] drives
//! the virtual allocator and lowers each graph to AT&T-syntax text.

pub mod aasm;
pub mod codegen;
pub mod regalloc;
pub mod x64;

pub use aasm::{VirtualRegister, VirtualRegisterAllocator};
pub use codegen::CodeGenerator;
pub use regalloc::{Register, RegisterAllocator};
pub use x64::{X64Register, X64RegisterAllocator, REGISTER_POOL};
