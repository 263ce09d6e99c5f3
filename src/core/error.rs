//! Error types for the compiler middle end.
//!
//! Using thiserror for more idiomatic error handling. The core never
//! terminates the process; every failure is returned to the caller as a
//! [`CompileError`] and exit-code policy stays with the embedding driver.

use thiserror::Error;

/// Main error type for translation and code generation.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A node kind the code generator has no lowering for reached emission.
    /// `Phi` is the only constructible kind in this category.
    #[error("unsupported node in code generation: {kind}")]
    UnsupportedNode { kind: &'static str },

    /// No function named `main` was present in the input program.
    #[error("no main function found")]
    MissingMain,

    /// A variable was read before any definition. Input is expected to be
    /// validated, so this indicates a broken invariant upstream.
    #[error("read of undefined variable `{name}` in function `{function}`")]
    UndefinedVariable { function: String, name: String },

    /// A function body ran out of statements without returning.
    #[error("function `{function}` has no return")]
    MissingReturn { function: String },

    /// The emitter needed a register that no allocation pass assigned.
    /// Allocator and emitter share one traversal and one register-need
    /// predicate, so this indicates a mismatch between the two.
    #[error("no register allocated for node {node}")]
    MissingRegister { node: u32 },

    /// The external assembler/linker exited with a non-zero status.
    #[error("assembler failed with exit code {code}")]
    Assembler { code: i32 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
