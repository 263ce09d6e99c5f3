//! Validated input trees for the middle end.
//!
//! Lexing, parsing and semantic analysis are external collaborators; the
//! middle end consumes their output as an in-memory list of functions that
//! are already name-resolved and type-checked. A body is a straight-line
//! sequence of assignments ending in a single `return`.

/// A validated function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
}

impl Function {
    pub fn new(name: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// A statement in a straight-line function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Defines or redefines a local variable.
    Assign { name: String, value: Expr },
    /// Terminates the function, yielding `value`.
    Return { value: Expr },
}

/// An arithmetic expression over integer literals and locals.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLit(i32),
    Var(String),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// The binary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}
