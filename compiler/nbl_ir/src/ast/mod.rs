//! Syntax tree node types.
//!
//! Expressions and statements form a `Box`-owned tree built once by the
//! parser and read-only thereafter. Function bodies are the exception:
//! a [`FunctionDecl`] is wrapped in `Rc` so every closure created from
//! one declaration shares the same parameter list and body.

mod expr;
mod stmt;

pub use expr::{Expr, FunctionDecl};
pub use stmt::Stmt;
