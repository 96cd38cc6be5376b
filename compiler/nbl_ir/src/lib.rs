//! Shared vocabulary of the nbl pipeline.
//!
//! Defines the token stream produced by the lexer and the syntax tree
//! produced by the parser and walked by the evaluator. Nothing here is
//! mutated after construction; the single shared seam is
//! [`FunctionDecl`], which closures hold through `Rc`.

mod ast;
mod token;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use token::{Literal, Token, TokenKind};
