//! Expression nodes.

use std::rc::Rc;

use super::stmt::Stmt;
use crate::token::{Literal, Token};

/// Expression variants. Operator variants keep the operator [`Token`]
/// for error location; `Call` keeps the closing paren token for the
/// same reason.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Assignment to an existing variable: `name = value`.
    Assign { name: Token, value: Box<Expr> },

    /// Arithmetic, comparison, and equality: `left op right`.
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },

    /// Short-circuiting `and` / `or`.
    Logical {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },

    /// Parenthesized expression.
    Grouping { expr: Box<Expr> },

    /// `nil`, `true`, `false`, number and string literals.
    Literal { value: Literal },

    /// Prefix `!` and `-`.
    Unary { op: Token, operand: Box<Expr> },

    /// Variable reference.
    Variable { name: Token },

    /// Call: `callee(args...)`. Chains like `f()()` nest here.
    Call {
        callee: Box<Expr>,
        paren: Token,
        args: Vec<Expr>,
    },

    /// Anonymous function literal: `fun (params) { body }`.
    Function { decl: Rc<FunctionDecl> },
}

/// A function's parameter list and body, shared between the node that
/// introduced it and every closure value created from it.
#[derive(Debug, PartialEq)]
pub struct FunctionDecl {
    /// `None` for anonymous function literals.
    pub name: Option<Token>,
    /// Parameter name tokens, in declaration order.
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    /// The name to display in `stringify` output and arity errors.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(token) => &token.lexeme,
            None => "anonymous",
        }
    }
}
