//! Statement nodes.

use std::rc::Rc;

use super::expr::{Expr, FunctionDecl};
use crate::token::Token;

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `{ ... }` — one child environment for the whole sequence.
    Block { statements: Vec<Stmt> },

    /// Bare expression followed by `;`, evaluated for side effects.
    Expression { expr: Expr },

    /// `print expr;` — writes the stringified value plus newline.
    Print { expr: Expr },

    /// `var name [= initializer];` — defines in the current scope.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /// `if (condition) then [else other]`.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while (condition) body`. The body is not re-scoped per
    /// iteration; only an explicit block introduces a scope.
    While { condition: Expr, body: Box<Stmt> },

    /// `fun name(params) { body }` — sugar for binding a function
    /// value to `name` in the current scope.
    Function { decl: Rc<FunctionDecl> },

    /// `return [value];` — non-local exit to the nearest call boundary.
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}
