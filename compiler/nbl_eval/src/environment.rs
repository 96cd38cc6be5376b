//! Chained variable scopes.
//!
//! Environments form a singly linked chain rooted at the global scope.
//! A new link is created per block and per function call; the call
//! link's parent is the function's captured closure environment, not
//! the caller's. `define` and `assign` are deliberately distinct
//! operations: `var` always defines in the current scope, assignment
//! only overwrites an existing binding somewhere up the chain.

use rustc_hash::FxHashMap;

use nbl_ir::Token;

use crate::errors::{undefined_variable, RuntimeError};
use crate::shared::Shared;
use crate::value::Value;

/// One scope: its bindings and an optional parent.
#[derive(Debug, Default)]
pub struct Environment {
    enclosing: Option<Shared<Environment>>,
    values: FxHashMap<String, Value>,
}

impl Environment {
    /// A root scope with no parent (the global scope).
    pub fn global() -> Shared<Environment> {
        Shared::new(Environment::default())
    }

    /// A child scope chained onto `enclosing`.
    pub fn with_enclosing(enclosing: Shared<Environment>) -> Shared<Environment> {
        Shared::new(Environment {
            enclosing: Some(enclosing),
            values: FxHashMap::default(),
        })
    }

    /// Insert or overwrite a binding in this scope. Always succeeds;
    /// `var` redeclaration in one scope is a rebind, not an error.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look `name` up through the chain. A binding holding Nil is a
    /// hit — declared-but-uninitialized reads yield Nil, they do not
    /// error.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow().get(name),
            None => Err(undefined_variable(&name.lexeme).at(name)),
        }
    }

    /// Overwrite an existing binding wherever in the chain it lives,
    /// preserving the owning scope — the property that lets closures
    /// mutate captured variables. Never creates a binding.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(undefined_variable(&name.lexeme).at(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbl_ir::TokenKind;
    use pretty_assertions::assert_eq;

    fn name(lexeme: &str) -> Token {
        Token::new(TokenKind::Identifier, lexeme, None, 1)
    }

    #[test]
    fn define_then_get() {
        let env = Environment::global();
        env.borrow_mut().define("x", Value::Number(1.0));
        assert_eq!(env.borrow().get(&name("x")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn get_walks_the_chain() {
        let global = Environment::global();
        global.borrow_mut().define("x", Value::Number(1.0));
        let inner = Environment::with_enclosing(global);
        assert_eq!(inner.borrow().get(&name("x")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn get_miss_reports_undefined_with_token_context() {
        let env = Environment::global();
        let error = match env.borrow().get(&name("ghost")) {
            Err(e) => e,
            Ok(v) => panic!("expected error, got {v:?}"),
        };
        assert_eq!(error.to_string(), "[line 1] runtime error at 'ghost': Undefined variable 'ghost'");
    }

    #[test]
    fn inner_define_shadows_without_touching_outer() {
        let global = Environment::global();
        global.borrow_mut().define("x", Value::Number(1.0));
        let inner = Environment::with_enclosing(global.clone());
        inner.borrow_mut().define("x", Value::Number(2.0));

        assert_eq!(inner.borrow().get(&name("x")), Ok(Value::Number(2.0)));
        assert_eq!(global.borrow().get(&name("x")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_overwrites_in_the_owning_scope() {
        let global = Environment::global();
        global.borrow_mut().define("x", Value::Number(1.0));
        let inner = Environment::with_enclosing(global.clone());

        inner
            .borrow_mut()
            .assign(&name("x"), Value::Number(5.0))
            .unwrap();
        // The write landed in the global scope, not the inner one.
        assert_eq!(global.borrow().get(&name("x")), Ok(Value::Number(5.0)));
    }

    #[test]
    fn assign_never_creates_a_binding() {
        let env = Environment::global();
        let result = env.borrow_mut().assign(&name("nope"), Value::Nil);
        assert!(result.is_err());
        assert!(env.borrow().get(&name("nope")).is_err());
    }

    #[test]
    fn rebinding_may_change_value_kind() {
        let env = Environment::global();
        env.borrow_mut().define("x", Value::Number(1.0));
        env.borrow_mut()
            .assign(&name("x"), Value::string("now a string"))
            .unwrap();
        assert_eq!(env.borrow().get(&name("x")), Ok(Value::string("now a string")));
    }
}
