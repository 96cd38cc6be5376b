//! Callable values: user closures and host natives.

use std::fmt;
use std::rc::Rc;

use nbl_ir::FunctionDecl;

use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::interpreter::Interpreter;
use crate::shared::Shared;
use crate::value::Value;

/// How many arguments a callable accepts.
///
/// User functions always require an exact count. The only native that
/// needs a range is `exit`, which takes zero or one argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    /// Any count from zero through the bound, inclusive.
    UpTo(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::UpTo(n) => count <= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::UpTo(n) => write!(f, "at most {n}"),
        }
    }
}

/// Host behavior invoked directly; receives the interpreter so natives
/// can reach the print handler.
pub type NativeFn = fn(&mut Interpreter, Vec<Value>) -> Result<Value, RuntimeError>;

/// A host-provided function bound into the global environment at
/// interpreter construction.
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({}, arity {})", self.name, self.arity)
    }
}

/// A user function value: the shared declaration plus the environment
/// that was active at its definition site.
///
/// The captured environment — not the caller's — becomes the parent of
/// the call frame, which is the invariant that makes closures work.
#[derive(Debug)]
pub struct FunctionValue {
    pub decl: Rc<FunctionDecl>,
    pub closure: Shared<Environment>,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_arity_accepts_only_its_count() {
        assert!(Arity::Exactly(2).accepts(2));
        assert!(!Arity::Exactly(2).accepts(1));
        assert!(!Arity::Exactly(2).accepts(3));
    }

    #[test]
    fn up_to_arity_accepts_a_range() {
        assert!(Arity::UpTo(1).accepts(0));
        assert!(Arity::UpTo(1).accepts(1));
        assert!(!Arity::UpTo(1).accepts(2));
    }

    #[test]
    fn arity_display_feeds_error_messages() {
        assert_eq!(Arity::Exactly(2).to_string(), "2");
        assert_eq!(Arity::UpTo(1).to_string(), "at most 1");
    }
}
