//! Tree-walking evaluator for nbl.
//!
//! Walks the syntax tree from `nbl_parse`, dispatching once per
//! expression and statement variant, reading and mutating a chain of
//! lexically scoped environments. The interpreter's global scope and
//! native bindings persist across `interpret` calls, so an embedder
//! can feed it one source chunk at a time, REPL style.
//!
//! Single-threaded by design: values and environments share through
//! `Rc`, and the only blocking operation is the `input` native.

mod environment;
mod errors;
mod function;
mod interpreter;
mod natives;
mod print_handler;
mod shared;
mod value;

pub use environment::Environment;
pub use errors::{RuntimeError, RuntimeErrorKind};
pub use function::{Arity, FunctionValue, NativeFn, NativeFunction};
pub use interpreter::{Flow, Interpreter};
pub use print_handler::PrintHandler;
pub use shared::Shared;
pub use value::{ListValue, Value};

#[cfg(test)]
mod tests;
