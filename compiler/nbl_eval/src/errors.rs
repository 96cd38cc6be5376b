//! Runtime error type and factory constructors.
//!
//! Exactly one runtime error aborts an `interpret` call; it carries
//! the triggering token's line and lexeme when the evaluator had one
//! in hand. Factories build the structured kind; `at` attaches the
//! token context at the evaluation site.

use std::fmt;

use nbl_ir::Token;
use thiserror::Error;

/// Structured category for runtime failures.
///
/// `Display` (thiserror-derived) produces the human-readable message;
/// the variants keep the payloads so embedders can match on them.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RuntimeErrorKind {
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("Operand must be a number")]
    OperandMustBeNumber,

    #[error("Operands must be numbers")]
    OperandsMustBeNumbers,

    #[error("Operands must be 2 numbers or 2 strings")]
    PlusOperands,

    #[error("Can only call functions")]
    NotCallable { type_name: &'static str },

    #[error("Expected {expected} arguments but got {got}")]
    ArityMismatch { expected: String, got: usize },

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("exit code must be a number")]
    ExitCodeNotNumber,

    #[error("input prompt must be a string")]
    PromptNotString,
}

/// A runtime failure: the structured kind plus the source location of
/// the token that triggered it, when known.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: Option<u32>,
    pub lexeme: Option<String>,
}

impl RuntimeError {
    fn new(kind: RuntimeErrorKind) -> Self {
        RuntimeError {
            kind,
            line: None,
            lexeme: None,
        }
    }

    /// Attach the triggering token's line and lexeme.
    #[must_use]
    pub fn at(mut self, token: &Token) -> Self {
        self.line = Some(token.line);
        self.lexeme = Some(token.lexeme.clone());
        self
    }

    /// Attach token context only if none is recorded yet. Used at call
    /// boundaries so an error raised deep in a callee keeps its own,
    /// more precise location.
    #[must_use]
    pub fn or_at(self, token: &Token) -> Self {
        if self.line.is_some() {
            self
        } else {
            self.at(token)
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.line, &self.lexeme) {
            (Some(line), Some(lexeme)) => {
                write!(f, "[line {line}] runtime error at '{lexeme}': {}", self.kind)
            }
            (Some(line), None) => write!(f, "[line {line}] runtime error: {}", self.kind),
            _ => write!(f, "runtime error: {}", self.kind),
        }
    }
}

impl std::error::Error for RuntimeError {}

// Factory constructors, one per failure mode.

pub(crate) fn undefined_variable(name: &str) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

pub(crate) fn operand_must_be_number() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandMustBeNumber)
}

pub(crate) fn operands_must_be_numbers() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbers)
}

pub(crate) fn plus_operands() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::PlusOperands)
}

pub(crate) fn not_callable(type_name: &'static str) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::NotCallable { type_name })
}

pub(crate) fn arity_mismatch(expected: impl Into<String>, got: usize) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::ArityMismatch {
        expected: expected.into(),
        got,
    })
}

pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::IndexOutOfBounds { index, len })
}

pub(crate) fn exit_code_not_number() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::ExitCodeNotNumber)
}

pub(crate) fn prompt_not_string() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::PromptNotString)
}
