//! Interpreter state and statement execution.
//!
//! `Interpreter` owns the global scope, the current environment, and
//! the print handler. Statements thread a [`Flow`] result upward so a
//! `return` deep inside nested blocks and loops unwinds to the nearest
//! call boundary without touching statements it skips.

mod expr;

use std::rc::Rc;

use nbl_ir::{FunctionDecl, Stmt};

use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::function::FunctionValue;
use crate::natives;
use crate::print_handler::PrintHandler;
use crate::shared::Shared;
use crate::value::Value;

/// How a statement finished: fell through normally, or hit `return`
/// carrying a value toward the enclosing call.
#[derive(Debug)]
pub enum Flow {
    Normal,
    Return(Value),
}

/// The tree-walking evaluator.
///
/// Global bindings persist across [`interpret`](Interpreter::interpret)
/// calls; feeding the same interpreter successive chunks gives REPL
/// semantics.
pub struct Interpreter {
    globals: Shared<Environment>,
    /// The innermost environment currently in scope.
    env: Shared<Environment>,
    printer: PrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout, with the natives installed.
    pub fn new() -> Self {
        Self::with_printer(PrintHandler::stdout())
    }

    /// An interpreter routing output through `printer`.
    pub fn with_printer(printer: PrintHandler) -> Self {
        let globals = Environment::global();
        natives::install(&globals);
        Interpreter {
            env: globals.clone(),
            globals,
            printer,
        }
    }

    /// The global scope. Embedders use this to pre-bind host values.
    pub fn globals(&self) -> &Shared<Environment> {
        &self.globals
    }

    pub fn printer(&self) -> &PrintHandler {
        &self.printer
    }

    /// Execute a chunk of statements in order, stopping at the first
    /// runtime error. A `return` outside any function stops the chunk
    /// early; its value is discarded.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            if let Flow::Return(_) = self.execute(statement)? {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Stmt) -> Result<Flow, RuntimeError> {
        match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }
            Stmt::Print { expr } => {
                let value = self.evaluate(expr)?;
                self.printer.println(&value.stringify());
                Ok(Flow::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.borrow_mut().define(name.lexeme.clone(), value);
                Ok(Flow::Normal)
            }
            Stmt::Block { statements } => {
                let scope = Environment::with_enclosing(self.env.clone());
                self.execute_block(statements, scope)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Function { decl } => {
                // Statement-level declarations always carry a name;
                // anonymous functions arrive as `Expr::Function`.
                debug_assert!(decl.name.is_some(), "unnamed function declaration");
                let function = self.make_function(decl);
                if let Some(name) = decl.name.as_ref() {
                    self.env.borrow_mut().define(name.lexeme.clone(), function);
                }
                Ok(Flow::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
        }
    }

    /// Run `statements` with `scope` as the current environment,
    /// restoring the previous environment on every exit path —
    /// fall-through, `return`, and error alike.
    fn execute_block(
        &mut self,
        statements: &[Stmt],
        scope: Shared<Environment>,
    ) -> Result<Flow, RuntimeError> {
        let previous = std::mem::replace(&mut self.env, scope);
        let mut flow = Ok(Flow::Normal);
        for statement in statements {
            flow = self.execute(statement);
            if !matches!(flow, Ok(Flow::Normal)) {
                break;
            }
        }
        self.env = previous;
        flow
    }

    /// Close `decl` over the environment active right now.
    fn make_function(&self, decl: &Rc<FunctionDecl>) -> Value {
        Value::Function(Rc::new(FunctionValue {
            decl: Rc::clone(decl),
            closure: self.env.clone(),
        }))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
