//! Expression evaluation.
//!
//! One dispatch per [`Expr`] variant. Operator evaluation is strict —
//! both operands are evaluated before the type check — except for
//! `and` / `or`, which short-circuit and return the deciding operand
//! without coercing it to a boolean.

use nbl_ir::{Expr, Literal, Token, TokenKind};

use crate::environment::Environment;
use crate::errors::{
    arity_mismatch, not_callable, operand_must_be_number, operands_must_be_numbers, plus_operands,
    RuntimeError,
};
use crate::interpreter::{Flow, Interpreter};
use crate::value::Value;

impl Interpreter {
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal { value } => Ok(literal_value(value)),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Variable { name } => self.env.borrow().get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.borrow_mut().assign(name, value.clone())?;
                // Assignment is an expression; it yields the assigned
                // value so chains like `a = b = 1` work.
                Ok(value)
            }
            Expr::Unary { op, operand } => {
                let operand = self.evaluate(operand)?;
                unary(op, operand)
            }
            Expr::Binary { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                binary(op, left, right)
            }
            Expr::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                let decided = match op.kind {
                    TokenKind::Or => left.is_truthy(),
                    _ => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Function { decl } => Ok(self.make_function(decl)),
            Expr::Call {
                callee,
                paren,
                args,
            } => {
                let callee = self.evaluate(callee)?;
                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.evaluate(arg)?);
                }
                self.call(callee, arguments, paren)
            }
        }
    }

    fn call(
        &mut self,
        callee: Value,
        arguments: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        match callee {
            Value::Native(native) => {
                if !native.arity.accepts(arguments.len()) {
                    return Err(
                        arity_mismatch(native.arity.to_string(), arguments.len()).at(paren)
                    );
                }
                // `or_at`: a native error keeps its own location if it
                // recorded one, otherwise it is pinned to the call site.
                (native.func)(self, arguments).map_err(|error| error.or_at(paren))
            }
            Value::Function(function) => {
                if arguments.len() != function.arity() {
                    return Err(
                        arity_mismatch(function.arity().to_string(), arguments.len()).at(paren)
                    );
                }
                let frame = Environment::with_enclosing(function.closure.clone());
                for (param, argument) in function.decl.params.iter().zip(arguments) {
                    frame.borrow_mut().define(param.lexeme.clone(), argument);
                }
                match self.execute_block(&function.decl.body, frame)? {
                    Flow::Return(value) => Ok(value),
                    Flow::Normal => Ok(Value::Nil),
                }
            }
            other => Err(not_callable(other.type_name()).at(paren)),
        }
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Nil => Value::Nil,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::string(s.as_str()),
    }
}

fn unary(op: &Token, operand: Value) -> Result<Value, RuntimeError> {
    match op.kind {
        TokenKind::Bang => Ok(Value::Bool(!operand.is_truthy())),
        TokenKind::Minus => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number().at(op)),
        },
        _ => unreachable!("not a unary operator: {:?}", op.kind),
    }
}

fn binary(op: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match op.kind {
        TokenKind::Plus => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{a}{b}"))),
            _ => Err(plus_operands().at(op)),
        },
        TokenKind::Minus => numbers(op, left, right).map(|(a, b)| Value::Number(a - b)),
        TokenKind::Star => numbers(op, left, right).map(|(a, b)| Value::Number(a * b)),
        // Division is IEEE 754 throughout: dividing by zero yields an
        // infinity or NaN, never an error.
        TokenKind::Slash => numbers(op, left, right).map(|(a, b)| Value::Number(a / b)),
        TokenKind::Greater => numbers(op, left, right).map(|(a, b)| Value::Bool(a > b)),
        TokenKind::GreaterEqual => numbers(op, left, right).map(|(a, b)| Value::Bool(a >= b)),
        TokenKind::Less => numbers(op, left, right).map(|(a, b)| Value::Bool(a < b)),
        TokenKind::LessEqual => numbers(op, left, right).map(|(a, b)| Value::Bool(a <= b)),
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        _ => unreachable!("not a binary operator: {:?}", op.kind),
    }
}

fn numbers(op: &Token, left: Value, right: Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(operands_must_be_numbers().at(op)),
    }
}
