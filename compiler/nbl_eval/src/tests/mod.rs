//! End-to-end evaluator tests: source text in, captured output and
//! runtime errors out, driven through the full lex/parse/eval pipeline.

mod operators_tests;
mod repl_tests;
mod runtime_errors_tests;
mod statements_tests;

use crate::{Interpreter, PrintHandler, RuntimeError};

/// Run `source` with a capturing printer. Panics on lex/parse errors;
/// these tests feed well-formed programs.
fn run(source: &str) -> (Result<(), RuntimeError>, String) {
    let statements = match nbl_parse::parse_source(source) {
        Ok(statements) => statements,
        Err(diagnostics) => panic!("parse failed: {diagnostics:?}"),
    };
    let printer = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_printer(printer.clone());
    let result = interpreter.interpret(&statements);
    (result, printer.captured())
}

/// Run source expected to succeed; returns the captured output.
fn run_ok(source: &str) -> String {
    let (result, output) = run(source);
    if let Err(error) = result {
        panic!("unexpected runtime error: {error}");
    }
    output
}

/// Run source expected to fail; returns the error and the output
/// produced before it.
fn run_err(source: &str) -> (RuntimeError, String) {
    let (result, output) = run(source);
    match result {
        Err(error) => (error, output),
        Ok(()) => panic!("expected a runtime error; output was {output:?}"),
    }
}
