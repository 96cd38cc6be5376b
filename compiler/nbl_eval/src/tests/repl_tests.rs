//! REPL-style embedding: one interpreter fed successive chunks.

use pretty_assertions::{assert_eq, assert_ne};

use nbl_ir::{Token, TokenKind};

use crate::{Interpreter, PrintHandler, Value};

fn chunk(interpreter: &mut Interpreter, source: &str) {
    let statements = match nbl_parse::parse_source(source) {
        Ok(statements) => statements,
        Err(diagnostics) => panic!("parse failed: {diagnostics:?}"),
    };
    if let Err(error) = interpreter.interpret(&statements) {
        panic!("unexpected runtime error: {error}");
    }
}

#[test]
fn globals_persist_across_interpret_calls() {
    let printer = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_printer(printer.clone());

    chunk(&mut interpreter, "var x = 1;");
    chunk(&mut interpreter, "x = x + 1;");
    chunk(&mut interpreter, "print x;");

    assert_eq!(printer.captured(), "2\n");
}

#[test]
fn functions_defined_in_one_chunk_are_callable_in_the_next() {
    let printer = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_printer(printer.clone());

    chunk(&mut interpreter, "fun double(n) { return n * 2; }");
    chunk(&mut interpreter, "print double(21);");

    assert_eq!(printer.captured(), "42\n");
}

#[test]
fn runtime_error_leaves_earlier_state_intact() {
    let printer = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_printer(printer.clone());

    chunk(&mut interpreter, "var x = 7;");
    let statements = match nbl_parse::parse_source("print missing;") {
        Ok(statements) => statements,
        Err(diagnostics) => panic!("parse failed: {diagnostics:?}"),
    };
    assert!(interpreter.interpret(&statements).is_err());
    chunk(&mut interpreter, "print x;");

    assert_eq!(printer.captured(), "7\n");
}

#[test]
fn natives_are_installed_at_construction() {
    let interpreter = Interpreter::new();
    for name in ["clock", "time", "input", "exit"] {
        let token = Token::new(TokenKind::Identifier, name, None, 1);
        let value = match interpreter.globals().borrow().get(&token) {
            Ok(value) => value,
            Err(error) => panic!("native {name} missing: {error}"),
        };
        assert!(matches!(value, Value::Native(_)), "{name} should be a native");
    }
}

#[test]
fn clock_is_nondecreasing_and_numeric() {
    let mut interpreter = Interpreter::with_printer(PrintHandler::buffer());
    let statements = match nbl_parse::parse_source(
        "var a = clock(); var b = clock(); print b >= a;",
    ) {
        Ok(statements) => statements,
        Err(diagnostics) => panic!("parse failed: {diagnostics:?}"),
    };
    if let Err(error) = interpreter.interpret(&statements) {
        panic!("unexpected runtime error: {error}");
    }
    assert_eq!(interpreter.printer().captured(), "true\n");
}

#[test]
fn time_returns_a_formatted_string() {
    let printer = PrintHandler::buffer();
    let mut interpreter = Interpreter::with_printer(printer.clone());
    chunk(&mut interpreter, "print time();");
    let output = printer.captured();
    // `Www Mmm dd hh:mm:ss yyyy` plus the print newline.
    assert_eq!(output.trim_end().len(), 24);
    assert_ne!(output, "nil\n");
}
