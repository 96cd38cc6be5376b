//! Runtime error reporting: kinds, locations, and abort behavior.

use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::RuntimeErrorKind;

#[test]
fn undefined_variable_read_names_the_variable() {
    let (error, _) = run_err("print ghost;");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "ghost".to_owned(),
        }
    );
    assert_eq!(error.to_string(), "[line 1] runtime error at 'ghost': Undefined variable 'ghost'");
}

#[test]
fn assignment_to_undefined_variable_fails() {
    let (error, _) = run_err("ghost = 1;");
    assert_eq!(
        error.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "ghost".to_owned(),
        }
    );
}

#[test]
fn error_location_tracks_the_source_line() {
    let (error, _) = run_err("var ok = 1;\nprint ok;\nprint -\"x\";");
    assert_eq!(error.line, Some(3));
}

#[test]
fn first_error_aborts_but_keeps_prior_output() {
    let (error, output) = run_err(r#"print "before"; print missing; print "after";"#);
    assert_eq!(output, "before\n");
    assert!(matches!(error.kind, RuntimeErrorKind::UndefinedVariable { .. }));
}

#[test]
fn operand_errors_point_at_the_operator() {
    let (error, _) = run_err("print nil - 1;");
    assert_eq!(error.kind, RuntimeErrorKind::OperandsMustBeNumbers);
    assert_eq!(error.lexeme.as_deref(), Some("-"));
}

#[test]
fn error_inside_a_callee_keeps_the_callee_location() {
    let (error, _) = run_err(
        r#"
        fun bad() {
            return nil + 1;
        }
        bad();
        "#,
    );
    assert_eq!(error.kind, RuntimeErrorKind::PlusOperands);
    assert_eq!(error.line, Some(3));
}

#[test]
fn scope_is_restored_after_an_error_in_a_block() {
    // A later chunk on the same interpreter would observe the global
    // scope; within one chunk it suffices that the error carries the
    // inner context and prior output survives.
    let (error, output) = run_err(
        r#"
        var x = "outer";
        print x;
        {
            var x = "inner";
            print missing;
        }
        "#,
    );
    assert_eq!(output, "outer\n");
    assert!(matches!(error.kind, RuntimeErrorKind::UndefinedVariable { .. }));
}

#[test]
fn truthiness_never_errors() {
    // Any value may steer control flow; only arithmetic is typed.
    assert_eq!(run_ok(r#"if ("words") print "taken";"#), "taken\n");
}
