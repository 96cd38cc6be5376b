//! Operator evaluation: arithmetic, comparison, equality, logic.

use pretty_assertions::assert_eq;

use super::{run_err, run_ok};
use crate::RuntimeErrorKind;

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(run_ok("print (1 + 2) * 3;"), "9\n");
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(run_ok("print 10 - 3 - 2;"), "5\n");
}

#[test]
fn plus_concatenates_two_strings() {
    assert_eq!(run_ok(r#"print "a" + "b";"#), "ab\n");
}

#[test]
fn plus_rejects_mixed_operands() {
    let (error, _) = run_err(r#"print "a" + 1;"#);
    assert_eq!(error.kind, RuntimeErrorKind::PlusOperands);
    assert_eq!(error.lexeme.as_deref(), Some("+"));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(run_ok("print 1 / 0;"), "inf\n");
    assert_eq!(run_ok("print -1 / 0;"), "-inf\n");
    assert_eq!(run_ok("print 0 / 0;"), "NaN\n");
}

#[test]
fn comparisons_yield_booleans() {
    assert_eq!(run_ok("print 1 < 2;"), "true\n");
    assert_eq!(run_ok("print 2 <= 2;"), "true\n");
    assert_eq!(run_ok("print 1 > 2;"), "false\n");
    assert_eq!(run_ok("print 3 >= 4;"), "false\n");
}

#[test]
fn comparison_requires_numbers() {
    let (error, _) = run_err(r#"print "a" < "b";"#);
    assert_eq!(error.kind, RuntimeErrorKind::OperandsMustBeNumbers);
}

#[test]
fn equality_is_strict_across_types() {
    assert_eq!(run_ok("print nil == nil;"), "true\n");
    assert_eq!(run_ok("print nil == false;"), "false\n");
    assert_eq!(run_ok(r#"print 1 == "1";"#), "false\n");
    assert_eq!(run_ok(r#"print "a" != "b";"#), "true\n");
}

#[test]
fn unary_minus_negates_a_number() {
    assert_eq!(run_ok("print -(1 + 2);"), "-3\n");
}

#[test]
fn unary_minus_rejects_non_numbers() {
    let (error, _) = run_err(r#"print -"x";"#);
    assert_eq!(error.kind, RuntimeErrorKind::OperandMustBeNumber);
    assert_eq!(error.lexeme.as_deref(), Some("-"));
}

#[test]
fn bang_inverts_truthiness() {
    assert_eq!(run_ok("print !nil;"), "true\n");
    assert_eq!(run_ok("print !0;"), "false\n");
    assert_eq!(run_ok(r#"print !"";"#), "false\n");
}

#[test]
fn logical_operators_return_the_deciding_operand() {
    // No coercion to boolean: the operand itself flows through.
    assert_eq!(run_ok(r#"print "hit" or fail();"#), "hit\n");
    assert_eq!(run_ok(r#"print nil or "fallback";"#), "fallback\n");
    assert_eq!(run_ok(r#"print false and fail();"#), "false\n");
    assert_eq!(run_ok(r#"print 1 and 2;"#), "2\n");
}

#[test]
fn short_circuit_skips_right_side_effects() {
    let output = run_ok(
        r#"
        var touched = false;
        fun touch() { touched = true; return true; }
        true or touch();
        print touched;
        false and touch();
        print touched;
        "#,
    );
    assert_eq!(output, "false\nfalse\n");
}
