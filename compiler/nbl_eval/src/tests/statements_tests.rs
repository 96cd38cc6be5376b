//! Statement execution: declarations, blocks, conditionals, loops.

use pretty_assertions::assert_eq;

use super::run_ok;

#[test]
fn print_writes_stringified_value_and_newline() {
    assert_eq!(run_ok(r#"print "hello";"#), "hello\n");
}

#[test]
fn uninitialized_variable_reads_as_nil() {
    assert_eq!(run_ok("var x; print x;"), "nil\n");
}

#[test]
fn redeclaration_in_one_scope_rebinds() {
    assert_eq!(run_ok(r#"var x = 1; var x = "two"; print x;"#), "two\n");
}

#[test]
fn assignment_is_an_expression_yielding_the_value() {
    assert_eq!(run_ok("var a; var b; print a = b = 5; print a;"), "5\n5\n");
}

#[test]
fn block_shadowing_restores_the_outer_binding() {
    let output = run_ok(
        r#"
        var x = 1;
        {
            var x = 2;
            print x;
        }
        print x;
        "#,
    );
    assert_eq!(output, "2\n1\n");
}

#[test]
fn assignment_in_a_block_writes_through_to_the_outer_scope() {
    let output = run_ok(
        r#"
        var x = 1;
        {
            x = 2;
        }
        print x;
        "#,
    );
    assert_eq!(output, "2\n");
}

#[test]
fn if_takes_the_truthy_branch() {
    assert_eq!(run_ok(r#"if (1 < 2) print "yes"; else print "no";"#), "yes\n");
    assert_eq!(run_ok(r#"if (nil) print "yes"; else print "no";"#), "no\n");
}

#[test]
fn if_without_else_falls_through() {
    assert_eq!(run_ok(r#"if (false) print "skipped"; print "after";"#), "after\n");
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_eq!(run_ok(r#"while (false) print "never"; print "done";"#), "done\n");
}

#[test]
fn while_counts_and_terminates() {
    let output = run_ok(
        r#"
        var i = 0;
        while (i < 3) {
            print i;
            i = i + 1;
        }
        "#,
    );
    assert_eq!(output, "0\n1\n2\n");
}

#[test]
fn condition_is_reevaluated_each_iteration() {
    let output = run_ok(
        r#"
        var n = 3;
        while (n > 0) n = n - 1;
        print n;
        "#,
    );
    assert_eq!(output, "0\n");
}
