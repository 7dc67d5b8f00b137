//! Tests for function literals, calls and results.

use nsp_ir::Span;
use super::{output_of, run, run_with};
use crate::EvalErrorKind;

const DIFFERENCE: &str = "\
Set difference to a function given x and y:
    The result is x - y.
";

fn with_difference(rest: &str) -> String {
    format!("{DIFFERENCE}{rest}")
}

mod calls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn result_of_call() {
        let source = with_difference("Print the result of difference with x as 10 and y as 4.");
        assert_eq!(output_of(&source), "6\n");
    }

    #[test]
    fn argument_order_does_not_matter() {
        let source = with_difference("Print the result of difference with y as 4, x as 10.");
        assert_eq!(output_of(&source), "6\n");
    }

    #[test]
    fn result_in_larger_expression() {
        let source =
            with_difference("Print 1 + (the result of difference with x as 3 and y as 1) * 10.");
        assert_eq!(output_of(&source), "21\n");
    }

    #[test]
    fn run_discards_the_result() {
        let source = "\
Set greet to a function given name:
    Print \"hello \" + name.
    The result is 1.
Run greet with name as \"ada\".";
        assert_eq!(output_of(source), "hello ada\n");
    }

    #[test]
    fn no_parameters() {
        let source = "\
Set hello to a function:
    Print \"hi\".
Run hello.
Run hello.";
        assert_eq!(output_of(source), "hi\nhi\n");
    }

    #[test]
    fn recursion() {
        let source = "\
Set fact to a function given n:
    If n is at most 1, the result is 1.
    The result is n times the result of fact with n as n - 1.
Print the result of fact with n as 10.";
        assert_eq!(output_of(source), "3628800\n");
    }

    #[test]
    fn result_from_inside_loops() {
        let source = "\
Set find to a function given items, wanted:
    Set i to 0.
    For each item in items:
        If item = wanted:
            The result is i.
        Increment i.
    The result is -1.
Print the result of find with items as [4, 5, 6], wanted as 5.
Print the result of find with items as [4], wanted as 9.";
        assert_eq!(output_of(source), "1\n-1\n");
    }

    #[test]
    fn functions_as_values() {
        let source = "\
Set twice to a function given f, v:
    The result is the result of f with n as the result of f with n as v.
Set double to a function given n:
    The result is n * 2.
Set ops to [double].
Print the result of twice with f as double, v as 3.
Print the result of ops at position 0 with n as 5.
Print double.";
        assert_eq!(output_of(source), "12\n10\n<function>\n");
    }
}

mod scoping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parameters_shadow_outer_variables() {
        let source = "\
Set x to 1.
Set bump to a function given x:
    Set x to x + 10.
    Print x.
Run bump with x as 5.
Print x.";
        assert_eq!(output_of(source), "15\n1\n");
    }

    #[test]
    fn body_sees_the_callers_variables() {
        let source = "\
Set show to a function:
    Print y.
Set y to 3.
Run show.";
        assert_eq!(output_of(source), "3\n");
    }

    #[test]
    fn body_can_update_outer_variables() {
        let source = "\
Set count to 0.
Set tick to a function:
    Increment count.
Run tick.
Run tick.
Print count.";
        assert_eq!(output_of(source), "2\n");
    }

    #[test]
    fn locals_do_not_escape() {
        let source = "\
Set f to a function:
    Set local to 1.
Run f.
Print local.";
        assert!(matches!(
            run(source).error_kind(),
            EvalErrorKind::NoSuchVariable { .. }
        ));
    }
}

mod identity {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copies_are_equal() {
        let source = "\
Set f to a function:
    Print 1.
Set g to f.
Print f = g.";
        assert_eq!(output_of(source), "true\n");
    }

    #[test]
    fn separate_literals_differ() {
        let source = "\
Set f to a function:
    Print 1.
Set h to a function:
    Print 1.
Print f = h.";
        assert_eq!(output_of(source), "false\n");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn too_few_arguments() {
        let outcome = run(&with_difference("Run difference with x as 1."));
        assert_eq!(
            outcome.error_kind(),
            &EvalErrorKind::BadParameterCount {
                expected: 2,
                given: 1
            }
        );
        assert_eq!(
            outcome.error.unwrap().message,
            "expected 2 arguments, was given 1"
        );
    }

    #[test]
    fn too_many_arguments() {
        let outcome = run(&with_difference(
            "Run difference with x as 1, y as 2, z as 3.",
        ));
        assert_eq!(
            outcome.error_kind(),
            &EvalErrorKind::BadParameterCount {
                expected: 2,
                given: 3
            }
        );
    }

    #[test]
    fn unknown_parameter_name() {
        let outcome = run(&with_difference("Run difference with x as 1, z as 2."));
        assert_eq!(
            outcome.error_kind(),
            &EvalErrorKind::UnknownParameter {
                name: "z".to_string()
            }
        );
    }

    #[test]
    fn duplicate_parameter_name() {
        let outcome = run(&with_difference("Run difference with x as 1 and X as 2."));
        assert!(matches!(
            outcome.error_kind(),
            EvalErrorKind::DuplicateParameter { .. }
        ));
    }

    #[test]
    fn no_result() {
        let source = "\
Set f to a function:
    Print \"side effect\".
Print the result of f.";
        let outcome = run(source);
        assert_eq!(outcome.output, "side effect\n");
        assert_eq!(outcome.error_kind(), &EvalErrorKind::NoResult);
    }

    #[test]
    fn exit_line_in_body_gives_no_result() {
        let source = "\
Set f to a function:
    Print 1.
    Exit.
    The result is 2.
Run f.
Print the result of f.";
        let outcome = run(source);
        assert_eq!(outcome.output, "1\n1\n");
        assert_eq!(outcome.error_kind(), &EvalErrorKind::NoResult);
    }

    #[test]
    fn exit_sentence_escapes_result_expression() {
        let source = "\
Set f to a function:
    If true, exit.
Print the result of f.
Print \"unreachable\".";
        let outcome = run(source);
        assert!(outcome.exited);
        assert_eq!(outcome.output, "");
    }

    #[test]
    fn result_outside_a_function() {
        let outcome = run("The result is 5.");
        assert!(matches!(
            outcome.error_kind(),
            EvalErrorKind::ParseError { .. }
        ));
    }

    #[test]
    fn callee_must_be_a_function() {
        let outcome = run("Set f to 5.\nRun f.");
        assert_eq!(
            outcome.error_kind(),
            &EvalErrorKind::WrongType {
                expected: "function",
                got: "integer"
            }
        );
    }

    #[test]
    fn errors_in_the_body_point_at_the_call() {
        let source = "\
Set f to a function:
    Print missing.
Run f.";
        let err = run(source).error.unwrap();
        assert_eq!(err.message, "no such variable: missing");
        assert_eq!(err.span, Some(Span::new(4, 5)));
        assert_eq!(err.backtrace, vec!["`f`".to_string()]);
    }

    #[test]
    fn call_depth_limit() {
        let source = "\
Set f to a function:
    Run f.
Run f.";
        let outcome = run_with(source, "", Some(5));
        let err = outcome.error.unwrap();
        assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 5 });
        assert_eq!(err.backtrace.len(), 5);
    }
}
