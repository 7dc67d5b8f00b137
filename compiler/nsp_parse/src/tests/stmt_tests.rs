use nsp_diagnostic::ErrorCode;
use nsp_ir::{Body, Name, Span, Stmt, StmtKind, Target};
use pretty_assertions::assert_eq;

use super::{sexpr, stmt, stmt_err};

fn block_kinds(body: &Body) -> Vec<&'static str> {
    match body {
        Body::Block(block) => block.stmts.iter().map(Stmt::kind_name).collect(),
        Body::Sentence(stmt) => vec![stmt.kind_name()],
    }
}

#[test]
fn set_variable() {
    let s = stmt("Set x to 7.");
    assert_eq!(s.span, Span::new(0, 10));
    let StmtKind::Assign { target, value } = s.kind else {
        panic!("expected assignment, got {s:?}");
    };
    assert_eq!(target, Target::Variable(Name::new("x")));
    assert_eq!(sexpr(&value), "7");
}

#[test]
fn set_real_keeps_terminator_separate() {
    let StmtKind::Assign { value, .. } = stmt("Set x to 7.3.").kind else {
        panic!("expected assignment");
    };
    assert_eq!(sexpr(&value), "7.3");
}

#[test]
fn set_list_position() {
    let StmtKind::Assign { target, value } = stmt("Set list at position 1 to \"text\"").kind else {
        panic!("expected assignment");
    };
    let Target::Position { list, index } = target else {
        panic!("expected positional target");
    };
    assert_eq!(sexpr(&list), "list");
    assert_eq!(sexpr(&index), "1");
    assert_eq!(sexpr(&value), "\"text\"");
}

#[test]
fn is_assignment() {
    let StmtKind::Assign { target, value } = stmt("y is x plus 1.").kind else {
        panic!("expected assignment");
    };
    assert_eq!(target, Target::Variable(Name::new("y")));
    assert_eq!(sexpr(&value), "(+ x 1)");
}

#[test]
fn cannot_assign_to_literal() {
    let err = stmt_err("Set 4 to 5.");
    assert_eq!(err.code, ErrorCode::E2001);
    assert_eq!(err.message, "cannot assign to this expression");
}

#[test]
fn print_and_inspect() {
    let StmtKind::Print(e) = stmt("Print x.").kind else {
        panic!("expected print");
    };
    assert_eq!(sexpr(&e), "x");

    let StmtKind::Inspect(e) = stmt("what is \"test\"?").kind else {
        panic!("expected inspect");
    };
    assert_eq!(sexpr(&e), "\"test\"");

    let StmtKind::Inspect(e) = stmt("What is 7 times 2?").kind else {
        panic!("expected inspect");
    };
    assert_eq!(sexpr(&e), "(* 7 2)");
}

#[test]
fn read_without_annotation() {
    let StmtKind::Read { annotation, target } = stmt("Read into x.").kind else {
        panic!("expected read");
    };
    assert_eq!(annotation, None);
    assert_eq!(target, Name::new("x"));
}

#[test]
fn read_with_annotation() {
    let StmtKind::Read { annotation, target } = stmt("Read a real number into Total.").kind else {
        panic!("expected read");
    };
    let annotation = annotation.unwrap();
    assert_eq!(annotation.text, "real number");
    assert_eq!(annotation.span, Span::new(7, 18));
    assert_eq!(target.as_str(), "Total");
}

#[test]
fn read_requires_type_after_article() {
    let err = stmt_err("Read an into x.");
    assert_eq!(err.message, "expected a type name, found identifier");
}

#[test]
fn add_and_remove() {
    let StmtKind::Add { value, list } = stmt("Add 9 to list.").kind else {
        panic!("expected add");
    };
    assert_eq!(sexpr(&value), "9");
    assert_eq!(sexpr(&list), "list");

    let StmtKind::Remove { list, index } = stmt("Remove list at position 0.").kind else {
        panic!("expected remove");
    };
    assert_eq!(sexpr(&list), "list");
    assert_eq!(sexpr(&index), "0");
}

#[test]
fn remove_needs_position() {
    let err = stmt_err("Remove list.");
    assert_eq!(err.message, "expected `at position`, found `.`");
}

#[test]
fn increment_decrement_exit() {
    assert_eq!(
        stmt("Increment x.").kind,
        StmtKind::Increment(Name::new("x"))
    );
    assert_eq!(
        stmt("decrement count").kind,
        StmtKind::Decrement(Name::new("count"))
    );
    assert_eq!(stmt("Exit.").kind, StmtKind::Exit);
}

#[test]
fn while_block() {
    let StmtKind::While { cond, body } = stmt("While x < 3:\n`Print x.\nIncrement x.\n~").kind
    else {
        panic!("expected while");
    };
    assert_eq!(sexpr(&cond), "(< x 3)");
    assert_eq!(block_kinds(&body), vec!["print", "increment"]);
}

#[test]
fn while_sentence() {
    let StmtKind::While { body, .. } = stmt("While true, exit.").kind else {
        panic!("expected while");
    };
    assert!(matches!(body, Body::Sentence(_)));
    assert_eq!(block_kinds(&body), vec!["exit"]);
}

#[test]
fn nested_blocks() {
    let s = stmt("While a:\n`If b:\n`Print 1.\n~Print 2.\n~");
    let StmtKind::While { body, .. } = s.kind else {
        panic!("expected while");
    };
    assert_eq!(block_kinds(&body), vec!["if", "print"]);
}

#[test]
fn if_with_otherwise_block() {
    let s = stmt("if x is equal to 6:\n`y is 7~\notherwise:\n`y is 8.~");
    let StmtKind::If {
        cond,
        then_body,
        otherwise,
    } = s.kind
    else {
        panic!("expected if");
    };
    assert_eq!(sexpr(&cond), "(= x 6)");
    assert_eq!(block_kinds(&then_body), vec!["assignment"]);
    assert_eq!(block_kinds(&otherwise.unwrap()), vec!["assignment"]);
}

#[test]
fn if_otherwise_on_one_line() {
    let StmtKind::If { otherwise, .. } = stmt("If x, print 1. Otherwise, print 2.").kind else {
        panic!("expected if");
    };
    assert_eq!(block_kinds(&otherwise.unwrap()), vec!["print"]);

    let StmtKind::If { otherwise, .. } = stmt("If x, print 1, otherwise print 2.").kind else {
        panic!("expected if");
    };
    assert_eq!(block_kinds(&otherwise.unwrap()), vec!["print"]);
}

#[test]
fn if_without_otherwise() {
    let StmtKind::If { otherwise, .. } = stmt("If x:\n`Print 1.\n~").kind else {
        panic!("expected if");
    };
    assert_eq!(otherwise, None);
}

#[test]
fn otherwise_if_chain() {
    let source = "If x = 1:\n`Print 1.\n~Otherwise if x = 2:\n`Print 2.\n~otherwise:\n`Print 3.\n~";
    let StmtKind::If { otherwise, .. } = stmt(source).kind else {
        panic!("expected if");
    };
    let Some(Body::Sentence(inner)) = otherwise else {
        panic!("expected nested if");
    };
    let StmtKind::If {
        cond, otherwise, ..
    } = inner.kind
    else {
        panic!("expected nested if");
    };
    assert_eq!(sexpr(&cond), "(= x 2)");
    assert!(otherwise.is_some());
}

#[test]
fn for_each() {
    let StmtKind::ForEach {
        var,
        iterable,
        body,
    } = stmt("For each item in [1, 2]:\n`Print item.\n~").kind
    else {
        panic!("expected for-each");
    };
    assert_eq!(var, Name::new("item"));
    assert_eq!(sexpr(&iterable), "[1 2]");
    assert_eq!(block_kinds(&body), vec!["print"]);
}

#[test]
fn run_with_arguments() {
    let StmtKind::Run(call) = stmt("Run area with length as 3, width as 4.").kind else {
        panic!("expected run");
    };
    assert_eq!(sexpr(&call.callee), "area");
    let names: Vec<&str> = call.args.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["length", "width"]);
    assert_eq!(call.args[1].name_span, Span::new(27, 32));
}

#[test]
fn run_without_arguments() {
    let StmtKind::Run(call) = stmt("Run greet.").kind else {
        panic!("expected run");
    };
    assert!(call.args.is_empty());
}

#[test]
fn function_definition_statement() {
    let source = "Set area to a function given length and width:\n`The result is length times width.\n~";
    let StmtKind::Assign { value, .. } = stmt(source).kind else {
        panic!("expected assignment");
    };
    assert_eq!(sexpr(&value), "(fn (length width) 1)");
}

#[test]
fn result_statement() {
    let StmtKind::Result(e) = stmt("The result is x + 1.").kind else {
        panic!("expected result");
    };
    assert_eq!(sexpr(&e), "(+ x 1)");
}

#[test]
fn blank_block_is_allowed() {
    let StmtKind::While { body, .. } = stmt("While false:\n`~").kind else {
        panic!("expected while");
    };
    assert!(block_kinds(&body).is_empty());
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = stmt_err("Print x y.");
    assert_eq!(err.message, "expected end of statement, found identifier");
    assert_eq!(err.span, Span::new(8, 9));
}

#[test]
fn body_requires_colon_or_comma() {
    let err = stmt_err("While x print x.");
    assert_eq!(err.message, "expected `:` or `,`, found `print`");
}

#[test]
fn missing_block_after_colon() {
    let err = stmt_err("While x:");
    assert_eq!(err.code, ErrorCode::E1002);
}

#[test]
fn lex_errors_surface_as_parse_errors() {
    let err = stmt_err("Print 5 # 3.");
    assert_eq!(err.code, ErrorCode::E2004);
    assert_eq!(err.span, Span::new(8, 9));
}
