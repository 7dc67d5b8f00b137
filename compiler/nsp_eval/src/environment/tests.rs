#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn name(text: &str) -> Name {
    Name::new(text)
}

#[test]
fn test_lookup_walks_to_parent() {
    let root = Scope::new();
    root.shadow(name("x"), Value::Int(1));
    let child = root.child();
    let grandchild = child.child();
    assert_eq!(grandchild.lookup(&name("x")).unwrap(), Value::Int(1));
    assert_eq!(grandchild.depth(), 3);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let root = Scope::new();
    root.assign(&name("Total"), Value::Int(5));
    assert_eq!(root.lookup(&name("TOTAL")).unwrap(), Value::Int(5));
    assert_eq!(root.lookup(&name("total")).unwrap(), Value::Int(5));
}

#[test]
fn test_unbound_name_is_an_error() {
    let root = Scope::new();
    let err = root.lookup(&name("missing")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NoSuchVariable {
            name: "missing".to_string()
        }
    );
    assert_eq!(err.message, "no such variable: missing");
}

#[test]
fn test_assign_updates_ancestor_binding() {
    let root = Scope::new();
    root.shadow(name("count"), Value::Int(0));
    {
        let child = root.child();
        child.assign(&name("count"), Value::Int(1));
    }
    assert_eq!(root.lookup(&name("count")).unwrap(), Value::Int(1));
}

#[test]
fn test_assign_declares_new_name_innermost() {
    let root = Scope::new();
    {
        let child = root.child();
        child.assign(&name("fresh"), Value::Int(3));
        assert_eq!(child.lookup(&name("fresh")).unwrap(), Value::Int(3));
    }
    assert!(root.get(&name("fresh")).is_none());
}

#[test]
fn test_shadow_leaves_outer_binding_alone() {
    let root = Scope::new();
    root.shadow(name("x"), Value::Int(1));
    {
        let call = root.child();
        call.shadow(name("x"), Value::Int(99));
        assert_eq!(call.lookup(&name("x")).unwrap(), Value::Int(99));
        call.assign(&name("x"), Value::Int(100));
        assert_eq!(call.lookup(&name("x")).unwrap(), Value::Int(100));
    }
    assert_eq!(root.lookup(&name("x")).unwrap(), Value::Int(1));
}

#[test]
fn test_lists_are_shared_between_bindings() {
    let root = Scope::new();
    let list = Value::list([Value::Int(1)]);
    root.shadow(name("a"), list.clone());
    root.shadow(name("b"), list);
    if let Value::List(handle) = root.lookup(&name("a")).unwrap() {
        handle.borrow_mut().push(Value::Int(2));
    }
    assert_eq!(
        root.lookup(&name("b")).unwrap(),
        Value::list([Value::Int(1), Value::Int(2)])
    );
}
