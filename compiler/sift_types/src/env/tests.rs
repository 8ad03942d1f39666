use pretty_assertions::assert_eq;

use super::*;
use crate::Pool;

#[test]
fn child_scope_sees_parent() {
    let pool = Pool::new();
    let x = pool.name("x");

    let mut env = SymbolEnv::new();
    env.declare_var(x, Idx::INT);
    let child = env.child();

    assert_eq!(child.lookup_var(x), Some(VarInfo::new(Idx::INT)));
    assert!(!child.is_bound_locally(x));
}

#[test]
fn narrowing_in_child_does_not_leak() {
    let pool = Pool::new();
    let x = pool.name("x");

    let mut env = SymbolEnv::new();
    env.declare_var(x, Idx::OBJECT);
    let mut child = env.child();
    assert!(child.narrow(x, Idx::STR));

    let narrowed = child.lookup_var(x).map(|v| (v.declared, v.current));
    assert_eq!(narrowed, Some((Idx::OBJECT, Idx::STR)));
    assert_eq!(env.lookup_var(x).map(|v| v.current), Some(Idx::OBJECT));
    assert_eq!(child.local_vars().len(), 1);
}

#[test]
fn narrow_unknown_name_fails() {
    let pool = Pool::new();
    let mut env = SymbolEnv::new();
    assert!(!env.narrow(pool.name("missing"), Idx::INT));
}

#[test]
fn namespaces_and_classes_are_not_vars() {
    let pool = Pool::new();
    let consts = pool.name("consts");
    let max = pool.name("MAX");
    let list = pool.name("list");

    let mut env = SymbolEnv::new();
    env.declare(list, Symbol::Class(ClassId::LIST));
    env.declare(
        consts,
        Symbol::Namespace(Rc::new(
            Namespace::new(consts).with_member(max, Symbol::Var(VarInfo::new(Idx::INT))),
        )),
    );

    assert!(env.lookup_var(list).is_none());
    assert!(env.lookup_var(consts).is_none());
    let Some(Symbol::Namespace(ns)) = env.lookup(consts) else {
        panic!("expected namespace");
    };
    assert!(matches!(ns.member(max), Some(Symbol::Var(_))));
    assert!(env.local_vars().is_empty());
}
