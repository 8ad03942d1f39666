use pretty_assertions::assert_eq;
use sift_diagnostic::ErrorCode;
use sift_types::{Idx, LiteralValue};

use super::*;
use crate::test_helpers::{codes, Fixture};

#[test]
fn negative_literals() {
    let mut fx = Fixture::new();
    let three = fx.int(3);
    let minus_three = fx.neg(three);
    let half = fx.float(0.5);
    let minus_half = fx.neg(half);
    let env = fx.env.clone();
    let mut ck = fx.checker();
    assert_eq!(literal_value(&ck, minus_three), Some(LiteralValue::Int(-3)));
    assert_eq!(literal_value(&ck, minus_half), None);
    assert_eq!(
        pattern_value(&mut ck, &env, minus_half),
        PatternValue::Inexact(Idx::FLOAT)
    );
    assert_eq!(infer_expr(&mut ck, &env, minus_three), Idx::INT);
}

#[test]
fn pattern_values() {
    let mut fx = Fixture::new();
    let one = fx.lit_int(1);
    fx.declare_final("ONE", one);
    fx.declare("limit", Idx::INT);
    let int = fx.int(1);
    let none = fx.none();
    let imag = fx.complex(2.0);
    let constant = fx.var("ONE");
    let variable = fx.var("limit");
    let env = fx.env.clone();
    let mut ck = fx.checker();
    assert_eq!(pattern_value(&mut ck, &env, int), PatternValue::Literal(one));
    assert_eq!(pattern_value(&mut ck, &env, none), PatternValue::None);
    assert_eq!(
        pattern_value(&mut ck, &env, imag),
        PatternValue::Inexact(Idx::COMPLEX)
    );
    assert_eq!(
        pattern_value(&mut ck, &env, constant),
        PatternValue::Literal(one)
    );
    assert_eq!(
        pattern_value(&mut ck, &env, variable),
        PatternValue::Reference(Idx::INT)
    );
}

#[test]
fn unresolved_names_are_reported_once_and_become_any() {
    let mut fx = Fixture::new();
    let missing = fx.var("missing");
    let env = fx.env.clone();
    let mut ck = fx.checker();
    assert_eq!(infer_expr(&mut ck, &env, missing), Idx::ANY);
    assert_eq!(
        pattern_value(&mut ck, &env, missing),
        PatternValue::Unknown
    );
    let diagnostics = ck.take_diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E3001, ErrorCode::E3001]);
}

#[test]
fn comparisons_are_bool() {
    let mut fx = Fixture::new();
    let left = fx.int(1);
    let right = fx.var("missing");
    let compare = fx.compare(left, right);
    let env = fx.env.clone();
    let mut ck = fx.checker();
    assert_eq!(infer_expr(&mut ck, &env, compare), Idx::BOOL);
    assert_eq!(ck.diagnostics().len(), 1);
}
