//! Per-form matcher tests against single subject types.

use sift_diagnostic::ErrorCode;
use sift_types::{ClassFlags, Idx, Variance};

use crate::test_helpers::{codes, messages, Fixture};

fn shown(fx: &Fixture, result: &crate::PatternType) -> (String, String) {
    (fx.fmt(result.ty), fx.fmt(result.rest))
}

mod capture {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capture_is_irrefutable() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::INT, Idx::STR]);
        let pattern = fx.capture("x");
        let (result, diagnostics) = fx.match_pattern(pattern, subject);
        assert!(diagnostics.is_empty());
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, Idx::NEVER);
        assert_eq!(fx.capture_type(&result, "x"), Some("Union[int, str]".into()));
    }

    #[test]
    fn wildcard_binds_nothing() {
        let mut fx = Fixture::new();
        let pattern = fx.wildcard();
        let (result, _) = fx.match_pattern(pattern, Idx::INT);
        assert!(result.captures.is_empty());
        assert_eq!(result.rest, Idx::NEVER);
    }
}

mod value {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_against_its_instance_type() {
        let mut fx = Fixture::new();
        let pattern = fx.int_pat(1);
        let (result, _) = fx.match_pattern(pattern, Idx::INT);
        assert_eq!(shown(&fx, &result), ("int".into(), "int".into()));
    }

    #[test]
    fn literal_against_disjoint_type_is_unreachable() {
        let mut fx = Fixture::new();
        let pattern = fx.int_pat(1);
        let (result, _) = fx.match_pattern(pattern, Idx::STR);
        assert!(!result.is_reachable());
        assert_eq!(result.rest, Idx::STR);
    }

    #[test]
    fn literal_against_literal_union_removes_it() {
        let mut fx = Fixture::new();
        let a = fx.lit_str("a");
        let b = fx.lit_str("b");
        let subject = fx.pool.union(&[a, b]);
        let pattern = fx.str_pat("a");
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, a);
        assert_eq!(result.rest, b);
    }

    #[test]
    fn true_against_bool_stays_bool() {
        let mut fx = Fixture::new();
        let expr = fx.bool_lit(true);
        let pattern = fx.value(expr);
        let (result, _) = fx.match_pattern(pattern, Idx::BOOL);
        assert_eq!(result.ty, Idx::BOOL);
    }

    #[test]
    fn none_narrows_optionals() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::INT, Idx::NONE]);
        let pattern = fx.none_pat();
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(shown(&fx, &result), ("None".into(), "int".into()));
    }

    #[test]
    fn negative_literal() {
        let mut fx = Fixture::new();
        let minus_one = fx.lit_int(-1);
        let two = fx.lit_int(2);
        let subject = fx.pool.union(&[minus_one, two]);
        let one = fx.int(1);
        let expr = fx.neg(one);
        let pattern = fx.value(expr);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, minus_one);
        assert_eq!(result.rest, two);
    }

    #[test]
    fn float_literal_never_narrows_rest() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::FLOAT, Idx::STR]);
        let expr = fx.float(1.5);
        let pattern = fx.value(expr);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(shown(&fx, &result), ("float".into(), "Union[float, str]".into()));
    }

    #[test]
    fn final_constant_acts_as_literal() {
        let mut fx = Fixture::new();
        let one = fx.lit_int(1);
        let two = fx.lit_int(2);
        fx.declare_final("ONE", one);
        let subject = fx.pool.union(&[one, two]);
        let expr = fx.var("ONE");
        let pattern = fx.value(expr);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, one);
        assert_eq!(result.rest, two);
    }

    #[test]
    fn non_final_reference_never_makes_a_case_unreachable() {
        let mut fx = Fixture::new();
        fx.declare("limit", Idx::INT);
        let expr = fx.var("limit");
        let pattern = fx.value(expr);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::STR);
        assert!(diagnostics.is_empty());
        assert_eq!(result.ty, Idx::STR);
        assert_eq!(result.rest, Idx::STR);
    }

    #[test]
    fn unresolved_reference_is_reported() {
        let mut fx = Fixture::new();
        let expr = fx.var("Color.RED");
        let pattern = fx.value(expr);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::INT);
        assert!(result.is_reachable());
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3001),
            vec!["Name \"Color\" is not defined".to_string()]
        );
    }
}

mod sequence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tuple_positions() {
        let mut fx = Fixture::new();
        let subject = fx.pool.tuple(&[Idx::INT, Idx::STR]);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.seq(&[a, b]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "b"), Some("str".into()));
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, Idx::NEVER);
    }

    #[test]
    fn star_captures_the_middle_as_a_list() {
        let mut fx = Fixture::new();
        let subject = fx.pool.tuple(&[Idx::INT, Idx::STR, Idx::BYTES, Idx::FLOAT]);
        let first = fx.capture("first");
        let middle = fx.star(Some("middle"));
        let last = fx.capture("last");
        let pattern = fx.seq(&[first, middle, last]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "first"), Some("int".into()));
        assert_eq!(
            fx.capture_type(&result, "middle"),
            Some("list[Union[str, bytes]]".into())
        );
        assert_eq!(fx.capture_type(&result, "last"), Some("float".into()));
    }

    #[test]
    fn homogeneous_elements() {
        let mut fx = Fixture::new();
        let subject = fx.pool.list(Idx::INT);
        let head = fx.capture("head");
        let tail = fx.star(Some("tail"));
        let pattern = fx.seq(&[head, tail]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "head"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "tail"), Some("list[int]".into()));
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, subject);
    }

    #[test]
    fn union_members_are_filtered() {
        let mut fx = Fixture::new();
        let list = fx.pool.list(Idx::INT);
        let subject = fx.pool.union(&[Idx::STR, list, Idx::NONE]);
        let x = fx.capture("x");
        let pattern = fx.seq(&[x]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, list);
        assert_eq!(result.rest, subject);
    }

    #[test]
    fn tuple_union_by_arity_and_rest() {
        let mut fx = Fixture::new();
        let pair = fx.pool.tuple(&[Idx::INT, Idx::INT]);
        let triple = fx.pool.tuple(&[Idx::STR, Idx::STR, Idx::STR]);
        let subject = fx.pool.union(&[pair, triple]);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.seq(&[a, b]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, pair);
        assert_eq!(result.rest, triple);
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
    }

    #[test]
    fn refutable_item_narrows_tuple_but_keeps_rest() {
        let mut fx = Fixture::new();
        let item = fx.pool.union(&[Idx::INT, Idx::STR]);
        let subject = fx.pool.tuple(&[item, Idx::BYTES]);
        let int = fx.class("int", &[], &[]);
        let rest = fx.wildcard();
        let pattern = fx.seq(&[int, rest]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.fmt(result.ty), "tuple[int, bytes]");
        assert_eq!(result.rest, subject);
    }

    #[test]
    fn object_narrows_to_sequence() {
        let mut fx = Fixture::new();
        let one = fx.int_pat(1);
        let pattern = fx.seq(&[one]);
        let (result, _) = fx.match_pattern(pattern, Idx::OBJECT);
        assert_eq!(fx.fmt(result.ty), "Sequence[int]");
    }

    #[test]
    fn any_subject() {
        let mut fx = Fixture::new();
        let x = fx.capture("x");
        let pattern = fx.seq(&[x]);
        let (result, _) = fx.match_pattern(pattern, Idx::ANY);
        assert!(result.is_reachable());
        assert_eq!(fx.capture_type(&result, "x"), Some("Any".into()));
    }

    #[test]
    fn unmatchable_element_makes_the_pattern_unreachable() {
        let mut fx = Fixture::new();
        let subject = fx.pool.list(Idx::INT);
        let text = fx.str_pat("a");
        let pattern = fx.seq(&[text]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert!(!result.is_reachable());
    }
}

mod mapping {
    use super::*;
    use pretty_assertions::assert_eq;

    fn movie(fx: &mut Fixture) -> Idx {
        let title = fx.name("title");
        let year = fx.name("year");
        let def = fx
            .class_def("Movie")
            .with_typed_dict_field(title, Idx::STR)
            .with_typed_dict_field(year, Idx::INT)
            .with_flags(ClassFlags::TYPED_DICT);
        let class = fx.define(def);
        fx.pool.typed_dict(class)
    }

    #[test]
    fn typed_dict_keys_use_field_types() {
        let mut fx = Fixture::new();
        let subject = movie(&mut fx);
        let title = fx.str_lit("title");
        let t = fx.capture("t");
        let extra = fx.str_lit("extra");
        let e = fx.capture("e");
        let pattern = fx.mapping(&[(title, t), (extra, e)], Some("rest"));
        let (result, diagnostics) = fx.match_pattern(pattern, subject);
        assert!(diagnostics.is_empty());
        assert!(result.is_reachable());
        assert_eq!(fx.capture_type(&result, "t"), Some("str".into()));
        assert_eq!(fx.capture_type(&result, "e"), Some("object".into()));
        assert_eq!(fx.capture_type(&result, "rest"), Some("dict[str, object]".into()));
    }

    #[test]
    fn non_literal_key_degrades_to_object() {
        let mut fx = Fixture::new();
        let subject = movie(&mut fx);
        fx.declare("key", Idx::STR);
        let key = fx.var("key");
        let v = fx.capture("v");
        let pattern = fx.mapping(&[(key, v)], None);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "v"), Some("object".into()));
    }

    #[test]
    fn mapping_values_and_rest() {
        let mut fx = Fixture::new();
        let subject = fx.pool.dict(Idx::STR, Idx::INT);
        let key = fx.str_lit("k");
        let one = fx.int_pat(1);
        let pattern = fx.mapping(&[(key, one)], Some("rest"));
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, subject);
        assert_eq!(fx.capture_type(&result, "rest"), Some("dict[str, int]".into()));
    }

    #[test]
    fn non_mappings_are_unreachable() {
        let mut fx = Fixture::new();
        let subject = fx.pool.list(Idx::INT);
        let pattern = fx.mapping(&[], None);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert!(!result.is_reachable());
    }

    #[test]
    fn object_subject_binds_open_rest() {
        let mut fx = Fixture::new();
        let key = fx.str_lit("k");
        let v = fx.capture("v");
        let pattern = fx.mapping(&[(key, v)], Some("rest"));
        let (result, _) = fx.match_pattern(pattern, Idx::OBJECT);
        assert_eq!(fx.capture_type(&result, "v"), Some("object".into()));
        assert_eq!(
            fx.capture_type(&result, "rest"),
            Some("dict[object, object]".into())
        );
    }
}

mod class {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn self_matching_builtin() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::INT, Idx::STR]);
        let x = fx.capture("x");
        let pattern = fx.class("int", &[x], &[]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(shown(&fx, &result), ("int".into(), "str".into()));
        assert_eq!(fx.capture_type(&result, "x"), Some("int".into()));
    }

    #[test]
    fn self_match_takes_one_positional() {
        let mut fx = Fixture::new();
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.class("str", &[a, b], &[]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(!result.is_reachable());
        assert_eq!(codes(&diagnostics), vec![ErrorCode::E3003]);
    }

    #[test]
    fn positionals_follow_match_fields() {
        let mut fx = Fixture::new();
        let point = fx.record("Point", &[("x", Idx::INT), ("y", Idx::STR)]);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.class("Point", &[a, b], &[]);
        let subject = fx.instance(point);
        let (result, diagnostics) = fx.match_pattern(pattern, subject);
        assert!(diagnostics.is_empty());
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, Idx::NEVER);
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "b"), Some("str".into()));
    }

    #[test]
    fn refutable_sub_pattern_keeps_rest() {
        let mut fx = Fixture::new();
        let point = fx.record("Point", &[("x", Idx::INT)]);
        let zero = fx.int_pat(0);
        let pattern = fx.class("Point", &[zero], &[]);
        let subject = fx.instance(point);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(result.ty, subject);
        assert_eq!(result.rest, subject);
    }

    #[test]
    fn keywords_look_up_attributes() {
        let mut fx = Fixture::new();
        let point = fx.record("Point", &[("x", Idx::INT)]);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.class("Point", &[], &[("x", a), ("missing", b)]);
        let subject = fx.instance(point);
        let (result, diagnostics) = fx.match_pattern(pattern, subject);
        assert!(diagnostics.is_empty());
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "b"), Some("Any".into()));
    }

    #[test]
    fn duplicate_and_shadowing_keywords() {
        let mut fx = Fixture::new();
        fx.record("Point", &[("x", Idx::INT), ("y", Idx::INT)]);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let c = fx.capture("c");
        let pattern = fx.class("Point", &[a], &[("x", b), ("y", c), ("y", c)]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(!result.is_reachable());
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3005),
            vec!["Keyword \"x\" already matches a positional pattern".to_string()]
        );
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3004),
            vec!["Duplicate keyword pattern \"y\"".to_string()]
        );
    }

    #[test]
    fn disjoint_class_skips_sub_patterns() {
        let mut fx = Fixture::new();
        let missing = fx.var("missing");
        let inner = fx.value(missing);
        let pattern = fx.class("int", &[inner], &[]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::STR);
        assert!(!result.is_reachable());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unresolved_class_still_checks_sub_patterns() {
        let mut fx = Fixture::new();
        let x = fx.capture("x");
        let missing = fx.var("nowhere");
        let inner = fx.value(missing);
        let pattern = fx.class("Nope", &[x], &[("k", inner)]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(!result.is_reachable());
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3001),
            vec![
                "Name \"nowhere\" is not defined".to_string(),
                "Name \"Nope\" is not defined".to_string()
            ]
        );
        assert_eq!(fx.capture_type(&result, "x"), Some("Any".into()));
    }

    #[test]
    fn not_a_type() {
        let mut fx = Fixture::new();
        fx.declare("value", Idx::INT);
        let pattern = fx.class("value", &[], &[]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(!result.is_reachable());
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3002),
            vec!["Class pattern must be a type. Found \"int\"".to_string()]
        );
    }

    #[test]
    fn non_final_and_non_literal_match_fields_are_noted() {
        let mut fx = Fixture::new();
        let x = fx.lit_str("x");
        let fields = fx.pool.tuple(&[x, Idx::STR]);
        let x_name = fx.name("x");
        let def = fx
            .class_def("Loose")
            .with_attribute(x_name, Idx::INT)
            .with_match_args(fields, false);
        fx.define(def);
        let a = fx.capture("a");
        let b = fx.capture("b");
        let pattern = fx.class("Loose", &[a, b], &[]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(result.is_reachable());
        assert_eq!(codes(&diagnostics), vec![ErrorCode::E3007, ErrorCode::E3008]);
        assert!(diagnostics.iter().all(|d| !d.is_error()));
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "b"), Some("Any".into()));
    }

    #[test]
    fn positions_after_a_non_literal_match_field_are_unnamed() {
        let mut fx = Fixture::new();
        let a = fx.lit_str("a");
        let c = fx.lit_str("c");
        let fields = fx.pool.tuple(&[a, Idx::STR, c]);
        let a_name = fx.name("a");
        let c_name = fx.name("c");
        let def = fx
            .class_def("M")
            .with_attribute(a_name, Idx::INT)
            .with_attribute(c_name, Idx::BYTES)
            .with_match_args(fields, true);
        fx.define(def);
        let x = fx.capture("x");
        let y = fx.capture("y");
        let z = fx.capture("z");
        let pattern = fx.class("M", &[x, y, z], &[]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(result.is_reachable());
        assert_eq!(codes(&diagnostics), vec![ErrorCode::E3008]);
        assert_eq!(fx.capture_type(&result, "x"), Some("int".into()));
        assert_eq!(fx.capture_type(&result, "y"), Some("Any".into()));
        assert_eq!(fx.capture_type(&result, "z"), Some("Any".into()));
    }

    #[test]
    fn generic_class_fills_parameters_from_subject() {
        let mut fx = Fixture::new();
        let subject = fx.pool.sequence(Idx::INT);
        let x = fx.capture("x");
        let pattern = fx.class("list", &[x], &[]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.fmt(result.ty), "list[int]");
        assert_eq!(fx.capture_type(&result, "x"), Some("list[int]".into()));
    }

    #[test]
    fn bare_alias_to_generic_is_allowed() {
        let mut fx = Fixture::new();
        let t = fx.name("T");
        let item = fx.name("item");
        let next = fx.pool.classes().next_id();
        let t_var = fx.pool.type_var(next, 0);
        let def = fx
            .class_def("Box")
            .with_type_param(t, Variance::Covariant)
            .with_attribute(item, t_var);
        let class = fx.define(def);
        let bare = fx.instance(class);
        fx.declare_alias("AnyBox", bare, false);
        let int_box = fx.pool.instance(class, &[Idx::INT]);
        let i = fx.capture("i");
        let pattern = fx.class("AnyBox", &[], &[("item", i)]);
        let (result, diagnostics) = fx.match_pattern(pattern, int_box);
        assert!(diagnostics.is_empty());
        assert_eq!(fx.capture_type(&result, "i"), Some("int".into()));
    }

    #[test]
    fn named_tuple_uses_match_fields() {
        let mut fx = Fixture::new();
        let base = fx.pool.var_tuple(Idx::INT);
        let x = fx.name("x");
        let fields = fx.match_args(&["x"]);
        let def = fx
            .class_def("Pair")
            .with_base(base)
            .with_attribute(x, Idx::INT)
            .with_flags(ClassFlags::NAMED_TUPLE)
            .with_match_args(fields, true);
        let pair = fx.define(def);
        let a = fx.capture("a");
        let pattern = fx.class("Pair", &[a], &[]);
        let subject = fx.instance(pair);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "a"), Some("int".into()));
        assert_eq!(result.ty, subject);
    }
}

mod alternatives {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn as_binds_the_narrowed_type() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::INT, Idx::STR]);
        let inner = fx.class("int", &[], &[]);
        let pattern = fx.as_pat(inner, "n");
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(fx.capture_type(&result, "n"), Some("int".into()));
        assert_eq!(result.rest, Idx::STR);
    }

    #[test]
    fn or_unions_and_leaves_what_no_alternative_matched() {
        let mut fx = Fixture::new();
        let subject = fx.pool.union(&[Idx::INT, Idx::STR, Idx::BYTES]);
        let int = fx.class("int", &[], &[]);
        let str_ = fx.class("str", &[], &[]);
        let pattern = fx.or(&[int, str_]);
        let (result, _) = fx.match_pattern(pattern, subject);
        assert_eq!(shown(&fx, &result), ("Union[int, str]".into(), "bytes".into()));
    }

    #[test]
    fn or_captures_join() {
        let mut fx = Fixture::new();
        let x1 = fx.capture("x");
        let list = fx.class("list", &[x1], &[]);
        let x2 = fx.capture("x");
        let dict = fx.class("dict", &[x2], &[]);
        let pattern = fx.or(&[list, dict]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert!(diagnostics.is_empty());
        assert_eq!(fx.capture_type(&result, "x"), Some("object".into()));
    }

    #[test]
    fn or_alternatives_must_bind_the_same_names() {
        let mut fx = Fixture::new();
        let x1 = fx.capture("x");
        let y = fx.capture("y");
        let seq = fx.seq(&[x1, y]);
        let x2 = fx.capture("x");
        let list = fx.class("list", &[x2], &[]);
        let pattern = fx.or(&[seq, list]);
        let (result, diagnostics) = fx.match_pattern(pattern, Idx::OBJECT);
        assert_eq!(
            messages(&diagnostics, ErrorCode::E3011),
            vec!["Alternative patterns bind different names".to_string()]
        );
        assert_eq!(fx.capture_type(&result, "y"), Some("object".into()));
    }

    #[test]
    fn all_alternatives_unreachable() {
        let mut fx = Fixture::new();
        let one = fx.int_pat(1);
        let two = fx.int_pat(2);
        let pattern = fx.or(&[one, two]);
        let (result, _) = fx.match_pattern(pattern, Idx::STR);
        assert!(!result.is_reachable());
        assert_eq!(result.rest, Idx::STR);
    }
}
