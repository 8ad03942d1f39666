use sift_types::{ClassFlags, ClassId, Idx};

use super::*;
use crate::test_helpers::Fixture;

#[test]
fn text_types_are_never_sequence_like() {
    let mut fx = Fixture::new();
    let literal = fx.lit_str("abc");
    for ty in [Idx::STR, Idx::BYTES, Idx::BYTEARRAY, literal] {
        assert!(is_text_type(&mut fx.pool, ty), "{}", fx.fmt(ty));
        assert!(!is_sequence_like(&mut fx.pool, ty), "{}", fx.fmt(ty));
        assert!(!can_match_sequence(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
}

#[test]
fn containers_are_sequence_like() {
    let mut fx = Fixture::new();
    let list = fx.pool.list(Idx::INT);
    let fixed = fx.pool.tuple(&[Idx::INT, Idx::STR]);
    let variadic = fx.pool.var_tuple(Idx::INT);
    let sequence = fx.pool.sequence(Idx::OBJECT);
    let deque = fx.pool.instance(ClassId::DEQUE, &[Idx::INT]);
    let range = fx.instance(ClassId::RANGE);
    let memoryview = fx.instance(ClassId::MEMORYVIEW);
    for ty in [list, fixed, variadic, sequence, deque, range, memoryview, Idx::ANY] {
        assert!(is_sequence_like(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
    let dict = fx.pool.dict(Idx::STR, Idx::INT);
    let set = fx.pool.set(Idx::INT);
    for ty in [Idx::INT, Idx::NONE, dict, set, Idx::OBJECT, Idx::NEVER] {
        assert!(!is_sequence_like(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
}

#[test]
fn supertypes_of_sequence_can_still_match() {
    let mut fx = Fixture::new();
    assert!(can_match_sequence(&mut fx.pool, Idx::OBJECT));
    assert!(!can_match_sequence(&mut fx.pool, Idx::INT));
    assert!(can_match_mapping(&mut fx.pool, Idx::OBJECT));
    assert!(!can_match_mapping(&mut fx.pool, Idx::FLOAT));
}

#[test]
fn mapping_like_includes_typed_dicts() {
    let mut fx = Fixture::new();
    let key = fx.name("key");
    let def = fx
        .class_def("Movie")
        .with_typed_dict_field(key, Idx::STR)
        .with_flags(ClassFlags::TYPED_DICT);
    let movie = fx.define(def);
    let movie = fx.pool.typed_dict(movie);
    let dict = fx.pool.dict(Idx::STR, Idx::INT);
    let mapping = fx.pool.mapping(Idx::STR, Idx::OBJECT);
    for ty in [movie, dict, mapping, Idx::ANY] {
        assert!(is_mapping_like(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
    let list = fx.pool.list(Idx::INT);
    assert!(!is_mapping_like(&mut fx.pool, list));
    assert!(!is_mapping_like(&mut fx.pool, Idx::OBJECT));
}

#[test]
fn inner_narrowing_only_for_covariant_views() {
    let mut fx = Fixture::new();
    let sequence = fx.pool.sequence(Idx::OBJECT);
    let fixed = fx.pool.tuple(&[Idx::INT]);
    let variadic = fx.pool.var_tuple(Idx::OBJECT);
    for ty in [sequence, fixed, variadic, Idx::OBJECT, Idx::ANY] {
        assert!(inner_narrowing_allowed(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
    let list = fx.pool.list(Idx::OBJECT);
    let range = fx.instance(ClassId::RANGE);
    let dict = fx.pool.dict(Idx::STR, Idx::OBJECT);
    for ty in [list, range, dict, Idx::INT] {
        assert!(!inner_narrowing_allowed(&mut fx.pool, ty), "{}", fx.fmt(ty));
    }
}
