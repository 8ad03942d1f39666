//! Property-based tests for sequence patterns.
//!
//! Generates tuple subjects and sequence patterns of random shape and checks
//! the reachability rules that must hold for every combination.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use sift_ir::PatternId;
use sift_match::test_helpers::Fixture;
use sift_types::Idx;

fn item_strategy() -> impl Strategy<Value = Idx> {
    prop::sample::select(vec![Idx::INT, Idx::STR, Idx::BYTES, Idx::FLOAT, Idx::NONE])
}

fn text_strategy() -> impl Strategy<Value = Idx> {
    prop::sample::select(vec![Idx::STR, Idx::BYTES, Idx::BYTEARRAY])
}

/// `len` capture elements, with a star element inserted at `star`.
fn sequence_pattern(fx: &mut Fixture, len: usize, star: Option<usize>) -> PatternId {
    let mut elements: Vec<PatternId> = (0..len).map(|i| fx.capture(&format!("x{i}"))).collect();
    if let Some(at) = star {
        let star = fx.star(Some("rest"));
        elements.insert(at.min(len), star);
    }
    fx.seq(&elements)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn tuple_arity_decides_reachability(
        items in prop::collection::vec(item_strategy(), 0..6),
        len in 0usize..6,
        star in prop::option::of(0usize..6),
    ) {
        let mut fx = Fixture::new();
        let subject = fx.pool.tuple(&items);
        let pattern = sequence_pattern(&mut fx, len, star);
        let (result, diagnostics) = fx.match_pattern(pattern, subject);

        let fits = match star {
            Some(_) => items.len() >= len,
            None => items.len() == len,
        };
        prop_assert_eq!(result.is_reachable(), fits);
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn fixed_captures_take_item_types(items in prop::collection::vec(item_strategy(), 1..6)) {
        let mut fx = Fixture::new();
        let subject = fx.pool.tuple(&items);
        let pattern = sequence_pattern(&mut fx, items.len(), None);
        let (result, _) = fx.match_pattern(pattern, subject);

        prop_assert!(result.is_reachable());
        for (i, &item) in items.iter().enumerate() {
            let name = fx.name(&format!("x{i}"));
            prop_assert_eq!(result.captures.get(name), Some(item));
        }
        prop_assert_eq!(result.rest, Idx::NEVER);
    }

    #[test]
    fn text_never_matches_a_sequence(
        text in text_strategy(),
        len in 0usize..4,
        star in prop::option::of(0usize..4),
    ) {
        let mut fx = Fixture::new();
        let pattern = sequence_pattern(&mut fx, len, star);
        let (result, diagnostics) = fx.match_pattern(pattern, text);

        prop_assert!(!result.is_reachable());
        prop_assert_eq!(result.rest, text);
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn text_members_drop_out_of_unions(text in text_strategy(), len in 0usize..4) {
        let mut fx = Fixture::new();
        let list = fx.pool.list(Idx::INT);
        let subject = fx.pool.union(&[text, list]);
        let pattern = sequence_pattern(&mut fx, len, None);
        let (result, _) = fx.match_pattern(pattern, subject);

        prop_assert_eq!(result.ty, list);
    }
}
