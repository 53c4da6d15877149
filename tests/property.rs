//! Property-based tests for the parser/serializer round trip.

use jsontree::{parse, serialize, Value};
use proptest::prelude::*;

/// Generate a leaf value (no containers). Numbers are restricted to finite
/// values that survive a decimal round-trip, and strings avoid characters
/// that need `\u` escaping so the generated text stays easy to read in
/// shrunk failures.
fn arb_leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::True),
        Just(Value::False),
        any::<f64>()
            .prop_filter("finite only", |f| f.is_finite())
            .prop_map(Value::Number),
        "[a-zA-Z0-9_ ]{0,40}".prop_map(Value::String),
    ]
}

/// Generate a value tree with bounded nesting depth, so shrinking stays
/// tractable and recursion never approaches the stack limit.
fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_leaf_value().boxed()
    } else {
        prop_oneof![
            3 => arb_leaf_value(),
            1 => prop::collection::vec(arb_value(depth - 1), 0..5).prop_map(Value::Array),
            1 => prop::collection::vec(
                ("[a-z]{1,10}", arb_value(depth - 1)),
                0..5,
            )
            .prop_map(|pairs| {
                Value::Object(
                    pairs
                        .into_iter()
                        .map(|(k, v)| jsontree::Member::new(k, v))
                        .collect(),
                )
            }),
        ]
        .boxed()
    }
}

proptest! {
    /// Invariant 1: parse(serialize(v)) is structurally equal to v.
    #[test]
    fn parse_serialize_round_trips(v in arb_value(3)) {
        let text = serialize(&v);
        let reparsed = parse(&text).expect("serializer output must reparse");
        prop_assert_eq!(reparsed, v);
    }

    /// Invariant 6: any finite double survives a serialize/parse round trip
    /// bit-for-bit.
    #[test]
    fn number_round_trips_bit_exactly(n in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let v = Value::Number(n);
        let text = serialize(&v);
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed.get_number().to_bits(), n.to_bits());
    }

    /// Invariant 2: copy_from yields disjoint, structurally equal storage.
    #[test]
    fn copy_is_structurally_equal_and_disjoint(v in arb_value(3)) {
        let mut dst = Value::Null;
        dst.copy_from(&v);
        prop_assert_eq!(&dst, &v);

        if let Value::Array(_) = &mut dst {
            dst.pushback_array_element().set_number(12345.0);
            prop_assert_ne!(&dst, &v);
        }
    }

    /// Invariant 3: move_from transfers the payload and leaves the source Null.
    #[test]
    fn move_leaves_source_null(v in arb_value(3)) {
        let mut src = v.clone();
        let mut dst = Value::Null;
        dst.move_from(&mut src);
        prop_assert_eq!(&dst, &v);
        prop_assert_eq!(src, Value::Null);
    }

    /// Invariant 4: pushback followed by popback restores array size.
    #[test]
    fn pushback_popback_restores_size(v in prop::collection::vec(arb_leaf_value(), 0..10)) {
        let mut arr = Value::Array(v);
        let size_before = arr.get_array_size();
        arr.pushback_array_element();
        arr.popback_array_element();
        prop_assert_eq!(arr.get_array_size(), size_before);
    }

    /// Invariant 5: free is idempotent.
    #[test]
    fn free_is_idempotent(v in arb_value(3)) {
        let mut v = v;
        v.free();
        prop_assert_eq!(&v, &Value::Null);
        v.free();
        prop_assert_eq!(v, Value::Null);
    }
}
