//! Property-based tests for evaluator and variance invariants.

use std::collections::HashSet;

use cinch_constraint::{list, object, scalar, upload};
use cinch_tests::prelude::*;
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

// ==================== Generators ====================

/// A list item paired with the identity uniqueness should see. Small pools make
/// duplicates likely: ints and floats of equal value stay apart, the two float
/// zeros collide, and enums collide with their representation.
fn leaf_item() -> BoxedStrategy<(Value, String)> {
    let float = |f: f64, key: &str| Just((Value::Float(f), format!("float {}", key)));

    prop_oneof![
        (-3i64..3).prop_map(|i| (Value::Int(i), format!("int {}", i))),
        "[ab]{1,2}".prop_map(|s| (Value::from(s.as_str()), format!("string {}", s))),
        float(0.0, "0"),
        float(-0.0, "0"),
        float(1.5, "1.5"),
        float(2.0, "2"),
    ]
    .boxed()
}

fn keyed_item() -> impl Strategy<Value = (Value, String)> {
    prop_oneof![
        leaf_item(),
        (leaf_item(), "[A-C]").prop_map(|((repr, key), name)| {
            (Value::enum_with_repr(name, repr), key)
        }),
    ]
}

fn scalar_options() -> impl Strategy<Value = ConstraintOptions> {
    (
        proptest::option::of(-100i64..100),
        proptest::option::of(-100i64..100),
        proptest::option::of(proptest::collection::vec(-10i64..10, 1..5)),
        proptest::option::of(0usize..10),
        proptest::option::of(0usize..10),
    )
        .prop_map(|(min, max, one_of, min_length, max_length)| {
            let mut options = ConstraintOptions::new();
            if let Some(min) = min {
                options = options.with_min(min);
            }
            if let Some(max) = max {
                options = options.with_max(max);
            }
            if let Some(one_of) = one_of {
                options = options.with_one_of(one_of);
            }
            if let Some(min_length) = min_length {
                options = options.with_min_length(min_length);
            }
            if let Some(max_length) = max_length {
                options = options.with_max_length(max_length);
            }
            options
        })
}

fn list_options() -> impl Strategy<Value = ListConstraintOptions> {
    let level = (
        proptest::option::of(0usize..5),
        proptest::option::of(0usize..5),
        any::<bool>(),
    )
        .prop_map(|(min_items, max_items, unique)| ListConstraintOptions {
            min_items,
            max_items,
            unique,
            inner_list: None,
        });

    (level.clone(), proptest::option::of(level)).prop_map(|(mut outer, inner)| {
        outer.inner_list = inner.map(Box::new);
        outer
    })
}

fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-200i64..200).prop_map(Value::Int),
        "[a-z]{0,12}".prop_map(Value::String),
    ]
}

fn presence_options() -> impl Strategy<Value = ObjectPresenceOptions> {
    (0usize..4).prop_map(|count| {
        ObjectPresenceOptions::new()
            .with_at_least_one(["a", "b"])
            .with_at_most(CountFrom::new(count, ["a", "b", "c"]))
    })
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(config())]

    #[test]
    fn prop_scalar_validation_is_idempotent(
        options in scalar_options(),
        value in leaf_value(),
    ) {
        let first = scalar::validate(&value, &options);
        let second = scalar::validate(&value, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_null_always_passes(
        scalar_opts in scalar_options(),
        list_opts in list_options(),
        presence in presence_options(),
        max_size in proptest::option::of(0u64..1000),
    ) {
        let upload_opts = UploadConstraintOptions {
            max_size,
            mime_type: Some(vec!["image/png".to_string()]),
        };

        prop_assert_eq!(scalar::validate(&Value::Null, &scalar_opts), Ok(()));
        prop_assert_eq!(list::validate(&Value::Null, &list_opts), Ok(()));
        prop_assert_eq!(
            object::validate_value(&Value::Null, &presence, &Variables::new()),
            Ok(())
        );
        prop_assert_eq!(upload::validate(&Value::Null, &upload_opts), Ok(()));
    }

    #[test]
    fn prop_unique_matches_set_semantics(
        keyed in proptest::collection::vec(keyed_item(), 0..10),
    ) {
        let options = ListConstraintOptions::new().unique();
        let distinct = keyed.iter().map(|(_, key)| key).collect::<HashSet<_>>().len() == keyed.len();
        let items: Vec<Value> = keyed.into_iter().map(|(value, _)| value).collect();

        let result = list::validate(&Value::from(items), &options);

        if distinct {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(ConstraintKind::Unique));
        }
    }

    #[test]
    fn prop_variance_is_reflexive(
        scalar_opts in scalar_options(),
        list_opts in list_options(),
        position in prop_oneof![Just(Position::Output), Just(Position::Input)],
    ) {
        prop_assert_eq!(check_variance(Some(&scalar_opts), Some(&scalar_opts), position), Ok(()));
        prop_assert_eq!(check_variance(Some(&list_opts), Some(&list_opts), position), Ok(()));
    }

    #[test]
    fn prop_raising_min_narrows(parent_min in -100i64..100, delta in -50i64..50) {
        let parent = ConstraintOptions::new().with_min(parent_min);
        let child = ConstraintOptions::new().with_min(parent_min + delta);

        let result = check_covariant(Some(&parent), Some(&child));

        if delta >= 0 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(VarianceViolation));
        }
    }

    #[test]
    fn prop_at_most_permits_its_bound(count in 0usize..4, set in 0usize..4) {
        let names = ["a", "b", "c"];
        let set = set.min(names.len());
        let mut fields = cinch_core::Fields::new();
        for name in &names[..set] {
            fields.insert(name.to_string(), Value::Int(1));
        }
        let options = ObjectPresenceOptions::new().with_at_most(CountFrom::new(count, names));

        let result = object::validate(&fields, &options);

        if set <= count {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(ConstraintKind::AtMost));
        }
    }
}
