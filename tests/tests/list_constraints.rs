//! List constraint integration tests.

use cinch_tests::prelude::*;

mod item_counts {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new(
            "item_counts",
            SchemaElement::argument("Mutation", "tag", "labels", TypeRef::list_of(TypeRef::int())),
        )
        .directive("listConstraint", json!({"minItems": 1, "maxItems": 3}))
        .accepts(vec![1, 2, 3])
        .rejects(Vec::<i64>::new(), ConstraintKind::MinItems)
        .rejects(vec![1, 2, 3, 4], ConstraintKind::MaxItems)
        .accepts(Value::Null)
    }

    #[test]
    fn test_min_and_max_items() {
        scenario().run().unwrap();
    }
}

mod uniqueness {
    use super::*;

    #[test]
    fn test_duplicates_rejected() {
        Scenario::new(
            "unique",
            SchemaElement::field("Query", "ids", TypeRef::list_of(TypeRef::int())),
        )
        .directive("listConstraint", json!({"unique": true}))
        .rejects(vec![1, 1], ConstraintKind::Unique)
        .accepts(vec![1, 2, 3])
        .run()
        .unwrap();
    }

    #[test]
    fn test_variables_are_resolved_before_comparison() {
        Scenario::new(
            "unique_variables",
            SchemaElement::argument("Query", "users", "ids", TypeRef::list_of(TypeRef::id())),
        )
        .directive("listConstraint", json!({"unique": true}))
        .variables(vars! { "a" => "u1" })
        .rejects(
            vec![Value::Variable("a".to_string()), Value::from("u1")],
            ConstraintKind::Unique,
        )
        .run()
        .unwrap();
    }
}

mod nested_lists {
    use super::*;

    pub fn scenario() -> Scenario {
        let grid = TypeRef::list_of(TypeRef::list_of(TypeRef::int()));
        Scenario::new("nested_lists", SchemaElement::field("Board", "cells", grid))
            .directive(
                "listConstraint",
                json!({"maxItems": 2, "innerList": {"minItems": 2, "unique": true}}),
            )
            .accepts(vec![vec![1, 2], vec![3, 4]])
            .rejects(vec![vec![1, 2], vec![3]], ConstraintKind::MinItems)
            .rejects(vec![vec![1, 1]], ConstraintKind::Unique)
            .rejects(vec![vec![1, 2], vec![3, 4], vec![5, 6]], ConstraintKind::MaxItems)
            .accepts(Value::from(vec![Value::Null, Value::from(vec![7, 8])]))
    }

    #[test]
    fn test_inner_list_applies_per_level() {
        scenario().run().unwrap();
    }
}
