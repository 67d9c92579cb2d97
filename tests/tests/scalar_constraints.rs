//! Scalar constraint integration tests.
//!
//! Numeric bounds, string length, regex and allowed values on fields and arguments.

use cinch_tests::prelude::*;

mod numeric_bounds {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new(
            "numeric_bounds",
            SchemaElement::argument("Query", "temperatures", "above", TypeRef::int()),
        )
        .directive("constraint", json!({"min": -20, "max": 50}))
        .rejects(-21, ConstraintKind::Min)
        .accepts(-20)
        .accepts(50)
        .rejects(51, ConstraintKind::Max)
        .accepts(Value::Null)
    }

    #[test]
    fn test_min_and_max_are_inclusive() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_float_bounds_compare_across_kinds() {
        Scenario::new(
            "float_bounds",
            SchemaElement::field("Product", "rating", TypeRef::float()),
        )
        .directive("constraint", json!({"min": 0, "max": 5}))
        .accepts(4.5)
        .rejects(5.01, ConstraintKind::Max)
        .rejects(-0.5, ConstraintKind::Min)
        .run()
        .unwrap();
    }
}

mod string_rules {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new(
            "string_rules",
            SchemaElement::argument("Mutation", "signUp", "username", TypeRef::string()),
        )
        .directive(
            "constraint",
            json!({"minLength": 3, "maxLength": 8, "regex": "^[a-z]+$"}),
        )
        .accepts("alice")
        .rejects("al", ConstraintKind::MinLength)
        .rejects("bartholomew", ConstraintKind::MaxLength)
        .rejects("Alice", ConstraintKind::Regex)
    }

    #[test]
    fn test_length_then_regex() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_length_counts_characters() {
        Scenario::new(
            "unicode_length",
            SchemaElement::field("Post", "emoji", TypeRef::string()),
        )
        .directive("constraint", json!({"maxLength": 2}))
        .accepts("éé")
        .rejects("ééé", ConstraintKind::MaxLength)
        .run()
        .unwrap();
    }
}

mod allowed_values {
    use super::*;

    #[test]
    fn test_one_of_on_strings_and_lists() {
        Scenario::new(
            "one_of",
            SchemaElement::field("Query", "sizes", TypeRef::list_of(TypeRef::string())),
        )
        .directive("constraint", json!({"oneOf": ["S", "M", "L"]}))
        .accepts("M")
        .accepts(vec!["S", "L"])
        .rejects(vec!["S", "XL"], ConstraintKind::OneOf)
        .run()
        .unwrap();
    }

    #[test]
    fn test_integer_literals_on_float_fields() {
        // GIVEN oneOf written with integer literals on a Float field
        Scenario::new(
            "float_one_of",
            SchemaElement::field("Product", "price", TypeRef::float()),
        )
        .directive("constraint", json!({"oneOf": [1, 2]}))
        // THEN float inputs with those values pass
        .accepts(1.0)
        .accepts(2.0)
        .rejects(3.0, ConstraintKind::OneOf)
        .run()
        .unwrap();
    }

    #[test]
    fn test_integer_literals_on_id_arguments() {
        Scenario::new(
            "id_one_of",
            SchemaElement::argument("Query", "node", "id", TypeRef::id()),
        )
        .directive("constraint", json!({"oneOf": [1, "abc"]}))
        .accepts("1")
        .accepts("abc")
        .rejects("2", ConstraintKind::OneOf)
        .run()
        .unwrap();
    }

    #[test]
    fn test_enum_values_use_their_representation() {
        Scenario::new(
            "enum_one_of",
            SchemaElement::field("Query", "size", TypeRef::string()),
        )
        .directive("constraint", json!({"oneOf": ["small", "medium"]}))
        .accepts(Value::enum_with_repr("SMALL", "small"))
        .rejects(Value::enum_with_repr("LARGE", "large"), ConstraintKind::OneOf)
        .run()
        .unwrap();
    }
}

mod variables {
    use super::*;

    #[test]
    fn test_variables_resolve_before_checks() {
        Scenario::new(
            "variables",
            SchemaElement::argument("Query", "users", "first", TypeRef::int()),
        )
        .directive("constraint", json!({"max": 100}))
        .variables(vars! { "small" => 10, "large" => 1000 })
        .accepts(Value::Variable("small".to_string()))
        .rejects(Value::Variable("large".to_string()), ConstraintKind::Max)
        .accepts(Value::Variable("unbound".to_string()))
        .run()
        .unwrap();
    }
}

mod custom_scalars {
    use super::*;

    #[test]
    fn test_configured_string_scalar() {
        // GIVEN a registry that treats Email as a string
        let registry = RegistryBuilder::new().string_scalar("Email").build().unwrap();
        let email = TypeRef::named("Email", TypeKind::CustomScalar);

        // THEN @constraint attaches and runs
        Scenario::new(
            "email",
            SchemaElement::field("User", "email", email),
        )
        .directive("constraint", json!({"regex": "@example\\.com$"}))
        .accepts("ada@example.com")
        .rejects("ada@example.org", ConstraintKind::Regex)
        .run_with(&registry)
        .unwrap();
    }
}
