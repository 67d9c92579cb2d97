//! Override checks through the registry.

use cinch_tests::prelude::*;
use pretty_assertions::assert_eq;

fn registry() -> Registry {
    RegistryBuilder::new().build().unwrap()
}

fn field_site(registry: &Registry, type_name: &str, arguments: serde_json::Value) -> Site {
    registry
        .site(SchemaElement::field(type_name, "score", TypeRef::int()))
        .directive("constraint", arguments)
        .done()
        .unwrap()
}

fn argument_site(registry: &Registry, type_name: &str, arguments: serde_json::Value) -> Site {
    registry
        .site(SchemaElement::argument(type_name, "search", "limit", TypeRef::int()))
        .directive("constraint", arguments)
        .done()
        .unwrap()
}

mod covariant_fields {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_of_superset_is_rejected() {
        let parent = ConstraintOptions::new().with_one_of([1, 2]);
        let child = ConstraintOptions::new().with_one_of([0, 1, 2, 3]);

        assert_eq!(
            check_covariant(Some(&parent), Some(&child)),
            Err(VarianceViolation)
        );
    }

    #[test]
    fn test_narrower_field_override_passes() {
        // GIVEN an interface field and an implementing field
        let registry = registry();
        let parent = field_site(&registry, "Scored", json!({"min": 0, "max": 100}));
        let child = field_site(&registry, "Game", json!({"min": 10, "max": 90}));

        // THEN the narrower override is accepted and the reverse is not
        assert!(registry.check_override(&parent, &child).is_ok());
        let error = registry.check_override(&child, &parent).unwrap_err();
        assert!(error.is_variance());
    }

    #[test]
    fn test_one_of_compares_in_the_leaf_kind() {
        // GIVEN the same allowed price written as 1.0 and as 1
        let registry = registry();
        let price = |type_name: &str, arguments| {
            registry
                .site(SchemaElement::field(type_name, "price", TypeRef::float()))
                .directive("constraint", arguments)
                .done()
                .unwrap()
        };
        let parent = price("Priced", json!({"oneOf": [1.0, 2.5]}));
        let child = price("Book", json!({"oneOf": [1]}));

        // THEN the override is a narrowing
        assert!(registry.check_override(&parent, &child).is_ok());
    }

    #[test]
    fn test_dropped_family_among_several_is_rejected() {
        // GIVEN a parent with scalar and list constraints and a child keeping only one
        let registry = registry();
        let element = |type_name: &str| {
            SchemaElement::field(type_name, "scores", TypeRef::list_of(TypeRef::int()))
        };
        let parent = registry
            .site(element("Scored"))
            .directive("constraint", json!({"min": 0}))
            .directive("listConstraint", json!({"maxItems": 10}))
            .done()
            .unwrap();
        let partial = registry
            .site(element("Game"))
            .directive("constraint", json!({"min": 1}))
            .done()
            .unwrap();
        let full = registry
            .site(element("Game"))
            .directive("constraint", json!({"min": 1}))
            .directive("listConstraint", json!({"maxItems": 5}))
            .done()
            .unwrap();

        // THEN the dropped list constraint is named
        match registry.check_override(&parent, &partial) {
            Err(RegistryError::Variance { directive, .. }) => {
                assert_eq!(directive, "listConstraint")
            }
            other => panic!("expected Variance, got {:?}", other),
        }
        assert!(registry.check_override(&parent, &full).is_ok());
    }

    #[test]
    fn test_dropped_constraint_is_rejected() {
        let registry = registry();
        let parent = field_site(&registry, "Scored", json!({"max": 100}));
        let child = Site::new(SchemaElement::field("Game", "score", TypeRef::int()));

        match registry.check_override(&parent, &child) {
            Err(RegistryError::Variance {
                directive,
                parent,
                child,
                ..
            }) => {
                assert_eq!(directive, "constraint");
                assert_eq!(parent.to_string(), "Scored.score");
                assert_eq!(child.to_string(), "Game.score");
            }
            other => panic!("expected Variance, got {:?}", other),
        }
    }
}

mod contravariant_arguments {
    use super::*;

    #[test]
    fn test_argument_may_accept_more() {
        let registry = registry();
        let parent = argument_site(&registry, "Searchable", json!({"max": 50}));
        let wider = argument_site(&registry, "Catalog", json!({"max": 100}));
        let narrower = argument_site(&registry, "Catalog", json!({"max": 10}));

        assert!(registry.check_override(&parent, &wider).is_ok());
        assert!(registry.check_override(&parent, &narrower).is_err());
    }

    #[test]
    fn test_argument_may_not_add_constraints() {
        let registry = registry();
        let parent = Site::new(SchemaElement::argument(
            "Searchable",
            "search",
            "limit",
            TypeRef::int(),
        ));
        let child = argument_site(&registry, "Catalog", json!({"max": 100}));

        assert!(registry.check_override(&parent, &child).is_err());
        assert!(registry.check_override(&child, &parent).is_ok());
    }

    #[test]
    fn test_presence_on_field_arguments_is_contravariant() {
        // GIVEN presence rules over a field's arguments
        let registry = registry();
        let element = |type_name: &str| {
            SchemaElement::field(type_name, "search", TypeRef::object("Result"))
                .with_members(["byId", "byName", "byEmail"])
        };
        let parent = registry
            .site(element("Searchable"))
            .directive("objectConstraint", json!({"exactlyOne": ["byId", "byName"]}))
            .done()
            .unwrap();
        let stricter = registry
            .site(element("Catalog"))
            .directive(
                "objectConstraint",
                json!({
                    "exactlyOne": ["byId", "byName"],
                    "atLeastOne": ["byId", "byName", "byEmail"]
                }),
            )
            .done()
            .unwrap();

        // THEN the override may drop the rule but not add one
        assert!(registry.check_override(&parent, &Site::new(element("Catalog"))).is_ok());
        assert!(registry.check_override(&parent, &stricter).is_err());
    }
}

mod list_and_upload {
    use super::*;

    #[test]
    fn test_inner_list_override() {
        let registry = registry();
        let grid = |type_name: &str, arguments| {
            registry
                .site(SchemaElement::field(
                    type_name,
                    "cells",
                    TypeRef::list_of(TypeRef::list_of(TypeRef::int())),
                ))
                .directive("listConstraint", arguments)
                .done()
                .unwrap()
        };

        let parent = grid("Board", json!({"innerList": {"maxItems": 8}}));
        let tighter = grid("Chess", json!({"innerList": {"maxItems": 8, "unique": true}}));
        let looser = grid("Go", json!({"innerList": {"maxItems": 19}}));

        assert!(registry.check_override(&parent, &tighter).is_ok());
        assert!(registry.check_override(&parent, &looser).is_err());
    }

    #[test]
    fn test_upload_argument_override() {
        let registry = registry();
        let avatar = |type_name: &str, arguments| {
            registry
                .site(SchemaElement::argument(type_name, "upload", "file", TypeRef::upload()))
                .directive("uploadConstraint", arguments)
                .done()
                .unwrap()
        };

        let parent = avatar("Profile", json!({"mimeType": ["image/png"]}));
        let child = avatar("Admin", json!({"mimeType": ["image/png", "image/gif"]}));

        assert!(registry.check_override(&parent, &child).is_ok());
        assert!(registry.check_override(&child, &parent).is_err());
    }
}
