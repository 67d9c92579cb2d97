//! `@listConstraint`: item counts, uniqueness and per-level options.

use cinch_constraint::{list, Constraint, ConstraintResult, Family, ListConstraintOptions};
use cinch_core::{ElementKind, SchemaElement, TypeRef, Value, Variables};

use crate::{ArgumentDef, InputShape, RegistryError, RegistryResult, LIST_CONSTRAINT_INPUT};

use super::{ConstraintDirective, ScalarDirective};

/// List directive. Depends on the scalar directive for its count arguments.
#[derive(Debug, Clone)]
pub struct ListDirective {
    arguments: Vec<ArgumentDef>,
}

impl ListDirective {
    pub fn new(scalar: &ScalarDirective) -> Self {
        let arguments = vec![
            ArgumentDef::new("minItems", TypeRef::int()).constrained(scalar.non_negative()),
            ArgumentDef::new("maxItems", TypeRef::int()).constrained(scalar.non_negative()),
            ArgumentDef::new("unique", TypeRef::boolean()),
            ArgumentDef::new("innerList", TypeRef::input_object(LIST_CONSTRAINT_INPUT)),
        ];
        Self { arguments }
    }

    /// Constraint for list arguments of other directives that may not be empty.
    pub fn non_empty(&self) -> Constraint {
        Constraint::List(ListConstraintOptions::new().with_min_items(1))
    }
}

impl ConstraintDirective for ListDirective {
    type Options = ListConstraintOptions;

    fn family(&self) -> Family {
        Family::List
    }

    fn arguments(&self) -> &[ArgumentDef] {
        &self.arguments
    }

    /// The recursive `innerList` shape has the same fields as the directive.
    fn input_shapes(&self) -> Vec<InputShape> {
        vec![InputShape::new(
            LIST_CONSTRAINT_INPUT,
            self.arguments.clone(),
        )]
    }

    fn validate_usage(&self, element: &SchemaElement, _options: &ListConstraintOptions) -> bool {
        !matches!(element.kind, ElementKind::ObjectType | ElementKind::InputType)
            && element.type_ref.is_list()
    }

    fn check_configuration(
        &self,
        _directive: &str,
        element: &SchemaElement,
        options: &ListConstraintOptions,
    ) -> RegistryResult<()> {
        let depth = options.depth();
        let type_depth = element.type_ref.list_depth();
        if depth > type_depth {
            return Err(RegistryError::list_too_deep(
                element.coordinate.clone(),
                depth,
                type_depth,
            ));
        }

        if options.requires_unique() && !element.type_ref.leaf().kind.is_leaf() {
            return Err(RegistryError::unique_on_non_leaf(
                element.coordinate.clone(),
                element.type_ref.to_string(),
            ));
        }

        Ok(())
    }

    fn resolve_value(
        &self,
        options: &ListConstraintOptions,
        value: &Value,
        variables: &Variables,
    ) -> ConstraintResult<()> {
        list::validate_in(value, options, variables)
    }

    fn into_constraint(&self, options: ListConstraintOptions) -> Constraint {
        Constraint::List(options)
    }
}
