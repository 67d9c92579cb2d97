//! `@objectConstraint`: presence rules over the fields of an object or the
//! arguments of a field.

use cinch_constraint::{object, Constraint, ConstraintResult, Family, ObjectPresenceOptions};
use cinch_core::{ElementKind, SchemaElement, TypeRef, Value, Variables};

use crate::{ArgumentDef, InputShape, RegistryError, RegistryResult, COUNT_FROM_INPUT};

use super::{ConstraintDirective, ListDirective, ScalarDirective};

/// Object presence directive. Constructed last: it needs the scalar directive for
/// counts and the list directive for its non-empty name lists.
#[derive(Debug, Clone)]
pub struct ObjectDirective {
    arguments: Vec<ArgumentDef>,
    count_from: InputShape,
}

impl ObjectDirective {
    pub fn new(scalar: &ScalarDirective, list: &ListDirective) -> Self {
        let names = || TypeRef::list_of(TypeRef::string().non_null());
        let count_from = InputShape::new(
            COUNT_FROM_INPUT,
            vec![
                ArgumentDef::new("count", TypeRef::int().non_null())
                    .constrained(scalar.non_negative()),
                ArgumentDef::new("from", names().non_null()).constrained(list.non_empty()),
            ],
        );

        let arguments = vec![
            ArgumentDef::new("atLeastOne", names()).constrained(list.non_empty()),
            ArgumentDef::new("atMostOne", names()).constrained(list.non_empty()),
            ArgumentDef::new("exactlyOne", names()).constrained(list.non_empty()),
            ArgumentDef::new("atLeast", count_from.type_ref()),
            ArgumentDef::new("atMost", count_from.type_ref()),
            ArgumentDef::new("exactly", count_from.type_ref()),
        ];

        Self {
            arguments,
            count_from,
        }
    }
}

impl ConstraintDirective for ObjectDirective {
    type Options = ObjectPresenceOptions;

    fn family(&self) -> Family {
        Family::Object
    }

    fn arguments(&self) -> &[ArgumentDef] {
        &self.arguments
    }

    fn input_shapes(&self) -> Vec<InputShape> {
        vec![self.count_from.clone()]
    }

    /// Object and input types, or fields with arguments.
    fn validate_usage(&self, element: &SchemaElement, _options: &ObjectPresenceOptions) -> bool {
        match element.kind {
            ElementKind::ObjectType | ElementKind::InputType => true,
            ElementKind::Field => !element.members.is_empty(),
            _ => false,
        }
    }

    fn check_configuration(
        &self,
        directive: &str,
        element: &SchemaElement,
        options: &ObjectPresenceOptions,
    ) -> RegistryResult<()> {
        match options
            .referenced_fields()
            .find(|name| !element.has_member(name))
        {
            Some(member) => Err(RegistryError::unknown_member(
                directive,
                element.coordinate.clone(),
                member,
            )),
            None => Ok(()),
        }
    }

    fn resolve_value(
        &self,
        options: &ObjectPresenceOptions,
        value: &Value,
        variables: &Variables,
    ) -> ConstraintResult<()> {
        object::validate_value(value, options, variables)
    }

    fn into_constraint(&self, options: ObjectPresenceOptions) -> Constraint {
        Constraint::Object(options)
    }
}
