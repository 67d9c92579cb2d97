//! `@constraint`: numeric bounds, string length, regex and allowed values.

use std::collections::HashSet;

use cinch_constraint::{
    scalar, Constraint, ConstraintOptions, ConstraintResult, Family, ListConstraintOptions,
};
use cinch_core::{ElementKind, Scalar, SchemaElement, TypeKind, TypeRef, Value, Variables};

use crate::{ArgumentDef, RegistryError, RegistryResult};

use super::ConstraintDirective;

/// Scalar directive. Constructed first: later directives use it to constrain their
/// numeric arguments.
#[derive(Debug, Clone)]
pub struct ScalarDirective {
    arguments: Vec<ArgumentDef>,
    /// Custom scalars serialized as strings (Email, DateTime, ...).
    string_scalars: HashSet<String>,
}

impl ScalarDirective {
    pub fn new<I, S>(string_scalars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let non_empty = Constraint::List(ListConstraintOptions::new().with_min_items(1));
        let non_negative = Constraint::Scalar(ConstraintOptions::new().with_min(0));
        let scalar_item = TypeRef::named("ConstraintScalar", TypeKind::CustomScalar).non_null();

        let arguments = vec![
            ArgumentDef::new("min", TypeRef::float()),
            ArgumentDef::new("max", TypeRef::float()),
            ArgumentDef::new("oneOf", TypeRef::list_of(scalar_item)).constrained(non_empty),
            ArgumentDef::new("minLength", TypeRef::int()).constrained(non_negative.clone()),
            ArgumentDef::new("maxLength", TypeRef::int()).constrained(non_negative),
            ArgumentDef::new("regex", TypeRef::string()),
        ];

        Self {
            arguments,
            string_scalars: string_scalars.into_iter().map(Into::into).collect(),
        }
    }

    /// Constraint for count and size arguments of other directives.
    pub fn non_negative(&self) -> Constraint {
        Constraint::Scalar(ConstraintOptions::new().with_min(0))
    }

    fn leaf(&self, type_ref: &TypeRef) -> Option<Leaf> {
        let leaf = type_ref.leaf();
        match leaf.kind {
            TypeKind::Int => Some(Leaf::Int),
            TypeKind::Float => Some(Leaf::Float),
            TypeKind::Id => Some(Leaf::Id),
            TypeKind::String => Some(Leaf::Text),
            TypeKind::CustomScalar if self.string_scalars.contains(&leaf.name) => Some(Leaf::Text),
            _ => None,
        }
    }
}

/// Leaf kinds the scalar directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    Int,
    Float,
    Id,
    /// String and string-backed custom scalars.
    Text,
}

impl Leaf {
    fn is_numeric(self) -> bool {
        matches!(self, Leaf::Int | Leaf::Float)
    }

    /// The `oneOf` entry as a value of this leaf, the way input coercion would read
    /// the literal. None if the literal cannot be a value of the leaf.
    fn coerce(self, entry: &Scalar) -> Option<Scalar> {
        match (self, entry) {
            (Leaf::Int, Scalar::Int(_)) | (Leaf::Float, Scalar::Float(_)) => Some(entry.clone()),
            (Leaf::Float, Scalar::Int(i)) => Some(Scalar::Float(*i as f64)),
            (Leaf::Id | Leaf::Text, Scalar::String(_)) => Some(entry.clone()),
            (Leaf::Id, Scalar::Int(i)) => Some(Scalar::String(i.to_string())),
            _ => None,
        }
    }
}

impl Default for ScalarDirective {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl ConstraintDirective for ScalarDirective {
    type Options = ConstraintOptions;

    fn family(&self) -> Family {
        Family::Scalar
    }

    fn arguments(&self) -> &[ArgumentDef] {
        &self.arguments
    }

    fn validate_usage(&self, element: &SchemaElement, _options: &ConstraintOptions) -> bool {
        !matches!(element.kind, ElementKind::ObjectType | ElementKind::InputType)
            && self.leaf(&element.type_ref).is_some()
    }

    /// Numeric axes need a numeric leaf, string axes a string leaf, and every
    /// `oneOf` entry must be a value of the leaf.
    fn check_configuration(
        &self,
        directive: &str,
        element: &SchemaElement,
        options: &ConstraintOptions,
    ) -> RegistryResult<()> {
        let Some(leaf) = self.leaf(&element.type_ref) else {
            return Ok(());
        };
        let mismatch = |argument: &str| {
            RegistryError::incompatible_argument(
                directive,
                argument,
                element.coordinate.clone(),
                element.type_ref.to_string(),
            )
        };

        let numeric = [("min", options.min.is_some()), ("max", options.max.is_some())];
        let textual = [
            ("minLength", options.min_length.is_some()),
            ("maxLength", options.max_length.is_some()),
            ("regex", options.regex.is_some()),
        ];
        let misplaced = if leaf.is_numeric() { &textual[..] } else { &numeric[..] };
        if let Some(&(argument, _)) = misplaced.iter().find(|(_, set)| *set) {
            return Err(mismatch(argument));
        }

        for (index, entry) in options.one_of.iter().flatten().enumerate() {
            if leaf.coerce(entry).is_none() {
                return Err(mismatch(&format!("oneOf[{}]", index)));
            }
        }
        Ok(())
    }

    fn coerce_options(
        &self,
        element: &SchemaElement,
        mut options: ConstraintOptions,
    ) -> ConstraintOptions {
        if let (Some(leaf), Some(one_of)) = (self.leaf(&element.type_ref), options.one_of.as_mut()) {
            for entry in one_of.iter_mut() {
                if let Some(coerced) = leaf.coerce(entry) {
                    *entry = coerced;
                }
            }
        }
        options
    }

    fn resolve_value(
        &self,
        options: &ConstraintOptions,
        value: &Value,
        variables: &Variables,
    ) -> ConstraintResult<()> {
        scalar::validate_in(value, options, variables)
    }

    fn into_constraint(&self, options: ConstraintOptions) -> Constraint {
        Constraint::Scalar(options)
    }
}
