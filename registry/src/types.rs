//! Directive argument definitions.

use cinch_constraint::Constraint;
use cinch_core::TypeRef;

/// Name of the recursive list options input shape.
pub const LIST_CONSTRAINT_INPUT: &str = "ListConstraintInput";

/// Name of the `{count, from}` input shape.
pub const COUNT_FROM_INPUT: &str = "CountFromInput";

/// Argument definition of a constraint directive or input shape field.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDef {
    /// Argument name.
    pub name: String,
    /// Declared type.
    pub type_ref: TypeRef,
    /// Constraint the argument's own value must satisfy.
    pub constraint: Option<Constraint>,
}

impl ArgumentDef {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            constraint: None,
        }
    }

    pub fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}

/// A reusable input object shape used by directive arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct InputShape {
    /// Input type name.
    pub name: String,
    /// Field definitions.
    pub fields: Vec<ArgumentDef>,
}

impl InputShape {
    pub fn new(name: impl Into<String>, fields: Vec<ArgumentDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&ArgumentDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The type of this shape.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::input_object(&self.name)
    }
}
