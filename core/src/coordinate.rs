//! Schema coordinates naming constraint attachment sites.
//!
//! Coordinates print in GraphQL schema-coordinate syntax:
//! `User`, `User.email`, `Query.users(first:)`, `$limit`.

use std::fmt;

/// Identifies the schema element a constraint is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coordinate {
    /// An object, interface or input object type.
    Type(String),
    /// A field of an object/interface type, or a field of an input object.
    Field { type_name: String, field: String },
    /// An argument of a field.
    Argument {
        type_name: String,
        field: String,
        argument: String,
    },
    /// An operation variable.
    Variable(String),
}

impl Coordinate {
    pub fn ty(name: impl Into<String>) -> Self {
        Coordinate::Type(name.into())
    }

    pub fn field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Coordinate::Field {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn argument(
        type_name: impl Into<String>,
        field: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Coordinate::Argument {
            type_name: type_name.into(),
            field: field.into(),
            argument: argument.into(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Coordinate::Variable(name.into())
    }

    /// Name of the type this coordinate lives on, if any.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Coordinate::Type(name) => Some(name),
            Coordinate::Field { type_name, .. } | Coordinate::Argument { type_name, .. } => {
                Some(type_name)
            }
            Coordinate::Variable(_) => None,
        }
    }

    /// Returns true if this is an argument coordinate.
    pub fn is_argument(&self) -> bool {
        matches!(self, Coordinate::Argument { .. })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Type(name) => write!(f, "{}", name),
            Coordinate::Field { type_name, field } => write!(f, "{}.{}", type_name, field),
            Coordinate::Argument {
                type_name,
                field,
                argument,
            } => write!(f, "{}.{}({}:)", type_name, field, argument),
            Coordinate::Variable(name) => write!(f, "${}", name),
        }
    }
}
