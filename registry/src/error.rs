//! Registry error types.

use cinch_constraint::ConstraintKind;
use cinch_core::Coordinate;
use cinch_variance::VarianceViolation;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Configuration and variance errors, raised while the schema is built.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate directive name: {0}")]
    DuplicateDirectiveName(String),

    #[error("Unknown constraint directive: @{0}")]
    UnknownDirective(String),

    #[error("Directive @{directive} is attached more than once to {coordinate}")]
    DuplicateDirective {
        directive: String,
        coordinate: Coordinate,
    },

    #[error("Malformed arguments for @{directive}: {message}")]
    MalformedArguments { directive: String, message: String },

    #[error("Invalid argument {argument} for @{directive}: {kind}")]
    InvalidArgument {
        directive: String,
        argument: String,
        kind: ConstraintKind,
    },

    #[error("Directive @{directive} cannot be used on {coordinate} of type {type_name}")]
    IncompatibleType {
        directive: String,
        coordinate: Coordinate,
        type_name: String,
    },

    #[error("Argument {argument} of @{directive} does not apply to {coordinate} of type {type_name}")]
    IncompatibleArgument {
        directive: String,
        argument: String,
        coordinate: Coordinate,
        type_name: String,
    },

    #[error("Directive @{directive} on {coordinate} references unknown member: {member}")]
    UnknownMember {
        directive: String,
        coordinate: Coordinate,
        member: String,
    },

    #[error("Unique constraint on {coordinate} requires leaf items, got {type_name}")]
    UniqueOnNonLeaf {
        coordinate: Coordinate,
        type_name: String,
    },

    #[error("List options on {coordinate} nest {depth} levels but the type has {type_depth}")]
    ListTooDeep {
        coordinate: Coordinate,
        depth: usize,
        type_depth: usize,
    },

    #[error("Constraint @{directive} on {child} weakens the constraint on {parent}")]
    Variance {
        directive: String,
        parent: Coordinate,
        child: Coordinate,
        #[source]
        source: VarianceViolation,
    },
}

impl RegistryError {
    pub fn unknown_directive(name: impl Into<String>) -> Self {
        Self::UnknownDirective(name.into())
    }

    pub fn duplicate_directive(directive: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::DuplicateDirective {
            directive: directive.into(),
            coordinate,
        }
    }

    pub fn malformed_arguments(directive: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedArguments {
            directive: directive.into(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(
        directive: impl Into<String>,
        argument: impl Into<String>,
        kind: ConstraintKind,
    ) -> Self {
        Self::InvalidArgument {
            directive: directive.into(),
            argument: argument.into(),
            kind,
        }
    }

    pub fn incompatible_type(
        directive: impl Into<String>,
        coordinate: Coordinate,
        type_name: impl Into<String>,
    ) -> Self {
        Self::IncompatibleType {
            directive: directive.into(),
            coordinate,
            type_name: type_name.into(),
        }
    }

    pub fn incompatible_argument(
        directive: impl Into<String>,
        argument: impl Into<String>,
        coordinate: Coordinate,
        type_name: impl Into<String>,
    ) -> Self {
        Self::IncompatibleArgument {
            directive: directive.into(),
            argument: argument.into(),
            coordinate,
            type_name: type_name.into(),
        }
    }

    pub fn unknown_member(
        directive: impl Into<String>,
        coordinate: Coordinate,
        member: impl Into<String>,
    ) -> Self {
        Self::UnknownMember {
            directive: directive.into(),
            coordinate,
            member: member.into(),
        }
    }

    pub fn unique_on_non_leaf(coordinate: Coordinate, type_name: impl Into<String>) -> Self {
        Self::UniqueOnNonLeaf {
            coordinate,
            type_name: type_name.into(),
        }
    }

    pub fn list_too_deep(coordinate: Coordinate, depth: usize, type_depth: usize) -> Self {
        Self::ListTooDeep {
            coordinate,
            depth,
            type_depth,
        }
    }

    pub fn variance(
        directive: impl Into<String>,
        parent: Coordinate,
        child: Coordinate,
        source: VarianceViolation,
    ) -> Self {
        Self::Variance {
            directive: directive.into(),
            parent,
            child,
            source,
        }
    }

    /// True for errors raised by an override check rather than by an attachment.
    pub fn is_variance(&self) -> bool {
        matches!(self, Self::Variance { .. })
    }
}
