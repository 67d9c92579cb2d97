//! Constraint violations located at a schema coordinate.

use cinch_core::Coordinate;
use thiserror::Error;

use crate::ConstraintKind;

/// A failed constraint at a specific attachment site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{coordinate}: {kind}")]
pub struct Violation {
    /// The check that failed.
    pub kind: ConstraintKind,
    /// The field, argument, variable or type the constraint is attached to.
    pub coordinate: Coordinate,
}

impl Violation {
    /// Create a new violation.
    pub fn new(kind: ConstraintKind, coordinate: Coordinate) -> Self {
        Self { kind, coordinate }
    }

    /// Stable identifier of the failed check.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Fixed human-readable message of the failed check.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
