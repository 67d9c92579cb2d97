//! Variance error types.

use thiserror::Error;

/// Result type for variance checks.
pub type VarianceResult<T> = Result<T, VarianceViolation>;

/// An override weakens or drops an inherited constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Constraint on the overriding element is weaker than the constraint it overrides")]
pub struct VarianceViolation;
