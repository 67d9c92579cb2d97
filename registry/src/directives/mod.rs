//! The four constraint directive families.
//!
//! Each family shares one lifecycle: argument definitions, an attach-time usage
//! check, configuration checks against the decorated element, runtime resolution
//! and override comparison.

mod list;
mod object;
mod scalar;
mod upload;

pub use list::ListDirective;
pub use object::ObjectDirective;
pub use scalar::ScalarDirective;
pub use upload::UploadDirective;

use cinch_constraint::{Constraint, ConstraintResult, Family};
use cinch_core::{SchemaElement, Value, Variables};
use cinch_variance::{check_variance, Narrowing, Position, VarianceResult};
use serde::de::DeserializeOwned;

use crate::{ArgumentDef, InputShape, RegistryResult};

/// Lifecycle hooks of one constraint directive family.
pub trait ConstraintDirective {
    /// Parsed directive arguments.
    type Options: DeserializeOwned + Narrowing;

    /// Family of this directive.
    fn family(&self) -> Family;

    /// Argument definitions, each carrying the constraint its value must satisfy.
    fn arguments(&self) -> &[ArgumentDef];

    /// Input shapes referenced by the arguments.
    fn input_shapes(&self) -> Vec<InputShape> {
        Vec::new()
    }

    /// Check that the decorated element has a type this directive applies to.
    fn validate_usage(&self, element: &SchemaElement, options: &Self::Options) -> bool;

    /// Check the options against the decorated element beyond its type.
    fn check_configuration(
        &self,
        _directive: &str,
        _element: &SchemaElement,
        _options: &Self::Options,
    ) -> RegistryResult<()> {
        Ok(())
    }

    /// Bring checked options into the form runtime values are compared against.
    fn coerce_options(&self, _element: &SchemaElement, options: Self::Options) -> Self::Options {
        options
    }

    /// Validate a runtime value.
    fn resolve_value(
        &self,
        options: &Self::Options,
        value: &Value,
        variables: &Variables,
    ) -> ConstraintResult<()>;

    /// Compare an overridden constraint with its override.
    fn check_variance(
        &self,
        parent: Option<&Self::Options>,
        child: Option<&Self::Options>,
        position: Position,
    ) -> VarianceResult<()> {
        check_variance(parent, child, position)
    }

    /// Wrap parsed options as a constraint.
    fn into_constraint(&self, options: Self::Options) -> Constraint;
}
