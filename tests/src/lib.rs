//! Integration test support for Cinch.
//!
//! A [`Scenario`] attaches directives to one schema element and runs a list of
//! values through the registry, each expected to pass or to fail with a kind.

mod error;
mod scenario;

pub use error::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;

/// Everything a scenario file needs.
pub mod prelude {
    pub use crate::{Scenario, ScenarioError, ScenarioResult};
    pub use cinch_constraint::{
        Constraint, ConstraintKind, ConstraintOptions, ConstraintSet, CountFrom, Family,
        ListConstraintOptions, ObjectPresenceOptions, Pattern, UploadConstraintOptions,
        Violation,
    };
    pub use cinch_core::{
        fields, vars, Coordinate, ElementKind, ObjectValue, SchemaElement, TypeKind, TypeRef,
        Upload, Value, Variables,
    };
    pub use cinch_registry::{Registry, RegistryBuilder, RegistryError, Site};
    pub use cinch_variance::{
        check_contravariant, check_covariant, check_variance, Position, VarianceViolation,
    };
    pub use serde_json::json;
}
