//! Cinch Variance
//!
//! Decide whether constraints on an overriding schema element are a legal
//! narrowing of the constraints on the element it overrides.
//!
//! Responsibilities:
//! - Per-axis narrowing rules for every constraint family
//! - Covariant comparison for output positions, contravariant for input positions

mod check;
mod error;
mod narrowing;

pub use check::{check_contravariant, check_covariant, check_variance, Position};
pub use error::{VarianceResult, VarianceViolation};
pub use narrowing::Narrowing;
