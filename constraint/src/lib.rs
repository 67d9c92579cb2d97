//! Cinch Constraint
//!
//! Validate runtime values against constraint options.
//!
//! Responsibilities:
//! - Scalar checks (min/max, length, regex, oneOf)
//! - Recursive list checks (item counts, uniqueness, per-depth inner options)
//! - Cross-field presence checks on objects (atLeast/atMost/exactly)
//! - Upload checks (size, MIME type)
//!
//! Every evaluator is a pure function of (value, options, variables). The first
//! failed check wins and is reported as a [`ConstraintKind`].
//!
//! # Module Structure
//!
//! - `options` - Options bags per constraint family, the `Constraint` enum, `ConstraintSet`
//! - `scalar`, `list`, `object`, `upload` - One evaluator per family
//! - `error` - Violation kinds
//! - `violation` - A kind located at a schema coordinate

mod error;
pub mod list;
pub mod object;
mod options;
pub mod scalar;
pub mod upload;
mod violation;

pub use error::{ConstraintKind, ConstraintResult};
pub use options::*;
pub use violation::Violation;
