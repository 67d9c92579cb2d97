//! Cinch Registry
//!
//! The constraint directives and their lifecycle hooks. The registry is immutable
//! after construction via RegistryBuilder.
//!
//! Responsibilities:
//! - Build the four directive families once, in dependency order
//! - Validate directive arguments against the constraints declared on them
//! - Attach directives to schema elements (usage and configuration checks)
//! - Resolve runtime values against a site's constraints
//! - Check that overriding sites only narrow inherited constraints

mod arguments;
mod builder;
mod directives;
mod error;
mod registry;
mod site;
mod types;

pub use builder::{DirectiveNames, RegistryBuilder, RegistryConfig};
pub use directives::{
    ConstraintDirective, ListDirective, ObjectDirective, ScalarDirective, UploadDirective,
};
pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use site::{Site, SiteBuilder};
pub use types::*;
