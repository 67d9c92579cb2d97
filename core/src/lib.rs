//! Cinch Core Types
//!
//! This crate provides the foundational types shared by every cinch crate:
//! - Runtime values (the Value enum, leaf scalars, numbers, uploads)
//! - Object-shaped values and the presence-aware ObjectLike trait
//! - Variable bindings
//! - Schema coordinates used to name attachment sites
//! - The minimal host type shapes (TypeRef, SchemaElement) consulted at attach time

mod coordinate;
mod object;
mod schema;
mod value;

pub use coordinate::*;
pub use object::*;
pub use schema::*;
pub use value::*;
