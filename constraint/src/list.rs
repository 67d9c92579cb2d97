//! List constraint evaluation.
//!
//! Each level of a (possibly nested) list has its own options. A level is checked
//! in the order minItems, maxItems, unique. After that, every non-null item is
//! validated against `innerList`. Null items stand for an absent nested list and
//! are skipped.

use cinch_core::{Value, Variables};
use std::collections::HashSet;

use crate::{ConstraintKind, ConstraintResult, ListConstraintOptions};

/// Validate a list value without variable bindings.
pub fn validate(value: &Value, options: &ListConstraintOptions) -> ConstraintResult<()> {
    validate_in(value, options, &Variables::new())
}

/// Validate a list value, resolving variable references against `variables`.
///
/// Null passes. A non-list value has no items to count and also passes.
pub fn validate_in(
    value: &Value,
    options: &ListConstraintOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    match value.resolve(variables) {
        Value::List(items) => validate_items(items, options, variables),
        _ => Ok(()),
    }
}

/// Validate the items of one list level, then recurse into inner lists.
pub fn validate_items(
    items: &[Value],
    options: &ListConstraintOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    if options.min_items.is_some_and(|min| items.len() < min) {
        return Err(ConstraintKind::MinItems);
    }
    if options.max_items.is_some_and(|max| items.len() > max) {
        return Err(ConstraintKind::MaxItems);
    }
    if options.unique {
        check_unique(items, variables)?;
    }
    if let Some(inner) = &options.inner_list {
        for item in items {
            validate_in(item, inner, variables)?;
        }
    }
    Ok(())
}

fn check_unique(items: &[Value], variables: &Variables) -> ConstraintResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(UniqueKey::of(item, variables)) {
            return Err(ConstraintKind::Unique);
        }
    }
    Ok(())
}

/// Hashable identity of an item for duplicate detection.
///
/// Enums key on their representation. Floats key on their bits, with `-0.0`
/// folded onto `0.0`. Int and Float never collide, since comparison is exact.
#[derive(Debug, PartialEq, Eq, Hash)]
enum UniqueKey<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    String(&'a str),
    List(Vec<UniqueKey<'a>>),
    Object(Vec<(&'a str, UniqueKey<'a>)>),
    Upload(&'a str, &'a str, u64),
}

impl<'a> UniqueKey<'a> {
    fn of(value: &'a Value, variables: &'a Variables) -> Self {
        match value.resolve(variables) {
            Value::Null | Value::Variable(_) => UniqueKey::Null,
            Value::Enum(e) => Self::of(&e.repr, variables),
            Value::Bool(b) => UniqueKey::Bool(*b),
            Value::Int(i) => UniqueKey::Int(*i),
            Value::Float(f) => {
                let f = if *f == 0.0 { 0.0_f64 } else { *f };
                UniqueKey::Float(f.to_bits())
            }
            Value::String(s) => UniqueKey::String(s),
            Value::List(items) => {
                UniqueKey::List(items.iter().map(|item| Self::of(item, variables)).collect())
            }
            Value::Object(object) => {
                let mut fields: Vec<_> = object
                    .fields()
                    .iter()
                    .map(|(name, v)| (name.as_str(), Self::of(v, variables)))
                    .collect();
                fields.sort_by(|a, b| a.0.cmp(b.0));
                UniqueKey::Object(fields)
            }
            Value::Upload(upload) => {
                UniqueKey::Upload(&upload.filename, &upload.mime_type, upload.size)
            }
        }
    }
}
