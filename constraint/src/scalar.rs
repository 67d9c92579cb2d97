//! Scalar constraint evaluation.
//!
//! Numbers are checked in the order min, max, oneOf. Strings are checked in the
//! order minLength, maxLength, regex, oneOf. Booleans only face oneOf. Lists apply
//! the same options to every element, and variables are resolved first.

use cinch_core::{Number, Value, Variables};
use std::cmp::Ordering;

use crate::{ConstraintKind, ConstraintOptions, ConstraintResult};

/// Validate a value without variable bindings.
pub fn validate(value: &Value, options: &ConstraintOptions) -> ConstraintResult<()> {
    validate_in(value, options, &Variables::new())
}

/// Validate a value, resolving variable references against `variables`.
pub fn validate_in(
    value: &Value,
    options: &ConstraintOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    match value.resolve(variables) {
        Value::Null => Ok(()),
        Value::List(items) => items
            .iter()
            .try_for_each(|item| validate_in(item, options, variables)),
        other => check_leaf(other.underlying(), options),
    }
}

fn check_leaf(value: &Value, options: &ConstraintOptions) -> ConstraintResult<()> {
    match value {
        Value::Int(i) => check_number(Number::Int(*i), value, options),
        Value::Float(f) => check_number(Number::Float(*f), value, options),
        Value::String(s) => check_string(s, value, options),
        other => check_one_of(other, options),
    }
}

fn check_number(n: Number, value: &Value, options: &ConstraintOptions) -> ConstraintResult<()> {
    if let Some(min) = options.min {
        if n.partial_cmp(&min) == Some(Ordering::Less) {
            return Err(ConstraintKind::Min);
        }
    }
    if let Some(max) = options.max {
        if n.partial_cmp(&max) == Some(Ordering::Greater) {
            return Err(ConstraintKind::Max);
        }
    }
    check_one_of(value, options)
}

fn check_string(s: &str, value: &Value, options: &ConstraintOptions) -> ConstraintResult<()> {
    let length = s.chars().count();
    if options.min_length.is_some_and(|min| length < min) {
        return Err(ConstraintKind::MinLength);
    }
    if options.max_length.is_some_and(|max| length > max) {
        return Err(ConstraintKind::MaxLength);
    }
    if let Some(pattern) = &options.regex {
        if !pattern.is_match(s) {
            return Err(ConstraintKind::Regex);
        }
    }
    check_one_of(value, options)
}

fn check_one_of(value: &Value, options: &ConstraintOptions) -> ConstraintResult<()> {
    match &options.one_of {
        Some(allowed) if !allowed.iter().any(|candidate| candidate.matches(value)) => {
            Err(ConstraintKind::OneOf)
        }
        _ => Ok(()),
    }
}
