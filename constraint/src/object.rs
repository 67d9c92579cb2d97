//! Cross-field presence evaluation.
//!
//! A field counts as *set* when it is present and its value is not null.
//! The rules are evaluated in a fixed order: atLeastOne, atMostOne, exactlyOne,
//! atLeast, atMost, exactly.
//!
//! On output objects, a field missing from the selection may still have resolved to
//! a non-null value. `exactly` therefore only reports an under-count when every
//! listed field was requested. An over-count is always reported.

use cinch_core::{ObjectLike, ObjectShape, Value, Variables};

use crate::{ConstraintKind, ConstraintResult, CountFrom, ObjectPresenceOptions};

/// Validate an object without variable bindings.
pub fn validate<O: ObjectLike + ?Sized>(
    object: &O,
    options: &ObjectPresenceOptions,
) -> ConstraintResult<()> {
    validate_in(object, options, &Variables::new())
}

/// Validate a runtime value holding an object.
///
/// Null passes. A list applies the options to every object in it.
pub fn validate_value(
    value: &Value,
    options: &ObjectPresenceOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    match value.resolve(variables) {
        Value::Object(object) => validate_in(object, options, variables),
        Value::List(items) => items
            .iter()
            .try_for_each(|item| validate_value(item, options, variables)),
        _ => Ok(()),
    }
}

/// Validate an object, resolving variable references in field values.
pub fn validate_in<O: ObjectLike + ?Sized>(
    object: &O,
    options: &ObjectPresenceOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    let rules = [
        (options.at_least_one.as_deref(), 1, Rule::AtLeast, ConstraintKind::AtLeastOne),
        (options.at_most_one.as_deref(), 1, Rule::AtMost, ConstraintKind::AtMostOne),
        (options.exactly_one.as_deref(), 1, Rule::Exactly, ConstraintKind::ExactlyOne),
        (from_of(&options.at_least), count_of(&options.at_least), Rule::AtLeast, ConstraintKind::AtLeast),
        (from_of(&options.at_most), count_of(&options.at_most), Rule::AtMost, ConstraintKind::AtMost),
        (from_of(&options.exactly), count_of(&options.exactly), Rule::Exactly, ConstraintKind::Exactly),
    ];

    for (from, count, rule, kind) in rules {
        if let Some(from) = from {
            if !rule.holds(object, from, count, variables) {
                return Err(kind);
            }
        }
    }
    Ok(())
}

fn from_of(rule: &Option<CountFrom>) -> Option<&[String]> {
    rule.as_ref().map(|r| r.from.as_slice())
}

fn count_of(rule: &Option<CountFrom>) -> usize {
    rule.as_ref().map_or(0, |r| r.count)
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    AtLeast,
    AtMost,
    Exactly,
}

impl Rule {
    fn holds<O: ObjectLike + ?Sized>(
        self,
        object: &O,
        from: &[String],
        count: usize,
        variables: &Variables,
    ) -> bool {
        match self {
            Rule::AtLeast => at_least(object, from, count, variables),
            Rule::AtMost => tally(object, from, variables).set <= count,
            Rule::Exactly => {
                let tally = tally(object, from, variables);
                match object.shape() {
                    ObjectShape::Input => tally.set == count,
                    ObjectShape::Output => {
                        tally.set <= count && (tally.set == count || tally.unrequested > 0)
                    }
                }
            }
        }
    }
}

/// Stops counting as soon as `count` set fields have been seen.
fn at_least<O: ObjectLike + ?Sized>(
    object: &O,
    from: &[String],
    count: usize,
    variables: &Variables,
) -> bool {
    if count == 0 {
        return true;
    }
    let mut set = 0;
    for name in from {
        if is_set(object, name, variables) {
            set += 1;
            if set >= count {
                return true;
            }
        }
    }
    false
}

#[derive(Debug, Default)]
struct Tally {
    /// Listed fields present with a non-null value.
    set: usize,
    /// Listed fields absent from the object.
    unrequested: usize,
}

fn tally<O: ObjectLike + ?Sized>(object: &O, from: &[String], variables: &Variables) -> Tally {
    let mut tally = Tally::default();
    for name in from {
        if !object.has_field(name) {
            tally.unrequested += 1;
        } else if is_set(object, name, variables) {
            tally.set += 1;
        }
    }
    tally
}

fn is_set<O: ObjectLike + ?Sized>(object: &O, name: &str, variables: &Variables) -> bool {
    object
        .field_value(name)
        .is_some_and(|value| !value.resolve(variables).is_null())
}
