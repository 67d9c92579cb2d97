//! Directive argument self-validation.
//!
//! Directive arguments are themselves constrained (`minItems` is non-negative, `oneOf`
//! is non-empty, ...). Before options are deserialized, each argument value is
//! converted to a [`Value`] and run through the evaluator named by its definition.
//! Arguments typed as an input shape recurse into the shape's fields.

use std::collections::HashMap;

use cinch_core::{ObjectValue, Value, Variables};
use serde_json::{Map, Value as JsonValue};

use crate::{ArgumentDef, InputShape, RegistryError, RegistryResult};

/// Check every present argument against its declared constraint.
pub(crate) fn check_arguments(
    directive: &str,
    path: &str,
    definitions: &[ArgumentDef],
    arguments: &Map<String, JsonValue>,
    shapes: &HashMap<String, InputShape>,
) -> RegistryResult<()> {
    let variables = Variables::new();

    for def in definitions {
        let Some(json) = arguments.get(&def.name) else {
            continue;
        };
        if json.is_null() {
            continue;
        }

        let name = if path.is_empty() {
            def.name.clone()
        } else {
            format!("{}.{}", path, def.name)
        };

        if let Some(constraint) = &def.constraint {
            constraint
                .validate(&to_value(json), &variables)
                .map_err(|kind| RegistryError::invalid_argument(directive, &name, kind))?;
        }

        if let (Some(shape), JsonValue::Object(nested)) =
            (shapes.get(&def.type_ref.leaf().name), json)
        {
            check_arguments(directive, &name, &shape.fields, nested, shapes)?;
        }
    }

    Ok(())
}

/// Convert a JSON argument value into a runtime value.
pub(crate) fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::List(items.iter().map(to_value).collect()),
        JsonValue::Object(map) => Value::Object(ObjectValue::input(
            map.iter().map(|(k, v)| (k.clone(), to_value(v))).collect(),
        )),
    }
}
