//! Object-shaped values.
//!
//! An object maps field names to values, and a field may be missing altogether.
//! A missing field is not the same as a field that is present with a null value.
//! Output objects only contain the fields the query selected, so a missing field
//! there means "not requested" rather than "null".

use crate::Value;
use std::collections::HashMap;
use std::fmt;

/// Field storage for object values.
pub type Fields = HashMap<String, Value>;

/// Whether an object came from request input or from resolved output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectShape {
    /// Arguments or input-object fields. Every declared field the caller omitted is
    /// simply unset.
    #[default]
    Input,
    /// Resolved response fields, restricted to the query's selection.
    Output,
}

/// Presence-aware read access to an object.
pub trait ObjectLike {
    /// Input or output shape of this object.
    fn shape(&self) -> ObjectShape;

    /// True if the field was provided (input) or requested (output), even if null.
    fn has_field(&self, name: &str) -> bool;

    /// The field's value, or `None` when the field is absent.
    fn field_value(&self, name: &str) -> Option<&Value>;
}

/// An object value with its shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    shape: ObjectShape,
    fields: Fields,
}

impl ObjectValue {
    /// Create an input-shaped object (arguments, input-object fields).
    pub fn input(fields: Fields) -> Self {
        Self {
            shape: ObjectShape::Input,
            fields,
        }
    }

    /// Create an output-shaped object containing only the requested fields.
    pub fn output(fields: Fields) -> Self {
        Self {
            shape: ObjectShape::Output,
            fields,
        }
    }

    /// All present fields.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

}

impl ObjectLike for ObjectValue {
    fn shape(&self) -> ObjectShape {
        self.shape
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn field_value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A bare field map is an argument set, which is always input-shaped.
impl ObjectLike for Fields {
    fn shape(&self) -> ObjectShape {
        ObjectShape::Input
    }

    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn field_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.fields.keys().collect();
        names.sort();
        write!(f, "{{")?;
        for (i, name) in names.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, self.fields[name])?;
        }
        write!(f, "}}")
    }
}

/// Helper macro to create field maps.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Fields::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
