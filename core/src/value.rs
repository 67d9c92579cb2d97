//! Value types under validation.
//!
//! Values reach cinch already type-checked and coerced by the host. They are
//! leaf scalars (Bool, Int, Float, String, Enum), lists that may contain nulls,
//! keyed objects, uploaded files, or a reference to a bound variable.

use crate::ObjectValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Shared null returned when a variable reference has no binding.
static NULL: Value = Value::Null;

/// Variable bindings for the current request.
pub type Variables = HashMap<String, Value>;

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string (also used for ID).
    String(String),
    /// Enum value with its underlying scalar representation.
    Enum(EnumValue),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Object-shaped value.
    Object(ObjectValue),
    /// Uploaded file.
    Upload(Upload),
    /// Reference to a request variable, by name without the `$`.
    Variable(String),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Create an enum value whose representation is its own name.
    pub fn enum_value(name: impl Into<String>) -> Self {
        let name = name.into();
        Value::Enum(EnumValue {
            repr: Box::new(Value::String(name.clone())),
            name,
        })
    }

    /// Create an enum value with an explicit underlying representation.
    pub fn enum_with_repr(name: impl Into<String>, repr: impl Into<Value>) -> Self {
        Value::Enum(EnumValue {
            name: name.into(),
            repr: Box::new(repr.into()),
        })
    }

    /// Follow a variable reference to its bound value.
    ///
    /// Unbound variables resolve to null. Any other value resolves to itself.
    pub fn resolve<'a>(&'a self, variables: &'a Variables) -> &'a Value {
        match self {
            Value::Variable(name) => variables.get(name).unwrap_or(&NULL),
            other => other,
        }
    }

    /// The value constraints compare against: enums yield their representation.
    pub fn underlying(&self) -> &Value {
        match self {
            Value::Enum(e) => e.repr.underlying(),
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Enum(e) => write!(f, "{}", e.name),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(o) => write!(f, "{}", o),
            Value::Upload(u) => write!(f, "<{} {} bytes>", u.mime_type, u.size),
            Value::Variable(name) => write!(f, "${}", name),
        }
    }
}

/// An enum value: the symbolic name and the scalar it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub repr: Box<Value>,
}

/// An uploaded file as handed over by the host's transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Upload {
    pub filename: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl Upload {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// A numeric bound or value. Int and Float compare across kinds by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Int(i), Number::Float(f)) => compare_int_float(*i, *f),
            (Number::Float(f), Number::Int(i)) => compare_int_float(*i, *f).map(Ordering::reverse),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the integer.
fn compare_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        other => Some(other),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// A leaf scalar as written in constraint arguments such as `oneOf`.
///
/// Equality is exact: `Int(1)` and `Float(1.0)` are different scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Exact comparison against a runtime value, looking through enums.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value.underlying()) {
            (Scalar::Bool(a), Value::Bool(b)) => a == b,
            (Scalar::Int(a), Value::Int(b)) => a == b,
            (Scalar::Float(a), Value::Float(b)) => a == b,
            (Scalar::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(fl) => write!(f, "{}", fl),
            Scalar::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => Value::Int(i),
            Scalar::Float(f) => Value::Float(f),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i as i64)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Upload> for Value {
    fn from(u: Upload) -> Self {
        Value::Upload(u)
    }
}

impl From<ObjectValue> for Value {
    fn from(o: ObjectValue) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Helper macro to create variable bindings.
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Variables::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Variables::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
