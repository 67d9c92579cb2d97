//! Host type shapes consulted when a constraint is attached.
//!
//! Cinch does not own the schema. The host describes each decorated element with a
//! [`SchemaElement`]: its coordinate, its kind, its (possibly wrapped) type, and the
//! names of its members, meaning the fields of a type or the arguments of a field.

use crate::Coordinate;
use std::fmt;

/// Kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int,
    Float,
    String,
    Boolean,
    Id,
    Enum,
    Upload,
    /// Host-defined scalar (Email, DateTime, ...).
    CustomScalar,
    Object,
    Interface,
    InputObject,
}

impl TypeKind {
    /// Leaf types have no further structure: scalars and enums.
    pub fn is_leaf(self) -> bool {
        !matches!(
            self,
            TypeKind::Object | TypeKind::Interface | TypeKind::InputObject
        )
    }
}

/// A named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub name: String,
    pub kind: TypeKind,
}

/// A possibly wrapped type reference, e.g. `[[Int!]]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(NamedType),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeRef::Named(NamedType {
            name: name.into(),
            kind,
        })
    }

    pub fn int() -> Self {
        Self::named("Int", TypeKind::Int)
    }

    pub fn float() -> Self {
        Self::named("Float", TypeKind::Float)
    }

    pub fn string() -> Self {
        Self::named("String", TypeKind::String)
    }

    pub fn boolean() -> Self {
        Self::named("Boolean", TypeKind::Boolean)
    }

    pub fn id() -> Self {
        Self::named("ID", TypeKind::Id)
    }

    pub fn upload() -> Self {
        Self::named("Upload", TypeKind::Upload)
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Object)
    }

    pub fn input_object(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::InputObject)
    }

    /// Wrap in a list.
    pub fn list_of(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Wrap in non-null.
    pub fn non_null(self) -> Self {
        match self {
            already @ TypeRef::NonNull(_) => already,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    /// Strip an outer non-null wrapper.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            other => other,
        }
    }

    /// True if the type, ignoring non-null, is a list.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), TypeRef::List(_))
    }

    /// Number of list wrappers between the outside and the named type.
    pub fn list_depth(&self) -> usize {
        match self {
            TypeRef::Named(_) => 0,
            TypeRef::List(inner) => 1 + inner.list_depth(),
            TypeRef::NonNull(inner) => inner.list_depth(),
        }
    }

    /// The innermost named type.
    pub fn leaf(&self) -> &NamedType {
        match self {
            TypeRef::Named(named) => named,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.leaf(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(named) => write!(f, "{}", named.name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// What kind of schema element a constraint decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Output field of an object or interface type.
    Field,
    /// Argument of a field.
    Argument,
    /// Operation variable declaration.
    Variable,
    /// Object or interface type.
    ObjectType,
    /// Input object type.
    InputType,
    /// Field of an input object type.
    InputField,
}

impl ElementKind {
    /// Values flowing through this element come from the caller.
    pub fn is_input(self) -> bool {
        matches!(
            self,
            ElementKind::Argument
                | ElementKind::Variable
                | ElementKind::InputType
                | ElementKind::InputField
        )
    }
}

/// A decorated schema element as described by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaElement {
    pub coordinate: Coordinate,
    pub kind: ElementKind,
    pub type_ref: TypeRef,
    /// Field names of a type, or argument names of a field.
    pub members: Vec<String>,
}

impl SchemaElement {
    pub fn new(coordinate: Coordinate, kind: ElementKind, type_ref: TypeRef) -> Self {
        Self {
            coordinate,
            kind,
            type_ref,
            members: Vec::new(),
        }
    }

    /// An output field `type_name.field` of the given type.
    pub fn field(type_name: &str, field: &str, type_ref: TypeRef) -> Self {
        Self::new(
            Coordinate::field(type_name, field),
            ElementKind::Field,
            type_ref,
        )
    }

    /// An argument `type_name.field(argument:)` of the given type.
    pub fn argument(type_name: &str, field: &str, argument: &str, type_ref: TypeRef) -> Self {
        Self::new(
            Coordinate::argument(type_name, field, argument),
            ElementKind::Argument,
            type_ref,
        )
    }

    /// A variable declaration `$name` of the given type.
    pub fn variable(name: &str, type_ref: TypeRef) -> Self {
        Self::new(Coordinate::variable(name), ElementKind::Variable, type_ref)
    }

    /// An object type with the given fields.
    pub fn object_type<I, S>(name: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Coordinate::ty(name),
            ElementKind::ObjectType,
            TypeRef::object(name),
        )
        .with_members(fields)
    }

    /// An input object type with the given fields.
    pub fn input_type<I, S>(name: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Coordinate::ty(name),
            ElementKind::InputType,
            TypeRef::input_object(name),
        )
        .with_members(fields)
    }

    /// Set the member names (fields of a type, arguments of a field).
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the element has a member with this name.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}
