//! Constraint violation kinds.

use thiserror::Error;

/// Result type for constraint evaluation.
pub type ConstraintResult<T> = Result<T, ConstraintKind>;

/// The check a value failed. Each kind carries a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConstraintKind {
    #[error("Value is below the allowed minimum")]
    Min,

    #[error("Value is above the allowed maximum")]
    Max,

    #[error("Value is not one of the allowed values")]
    OneOf,

    #[error("Value is shorter than the allowed minimum length")]
    MinLength,

    #[error("Value is longer than the allowed maximum length")]
    MaxLength,

    #[error("Value does not match the required pattern")]
    Regex,

    #[error("List has fewer items than the allowed minimum")]
    MinItems,

    #[error("List has more items than the allowed maximum")]
    MaxItems,

    #[error("List contains duplicate items")]
    Unique,

    #[error("Too few of the listed fields are set")]
    AtLeast,

    #[error("At least one of the listed fields must be set")]
    AtLeastOne,

    #[error("Too many of the listed fields are set")]
    AtMost,

    #[error("At most one of the listed fields may be set")]
    AtMostOne,

    #[error("The number of listed fields that are set is not the required number")]
    Exactly,

    #[error("Exactly one of the listed fields must be set")]
    ExactlyOne,

    #[error("Uploaded file exceeds the allowed size")]
    MaxSize,

    #[error("Uploaded file type is not allowed")]
    MimeType,
}

impl ConstraintKind {
    /// Stable identifier the host uses to key error reporting.
    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::Min => "MinConstraintNotSatisfied",
            ConstraintKind::Max => "MaxConstraintNotSatisfied",
            ConstraintKind::OneOf => "OneOfConstraintNotSatisfied",
            ConstraintKind::MinLength => "MinLengthConstraintNotSatisfied",
            ConstraintKind::MaxLength => "MaxLengthConstraintNotSatisfied",
            ConstraintKind::Regex => "RegexConstraintNotSatisfied",
            ConstraintKind::MinItems => "MinItemsConstraintNotSatisfied",
            ConstraintKind::MaxItems => "MaxItemsConstraintNotSatisfied",
            ConstraintKind::Unique => "UniqueConstraintNotSatisfied",
            ConstraintKind::AtLeast => "AtLeastConstraintNotSatisfied",
            ConstraintKind::AtLeastOne => "AtLeastOneConstraintNotSatisfied",
            ConstraintKind::AtMost => "AtMostConstraintNotSatisfied",
            ConstraintKind::AtMostOne => "AtMostOneConstraintNotSatisfied",
            ConstraintKind::Exactly => "ExactlyConstraintNotSatisfied",
            ConstraintKind::ExactlyOne => "ExactlyOneConstraintNotSatisfied",
            ConstraintKind::MaxSize => "MaxSizeConstraintNotSatisfied",
            ConstraintKind::MimeType => "MimeTypeConstraintNotSatisfied",
        }
    }
}
