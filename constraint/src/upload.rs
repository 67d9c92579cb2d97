//! Upload constraint evaluation.

use cinch_core::{Value, Variables};

use crate::{ConstraintKind, ConstraintResult, UploadConstraintOptions};

/// Validate an upload without variable bindings.
pub fn validate(value: &Value, options: &UploadConstraintOptions) -> ConstraintResult<()> {
    validate_in(value, options, &Variables::new())
}

/// Validate an upload (or a list of uploads) against size and MIME type limits.
pub fn validate_in(
    value: &Value,
    options: &UploadConstraintOptions,
    variables: &Variables,
) -> ConstraintResult<()> {
    match value.resolve(variables) {
        Value::Upload(upload) => {
            if options.max_size.is_some_and(|max| upload.size > max) {
                return Err(ConstraintKind::MaxSize);
            }
            match &options.mime_type {
                Some(allowed) if !allowed.iter().any(|m| *m == upload.mime_type) => {
                    Err(ConstraintKind::MimeType)
                }
                _ => Ok(()),
            }
        }
        Value::List(items) => items
            .iter()
            .try_for_each(|item| validate_in(item, options, variables)),
        _ => Ok(()),
    }
}
