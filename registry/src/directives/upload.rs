//! `@uploadConstraint`: file size and MIME type limits.

use cinch_constraint::{upload, Constraint, ConstraintResult, Family, UploadConstraintOptions};
use cinch_core::{SchemaElement, TypeKind, TypeRef, Value, Variables};

use crate::ArgumentDef;

use super::{ConstraintDirective, ListDirective, ScalarDirective};

/// Upload directive.
#[derive(Debug, Clone)]
pub struct UploadDirective {
    arguments: Vec<ArgumentDef>,
}

impl UploadDirective {
    pub fn new(scalar: &ScalarDirective, list: &ListDirective) -> Self {
        let arguments = vec![
            ArgumentDef::new("maxSize", TypeRef::int()).constrained(scalar.non_negative()),
            ArgumentDef::new("mimeType", TypeRef::list_of(TypeRef::string().non_null()))
                .constrained(list.non_empty()),
        ];
        Self { arguments }
    }
}

impl ConstraintDirective for UploadDirective {
    type Options = UploadConstraintOptions;

    fn family(&self) -> Family {
        Family::Upload
    }

    fn arguments(&self) -> &[ArgumentDef] {
        &self.arguments
    }

    fn validate_usage(&self, element: &SchemaElement, _options: &UploadConstraintOptions) -> bool {
        element.type_ref.leaf().kind == TypeKind::Upload
    }

    fn resolve_value(
        &self,
        options: &UploadConstraintOptions,
        value: &Value,
        variables: &Variables,
    ) -> ConstraintResult<()> {
        upload::validate_in(value, options, variables)
    }

    fn into_constraint(&self, options: UploadConstraintOptions) -> Constraint {
        Constraint::Upload(options)
    }
}
