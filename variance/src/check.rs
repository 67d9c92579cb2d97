//! Override checks.
//!
//! Output positions are covariant: the overriding field may only return a subset
//! of what the overridden field promised, so its constraints must narrow. Input
//! positions are contravariant: the overriding argument must accept everything the
//! overridden argument accepted, so the roles of parent and child are swapped.

use cinch_core::ElementKind;

use crate::{Narrowing, VarianceResult, VarianceViolation};

/// Direction of an override check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Output fields: the child must narrow the parent.
    Output,
    /// Arguments and input fields: the parent must narrow the child.
    Input,
}

impl From<ElementKind> for Position {
    fn from(kind: ElementKind) -> Self {
        if kind.is_input() {
            Position::Input
        } else {
            Position::Output
        }
    }
}

/// The child must be at least as strict as the parent.
///
/// No parent constraint means there is nothing to narrow. A parent constraint with
/// no child constraint is a dropped constraint and always fails.
pub fn check_covariant<T: Narrowing + ?Sized>(
    parent: Option<&T>,
    child: Option<&T>,
) -> VarianceResult<()> {
    match (parent, child) {
        (None, _) => Ok(()),
        (Some(_), None) => Err(VarianceViolation),
        (Some(parent), Some(child)) if child.narrows(parent) => Ok(()),
        (Some(_), Some(_)) => Err(VarianceViolation),
    }
}

/// The parent must be at least as strict as the child.
pub fn check_contravariant<T: Narrowing + ?Sized>(
    parent: Option<&T>,
    child: Option<&T>,
) -> VarianceResult<()> {
    check_covariant(child, parent)
}

/// Compare parent and child options in the direction given by `position`.
pub fn check_variance<T: Narrowing + ?Sized>(
    parent: Option<&T>,
    child: Option<&T>,
    position: Position,
) -> VarianceResult<()> {
    match position {
        Position::Output => check_covariant(parent, child),
        Position::Input => check_contravariant(parent, child),
    }
}
