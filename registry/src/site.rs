//! Attachment sites: a schema element and its constraints.

use cinch_constraint::{ConstraintSet, Family};
use cinch_core::{Coordinate, ElementKind, SchemaElement};
use cinch_variance::Position;
use serde_json::Value as JsonValue;

use crate::{Registry, RegistryError, RegistryResult};

/// A decorated schema element with at most one constraint per family.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    element: SchemaElement,
    constraints: ConstraintSet,
}

impl Site {
    /// A site without constraints. Used as the absent side of an override.
    pub fn new(element: SchemaElement) -> Self {
        Self {
            element,
            constraints: ConstraintSet::new(),
        }
    }

    pub fn element(&self) -> &SchemaElement {
        &self.element
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.element.coordinate
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Override direction for a family on this site.
    ///
    /// Presence rules on a field constrain its arguments, which are inputs.
    pub fn position(&self, family: Family) -> Position {
        match (family, self.element.kind) {
            (Family::Object, ElementKind::Field) => Position::Input,
            (_, kind) => Position::from(kind),
        }
    }
}

/// Builder for a site's directives.
pub struct SiteBuilder<'r> {
    registry: &'r Registry,
    element: SchemaElement,
    directives: Vec<(String, JsonValue)>,
}

impl<'r> SiteBuilder<'r> {
    pub(crate) fn new(registry: &'r Registry, element: SchemaElement) -> Self {
        Self {
            registry,
            element,
            directives: Vec::new(),
        }
    }

    /// Attach a directive with its arguments.
    pub fn directive(mut self, name: impl Into<String>, arguments: JsonValue) -> Self {
        self.directives.push((name.into(), arguments));
        self
    }

    /// Attach every directive and finish the site.
    pub fn done(self) -> RegistryResult<Site> {
        let mut site = Site::new(self.element);

        for (name, arguments) in &self.directives {
            let constraint = self.registry.attach(&site.element, name, arguments)?;
            if !site.constraints.insert(constraint) {
                return Err(RegistryError::duplicate_directive(
                    name,
                    site.element.coordinate.clone(),
                ));
            }
        }

        Ok(site)
    }
}
