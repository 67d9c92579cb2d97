//! The immutable directive registry.

use std::collections::HashMap;

use cinch_constraint::{Constraint, ConstraintKind, Family, Violation};
use cinch_core::{SchemaElement, Value, Variables};
use serde_json::Value as JsonValue;

use crate::arguments::check_arguments;
use crate::{
    ArgumentDef, ConstraintDirective, DirectiveNames, InputShape, ListDirective,
    ObjectDirective, RegistryError, RegistryResult, ScalarDirective, Site, SiteBuilder,
    UploadDirective,
};

/// The constraint directives, immutable after construction.
#[derive(Debug, Clone)]
pub struct Registry {
    names: DirectiveNames,
    scalar: ScalarDirective,
    list: ListDirective,
    object: ObjectDirective,
    upload: UploadDirective,
    /// Input shapes by type name.
    shapes: HashMap<String, InputShape>,
}

impl Registry {
    pub(crate) fn new(
        names: DirectiveNames,
        scalar: ScalarDirective,
        list: ListDirective,
        object: ObjectDirective,
        upload: UploadDirective,
        shapes: HashMap<String, InputShape>,
    ) -> Self {
        Self {
            names,
            scalar,
            list,
            object,
            upload,
            shapes,
        }
    }

    // ==================== Lookups ====================

    pub fn scalar(&self) -> &ScalarDirective {
        &self.scalar
    }

    pub fn list(&self) -> &ListDirective {
        &self.list
    }

    pub fn object(&self) -> &ObjectDirective {
        &self.object
    }

    pub fn upload(&self) -> &UploadDirective {
        &self.upload
    }

    /// Get the family of a directive by its schema name.
    pub fn family_of(&self, directive: &str) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|family| self.names.get(*family) == directive)
    }

    /// Get the schema name of a family's directive.
    pub fn directive_name(&self, family: Family) -> &str {
        self.names.get(family)
    }

    /// Get the argument definitions of a family's directive.
    pub fn arguments(&self, family: Family) -> &[ArgumentDef] {
        match family {
            Family::Scalar => self.scalar.arguments(),
            Family::List => self.list.arguments(),
            Family::Object => self.object.arguments(),
            Family::Upload => self.upload.arguments(),
        }
    }

    /// Get an input shape by type name.
    pub fn input_shape(&self, name: &str) -> Option<&InputShape> {
        self.shapes.get(name)
    }

    // ==================== Attach ====================

    /// Parse and check a directive attached to a schema element.
    ///
    /// Arguments are validated against their own constraints before they are
    /// deserialized. The parsed options must then fit the element's type and members.
    pub fn attach(
        &self,
        element: &SchemaElement,
        directive: &str,
        arguments: &JsonValue,
    ) -> RegistryResult<Constraint> {
        let family = self
            .family_of(directive)
            .ok_or_else(|| RegistryError::unknown_directive(directive))?;

        let result = match family {
            Family::Scalar => self.attach_with(&self.scalar, directive, element, arguments),
            Family::List => self.attach_with(&self.list, directive, element, arguments),
            Family::Object => self.attach_with(&self.object, directive, element, arguments),
            Family::Upload => self.attach_with(&self.upload, directive, element, arguments),
        };

        match &result {
            Ok(_) => {
                tracing::debug!(directive, coordinate = %element.coordinate, "constraint attached")
            }
            Err(error) => tracing::warn!(
                directive,
                coordinate = %element.coordinate,
                %error,
                "constraint rejected"
            ),
        }
        result
    }

    fn attach_with<D: ConstraintDirective>(
        &self,
        handler: &D,
        directive: &str,
        element: &SchemaElement,
        arguments: &JsonValue,
    ) -> RegistryResult<Constraint> {
        let map = arguments.as_object().ok_or_else(|| {
            RegistryError::malformed_arguments(directive, "arguments must be an object")
        })?;
        check_arguments(directive, "", handler.arguments(), map, &self.shapes)?;

        let options: D::Options = serde_json::from_value(arguments.clone())
            .map_err(|e| RegistryError::malformed_arguments(directive, e.to_string()))?;

        if !handler.validate_usage(element, &options) {
            return Err(RegistryError::incompatible_type(
                directive,
                element.coordinate.clone(),
                element.type_ref.to_string(),
            ));
        }
        handler.check_configuration(directive, element, &options)?;

        let options = handler.coerce_options(element, options);
        Ok(handler.into_constraint(options))
    }

    /// Start collecting the directives of one schema element.
    pub fn site(&self, element: SchemaElement) -> SiteBuilder<'_> {
        SiteBuilder::new(self, element)
    }

    // ==================== Resolve ====================

    /// Validate a runtime value against every constraint of a site, in family order.
    /// The first failure is reported at the site's coordinate.
    pub fn resolve(
        &self,
        site: &Site,
        value: &Value,
        variables: &Variables,
    ) -> Result<(), Violation> {
        let constraints = site.constraints();
        let at = |kind: ConstraintKind| Violation::new(kind, site.coordinate().clone());

        if let Some(options) = &constraints.scalar {
            self.scalar.resolve_value(options, value, variables).map_err(at)?;
        }
        if let Some(options) = &constraints.list {
            self.list.resolve_value(options, value, variables).map_err(at)?;
        }
        if let Some(options) = &constraints.object {
            self.object.resolve_value(options, value, variables).map_err(at)?;
        }
        if let Some(options) = &constraints.upload {
            self.upload.resolve_value(options, value, variables).map_err(at)?;
        }
        Ok(())
    }

    // ==================== Override ====================

    /// Check that `child` overrides `parent` without weakening any constraint.
    ///
    /// Families are compared independently, each in the direction of the site's
    /// position.
    pub fn check_override(&self, parent: &Site, child: &Site) -> RegistryResult<()> {
        tracing::debug!(
            parent = %parent.coordinate(),
            child = %child.coordinate(),
            "checking constraint override"
        );

        let (p, c) = (parent.constraints(), child.constraints());
        self.compare(&self.scalar, p.scalar.as_ref(), c.scalar.as_ref(), parent, child)?;
        self.compare(&self.list, p.list.as_ref(), c.list.as_ref(), parent, child)?;
        self.compare(&self.object, p.object.as_ref(), c.object.as_ref(), parent, child)?;
        self.compare(&self.upload, p.upload.as_ref(), c.upload.as_ref(), parent, child)
    }

    fn compare<D: ConstraintDirective>(
        &self,
        handler: &D,
        parent_options: Option<&D::Options>,
        child_options: Option<&D::Options>,
        parent: &Site,
        child: &Site,
    ) -> RegistryResult<()> {
        let family = handler.family();
        handler
            .check_variance(parent_options, child_options, child.position(family))
            .map_err(|source| {
                let directive = self.directive_name(family);
                tracing::warn!(
                    directive,
                    parent = %parent.coordinate(),
                    child = %child.coordinate(),
                    "constraint override weakens its parent"
                );
                RegistryError::variance(
                    directive,
                    parent.coordinate().clone(),
                    child.coordinate().clone(),
                    source,
                )
            })
    }
}
