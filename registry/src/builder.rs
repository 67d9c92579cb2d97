//! RegistryBuilder for constructing an immutable Registry.

use std::collections::HashSet;

use cinch_constraint::Family;
use serde::Deserialize;

use crate::{
    ConstraintDirective, ListDirective, ObjectDirective, Registry, RegistryError,
    RegistryResult, ScalarDirective, UploadDirective,
};

/// Directive names as they appear in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DirectiveNames {
    pub scalar: String,
    pub list: String,
    pub object: String,
    pub upload: String,
}

impl Default for DirectiveNames {
    fn default() -> Self {
        Self {
            scalar: "constraint".to_string(),
            list: "listConstraint".to_string(),
            object: "objectConstraint".to_string(),
            upload: "uploadConstraint".to_string(),
        }
    }
}

impl DirectiveNames {
    pub fn get(&self, family: Family) -> &str {
        match family {
            Family::Scalar => &self.scalar,
            Family::List => &self.list,
            Family::Object => &self.object,
            Family::Upload => &self.upload,
        }
    }

    fn get_mut(&mut self, family: Family) -> &mut String {
        match family {
            Family::Scalar => &mut self.scalar,
            Family::List => &mut self.list,
            Family::Object => &mut self.object,
            Family::Upload => &mut self.upload,
        }
    }
}

/// Registry configuration, usually read from the host's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct RegistryConfig {
    pub directive_names: DirectiveNames,
    /// Custom scalars that carry strings and accept `@constraint`.
    pub string_scalars: Vec<String>,
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// Create a new builder with the default directive names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a configuration.
    pub fn from_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Rename the directive of a family.
    pub fn directive_name(mut self, family: Family, name: impl Into<String>) -> Self {
        *self.config.directive_names.get_mut(family) = name.into();
        self
    }

    /// Accept `@constraint` on a string-backed custom scalar.
    pub fn string_scalar(mut self, name: impl Into<String>) -> Self {
        self.config.string_scalars.push(name.into());
        self
    }

    /// Build the registry. Directives are constructed in dependency order: scalar,
    /// list, upload, then object presence.
    pub fn build(self) -> RegistryResult<Registry> {
        let names = self.config.directive_names;

        let mut seen = HashSet::new();
        for family in Family::ALL {
            let name = names.get(family);
            if !seen.insert(name.to_string()) {
                return Err(RegistryError::DuplicateDirectiveName(name.to_string()));
            }
        }

        let scalar = ScalarDirective::new(self.config.string_scalars);
        let list = ListDirective::new(&scalar);
        let upload = UploadDirective::new(&scalar, &list);
        let object = ObjectDirective::new(&scalar, &list);

        let shapes = list
            .input_shapes()
            .into_iter()
            .chain(object.input_shapes())
            .map(|shape| (shape.name.clone(), shape))
            .collect();

        tracing::debug!(
            scalar = %names.scalar,
            list = %names.list,
            object = %names.object,
            upload = %names.upload,
            "constraint registry built"
        );

        Ok(Registry::new(names, scalar, list, object, upload, shapes))
    }
}
