//! Scenario builder and runner.

use cinch_constraint::ConstraintKind;
use cinch_core::{SchemaElement, Value, Variables};
use cinch_registry::{Registry, RegistryBuilder, Site};
use serde_json::Value as JsonValue;

use crate::{ScenarioError, ScenarioResult};

/// One value and its expected outcome.
#[derive(Debug)]
struct Step {
    value: Value,
    expected: Option<ConstraintKind>,
}

/// Directives on one element, exercised with a series of values.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    element: SchemaElement,
    directives: Vec<(String, JsonValue)>,
    variables: Variables,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, element: SchemaElement) -> Self {
        Self {
            name: name.into(),
            element,
            directives: Vec::new(),
            variables: Variables::new(),
            steps: Vec::new(),
        }
    }

    /// Attach a directive with its JSON arguments.
    pub fn directive(mut self, name: &str, arguments: JsonValue) -> Self {
        self.directives.push((name.to_string(), arguments));
        self
    }

    /// Bindings for `Value::Variable` references in the steps.
    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// The value must pass.
    pub fn accepts(mut self, value: impl Into<Value>) -> Self {
        self.steps.push(Step {
            value: value.into(),
            expected: None,
        });
        self
    }

    /// The value must fail with `kind`.
    pub fn rejects(mut self, value: impl Into<Value>, kind: ConstraintKind) -> Self {
        self.steps.push(Step {
            value: value.into(),
            expected: Some(kind),
        });
        self
    }

    /// Run against a registry with the default directive names.
    pub fn run(self) -> ScenarioResult<()> {
        let registry = RegistryBuilder::new()
            .build()
            .map_err(|e| ScenarioError::registry(&self.name, e))?;
        self.run_with(&registry)
    }

    /// Run against the given registry.
    pub fn run_with(self, registry: &Registry) -> ScenarioResult<()> {
        let site = self.site(registry)?;

        for (index, step) in self.steps.iter().enumerate() {
            let actual = registry
                .resolve(&site, &step.value, &self.variables)
                .err()
                .map(|violation| violation.kind);

            if actual != step.expected {
                return Err(ScenarioError::mismatch(
                    &self.name,
                    index + 1,
                    step.value.to_string(),
                    step.expected,
                    actual,
                ));
            }
        }

        Ok(())
    }

    fn site(&self, registry: &Registry) -> ScenarioResult<Site> {
        self.directives
            .iter()
            .fold(registry.site(self.element.clone()), |site, (name, args)| {
                site.directive(name.as_str(), args.clone())
            })
            .done()
            .map_err(|e| ScenarioError::registry(&self.name, e))
    }
}
