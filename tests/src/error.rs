//! Scenario failures.

use cinch_constraint::ConstraintKind;
use cinch_registry::RegistryError;
use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] registry setup failed: {source}")]
    Registry {
        scenario: String,
        #[source]
        source: RegistryError,
    },

    #[error("[{scenario}] step {step} ({value}): expected {expected}, got {actual}")]
    Mismatch {
        scenario: String,
        step: usize,
        value: String,
        expected: String,
        actual: String,
    },
}

impl ScenarioError {
    pub fn registry(scenario: impl Into<String>, source: RegistryError) -> Self {
        Self::Registry {
            scenario: scenario.into(),
            source,
        }
    }

    pub fn mismatch(
        scenario: impl Into<String>,
        step: usize,
        value: impl Into<String>,
        expected: Option<ConstraintKind>,
        actual: Option<ConstraintKind>,
    ) -> Self {
        let describe = |kind: Option<ConstraintKind>| match kind {
            Some(kind) => kind.name().to_string(),
            None => "success".to_string(),
        };
        Self::Mismatch {
            scenario: scenario.into(),
            step,
            value: value.into(),
            expected: describe(expected),
            actual: describe(actual),
        }
    }
}
