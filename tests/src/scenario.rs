//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use morph_session::SessionConfig;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{FixtureError, FixtureResult};
use crate::fixture::Fixture;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `--# name` in the fixture).
    pub name: String,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the fixture file.
    fixture_path: Option<PathBuf>,
    /// Parsed fixture (if loaded inline).
    fixture: Option<Fixture>,
    /// Session configuration.
    config: SessionConfig,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture_path: None,
            fixture: None,
            config: SessionConfig::default(),
            steps: Vec::new(),
            base_path: fixtures_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the fixture file path (relative to `fixtures/`).
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_path = Some(path.into());
        self
    }

    /// Load the fixture from a string.
    pub fn fixture_source(mut self, source: &str) -> FixtureResult<Self> {
        self.fixture = Some(Fixture::parse(source)?);
        Ok(self)
    }

    /// Use a custom session configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a step with an assertion.
    ///
    /// The step name must match a `--# name` marker in the fixture.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step { name, assertion });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> FixtureResult<()> {
        let runner = Runner::new(self)?;
        runner.run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the session configuration.
    pub fn session_config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the fixture, loading from file if needed.
    pub fn load_fixture(&self) -> FixtureResult<Fixture> {
        if let Some(ref fixture) = self.fixture {
            return Ok(fixture.clone());
        }

        match &self.fixture_path {
            Some(p) => Fixture::load(&self.resolve_path(p)),
            None => Err(FixtureError::missing_fixture(&self.name)),
        }
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// Get the fixtures directory of this crate.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .fixture("engine/end_to_end.case")
            .step("first", |a| a.applied(4))
            .step("second", |a| a.skipped(0));

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[0].name, "first");
    }

    #[test]
    fn test_missing_fixture() {
        let err = Scenario::new("nothing").run().unwrap_err();
        assert!(matches!(err, FixtureError::MissingFixture { .. }));
    }

    #[test]
    fn test_resolve_relative_to_fixtures() {
        let scenario = Scenario::new("x").base_path("/tmp/base");
        assert_eq!(
            scenario.resolve_path(Path::new("a.case")),
            PathBuf::from("/tmp/base/a.case")
        );
        assert!(fixtures_root().ends_with("fixtures"));
    }
}
