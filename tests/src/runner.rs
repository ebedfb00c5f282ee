//! Scenario runner.

use morph_core::record_from_json;
use morph_session::{MemorySink, MemoryStore, Message, Session};

use crate::assertion::{Assertion, AssertionBuilder, StepOutput};
use crate::error::{FixtureError, FixtureResult};
use crate::fixture::Fixture;
use crate::scenario::Scenario;

/// Runs a scenario through a session.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    fixture: Fixture,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> FixtureResult<Self> {
        let fixture = scenario.load_fixture()?;
        Ok(Self { scenario, fixture })
    }

    /// Run the scenario.
    ///
    /// Steps with explicit assertions run in the order they were added.
    /// Without any, every payload in the fixture runs and is checked against
    /// its `.expected` section.
    pub fn run(&self) -> FixtureResult<()> {
        // 1. Register the script under the fixture's tag
        let tag = self.fixture.tag();
        let mut store = MemoryStore::new();
        if let Some(script) = self.fixture.script() {
            store.insert(tag, script);
        }

        // 2. Create a session
        let config = self.scenario.session_config().clone();
        let envelope_key = config.envelope_key.clone();
        let mut session = Session::new(config, store, MemorySink::new());

        // 3. Process each step and verify assertions
        let implicit: Vec<(String, Assertion)>;
        let steps: Vec<(&str, &Assertion)> = if self.scenario.steps().is_empty() {
            implicit = self
                .fixture
                .steps()
                .into_iter()
                .map(|name| (name.to_string(), AssertionBuilder::new().build()))
                .collect();
            implicit.iter().map(|(n, a)| (n.as_str(), a)).collect()
        } else {
            self.scenario
                .steps()
                .iter()
                .map(|s| (s.name.as_str(), &s.assertion))
                .collect()
        };

        for (offset, (name, assertion)) in steps.into_iter().enumerate() {
            let payload = self
                .fixture
                .payload(name)
                .ok_or_else(|| FixtureError::step_not_found(name))?;
            let message = Message::new(offset as u64, tag, payload.as_bytes());

            let result = session
                .process(&message)
                .map_err(|e| e.to_string())
                .and_then(|processed| {
                    let inner = processed
                        .envelope
                        .get(&envelope_key)
                        .cloned()
                        .unwrap_or_default();
                    let record = record_from_json(inner).map_err(|e| e.to_string())?;
                    Ok(StepOutput { record, processed })
                });

            // A fixture's expected record is checked in addition to the
            // scenario's own assertion.
            if let Some(expected) = self.fixture.expected(name)? {
                AssertionBuilder::new()
                    .record(expected)
                    .build()
                    .verify(name, &result)?;
            }
            assertion.verify(name, &result)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::Scenario;

    const FIXTURE: &str = r#"
-- @tag: T

--# script
rename a b

--# one
{"a": 1}

--# one.expected
{"b": 1, "eventSource": "T"}

--# two
{"c": 1}
"#;

    #[test]
    fn test_runner_checks_expected_sections() {
        let scenario = Scenario::new("inline").fixture_source(FIXTURE).unwrap();
        scenario.run().unwrap();
    }

    #[test]
    fn test_runner_with_explicit_steps() {
        let scenario = Scenario::new("inline")
            .fixture_source(FIXTURE)
            .unwrap()
            .step("two", |a| a.field("c", 1i64).skipped(1))
            .step("one", |a| a.applied(1));
        scenario.run().unwrap();
    }

    #[test]
    fn test_runner_reports_unknown_step() {
        let scenario = Scenario::new("inline")
            .fixture_source(FIXTURE)
            .unwrap()
            .step("three", |a| a);
        assert!(scenario.run().is_err());
    }

    #[test]
    fn test_runner_reports_wrong_expectation() {
        let scenario = Scenario::new("inline")
            .fixture_source(FIXTURE)
            .unwrap()
            .step("one", |a| a.field("a", 1i64));
        let err = scenario.run().unwrap_err();
        assert!(err.to_string().contains("field 'a'"));
    }
}
