//! Loader for fixture files.
//!
//! A fixture holds a script, one or more input payloads and, optionally, the
//! record each payload should become. Sections are introduced by
//! `--# name` markers:
//!
//! ```text
//! -- @tag: orders
//!
//! --# script
//! rename a b
//!
//! --# basic
//! {"a": 1}
//!
//! --# basic.expected
//! {"b": 1, "eventSource": "orders"}
//! ```
//!
//! Lines of the form `-- @key: value` are metadata and never part of a
//! section. Any other line before the first marker is a comment.

use std::collections::HashMap;
use std::path::Path;

use morph_core::{record_from_json, Record};

use crate::error::{FixtureError, FixtureResult};

/// Name of the section holding the script.
pub const SCRIPT_SECTION: &str = "script";

/// Suffix marking a section as the expected record for a step.
pub const EXPECTED_SUFFIX: &str = ".expected";

/// Source tag used when a fixture has no `@tag`.
pub const DEFAULT_TAG: &str = "test";

/// A parsed fixture file.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// The raw file content.
    pub source: String,
    /// Map of section name to content.
    pub sections: HashMap<String, String>,
    /// Sections in order of appearance.
    pub section_order: Vec<String>,
    /// `-- @key: value` metadata.
    pub metadata: HashMap<String, String>,
}

impl Fixture {
    /// Parse a fixture from a string.
    pub fn parse(source: &str) -> FixtureResult<Self> {
        let mut sections = HashMap::new();
        let mut section_order = Vec::new();
        let mut metadata = HashMap::new();
        let mut current: Option<String> = None;
        let mut content = String::new();

        for line in source.lines() {
            let trimmed = line.trim();

            if let Some(suffix) = trimmed.strip_prefix("--#") {
                if let Some(name) = current.take() {
                    sections.insert(name, content.trim().to_string());
                }

                let name = suffix.trim().to_string();
                if name.is_empty() {
                    return Err(FixtureError::fixture_parse(
                        "<inline>",
                        "empty section name after --#",
                    ));
                }
                if section_order.contains(&name) {
                    return Err(FixtureError::fixture_parse(
                        "<inline>",
                        format!("duplicate section '{}'", name),
                    ));
                }
                section_order.push(name.clone());
                current = Some(name);
                content = String::new();
            } else if let Some(meta) = trimmed.strip_prefix("-- @") {
                if let Some((key, value)) = meta.split_once(':') {
                    metadata.insert(key.trim().to_string(), value.trim().to_string());
                }
            } else if current.is_some() {
                content.push_str(line);
                content.push('\n');
            }
        }

        if let Some(name) = current {
            sections.insert(name, content.trim().to_string());
        }

        Ok(Self {
            source: source.to_string(),
            sections,
            section_order,
            metadata,
        })
    }

    /// Load and parse a fixture file from disk.
    pub fn load(path: &Path) -> FixtureResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| FixtureError::file_read(path, e))?;
        Self::parse(&source).map_err(|e| FixtureError::fixture_parse(path, e.to_string()))
    }

    /// The script, if the fixture registers one.
    pub fn script(&self) -> Option<&str> {
        self.sections.get(SCRIPT_SECTION).map(String::as_str)
    }

    /// Source tag for every payload in the fixture.
    pub fn tag(&self) -> &str {
        self.metadata
            .get("tag")
            .map(String::as_str)
            .unwrap_or(DEFAULT_TAG)
    }

    /// Payload sections, in order of appearance.
    pub fn steps(&self) -> Vec<&str> {
        self.section_order
            .iter()
            .map(String::as_str)
            .filter(|name| *name != SCRIPT_SECTION && !name.ends_with(EXPECTED_SUFFIX))
            .collect()
    }

    /// Raw payload for a step.
    pub fn payload(&self, step: &str) -> Option<&str> {
        self.sections.get(step).map(String::as_str)
    }

    /// Expected record for a step, if the fixture gives one.
    pub fn expected(&self, step: &str) -> FixtureResult<Option<Record>> {
        let section = format!("{}{}", step, EXPECTED_SUFFIX);
        let Some(text) = self.sections.get(&section) else {
            return Ok(None);
        };
        let json: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| FixtureError::invalid_json(&section, e.to_string()))?;
        let record =
            record_from_json(json).map_err(|e| FixtureError::invalid_json(&section, e.to_string()))?;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::record;

    const SAMPLE: &str = r#"
-- Renames a field.
-- @tag: orders

--# script
rename a b
update c 1

--# first
{"a": 1}

--# first.expected
{"b": 1, "c": "1", "eventSource": "orders"}

--# second
{"c": 0}
"#;

    #[test]
    fn test_parse_sections() {
        let fixture = Fixture::parse(SAMPLE).unwrap();

        assert_eq!(
            fixture.section_order,
            vec!["script", "first", "first.expected", "second"]
        );
        assert_eq!(fixture.script(), Some("rename a b\nupdate c 1"));
        assert_eq!(fixture.tag(), "orders");
        assert_eq!(fixture.steps(), vec!["first", "second"]);
        assert_eq!(fixture.payload("second"), Some("{\"c\": 0}"));
    }

    #[test]
    fn test_expected_record() {
        let fixture = Fixture::parse(SAMPLE).unwrap();

        assert_eq!(
            fixture.expected("first").unwrap(),
            Some(record! { "b" => 1i64, "c" => "1", "eventSource" => "orders" })
        );
        assert_eq!(fixture.expected("second").unwrap(), None);
    }

    #[test]
    fn test_metadata_is_stripped_from_sections() {
        let fixture = Fixture::parse("--# script\n-- @note: x\nrename a b\n").unwrap();
        assert_eq!(fixture.script(), Some("rename a b"));
        assert_eq!(fixture.metadata.get("note").map(String::as_str), Some("x"));
        assert_eq!(fixture.tag(), DEFAULT_TAG);
    }

    #[test]
    fn test_rejects_empty_and_duplicate_names() {
        assert!(Fixture::parse("--#\n{}").is_err());
        assert!(Fixture::parse("--# a\n{}\n--# a\n{}").is_err());
    }

    #[test]
    fn test_invalid_expected_json() {
        let fixture = Fixture::parse("--# s\n{}\n--# s.expected\n[1]\n").unwrap();
        assert!(matches!(
            fixture.expected("s"),
            Err(FixtureError::InvalidJson { .. })
        ));
    }
}
