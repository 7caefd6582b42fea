//! Conformance fixture runner
//!
//! Loads YAML fixtures and runs them against a [`Matcher`].
//!
//! ```yaml
//! name: params_basic
//! description: a parameter captures one segment
//! patterns:
//!   - /users/:id
//! removed: []
//! cases:
//!   - name: captures id
//!     path: /users/42
//!     expect: /users/:id
//!     captures: { id: "42" }
//! ```

use pathmatch::Matcher;
use serde::Deserialize;
use std::collections::HashMap;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Patterns registered in order.
    pub patterns: Vec<String>,
    /// Patterns removed after every pattern has been registered.
    #[serde(default)]
    pub removed: Vec<String>,
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub path: String,
    /// The pattern expected to win, or `None` for no match.
    pub expect: Option<String>,
    #[serde(default)]
    pub captures: HashMap<String, String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Option<(String, HashMap<String, String>)>,
    pub actual: Option<(String, HashMap<String, String>)>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Register the patterns, then apply removals.
    pub fn build(&self) -> Matcher {
        let mut matcher: Matcher = self.patterns.iter().map(String::as_str).collect();
        for pattern in &self.removed {
            assert!(
                matcher.remove(pattern),
                "Fixture '{}' removes unregistered pattern {pattern:?}",
                self.name
            );
        }
        matcher
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        let matcher = self.build();
        self.cases
            .iter()
            .map(|case| {
                let actual = matcher
                    .lookup(&case.path)
                    .map(|found| (found.pattern.to_owned(), found.captures));
                let expected = case
                    .expect
                    .clone()
                    .map(|pattern| (pattern, case.captures.clone()));
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == expected,
                    expected,
                    actual,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        for result in self.run() {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
name: inline
patterns:
  - /users/:id
  - /users/me
removed:
  - /users/me
cases:
  - name: param wins after static removed
    path: /users/me
    expect: /users/:id
    captures: { id: me }
  - name: no match
    path: /posts
    expect: null
"#;

    #[test]
    fn parses_and_runs() {
        let fixture = Fixture::from_yaml(YAML).unwrap();
        assert_eq!(fixture.removed, vec!["/users/me"]);
        assert!(fixture.run().iter().all(|r| r.passed));
    }

    #[test]
    fn reports_failure() {
        let mut fixture = Fixture::from_yaml(YAML).unwrap();
        fixture.cases[1].expect = Some("/posts".into());
        let results = fixture.run();
        assert!(results[0].passed);
        assert!(!results[1].passed);
        assert_eq!(results[1].actual, None);
    }

    #[test]
    fn multi_document() {
        let yaml = format!("{YAML}\n---\n{YAML}");
        assert_eq!(Fixture::from_yaml_multi(&yaml).unwrap().len(), 2);
    }
}
