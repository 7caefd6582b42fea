//! Config conformance fixture runner.
//!
//! Loads YAML fixtures that embed a table in the [`TableConfig`] format. This
//! exercises the config loading path: YAML → `TableConfig` → `build()` →
//! lookup. Error fixtures name the [`MatcherError`] variant `build()` must
//! return.

use pathmatch::{MatcherError, TableConfig};
use serde::Deserialize;

/// A config conformance test fixture.
#[derive(Debug, Deserialize)]
pub struct ConfigFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub config: TableConfig,
    #[serde(default)]
    pub cases: Vec<ConfigTestCase>,
    /// Expected error variant, e.g. `text_after_wildcard`.
    #[serde(default)]
    pub expect_error: Option<String>,
}

/// A test case within a config fixture.
#[derive(Debug, Deserialize)]
pub struct ConfigTestCase {
    pub name: String,
    pub path: String,
    pub expect: Option<String>,
}

impl ConfigFixture {
    /// Parse a single config fixture from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple config fixtures from a YAML file with `---` separators.
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }
}

/// Snake-case name of an error variant, as written in fixtures.
#[must_use]
pub fn error_kind(err: &MatcherError) -> &'static str {
    match err {
        MatcherError::TooManyPatterns { .. } => "too_many_patterns",
        MatcherError::PatternTooLong { .. } => "pattern_too_long",
        MatcherError::TextAfterWildcard { .. } => "text_after_wildcard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_fixture() {
        let yaml = r#"
name: bad
config:
  patterns: ["/a/*/b"]
expect_error: text_after_wildcard
"#;
        let fixture = ConfigFixture::from_yaml(yaml).unwrap();
        let err = fixture.config.build().unwrap_err();
        assert_eq!(Some(error_kind(&err)), fixture.expect_error.as_deref());
    }
}
