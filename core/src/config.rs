//! Config types for building a routing table.
//!
//! [`TableConfig`] is the serializable form of a [`Matcher`]: an ordered list
//! of patterns. Unlike [`Matcher::add`], which accepts any string, building
//! from config validates the table and rejects it as a whole.
//!
//! ```yaml
//! patterns:
//!   - /users/:id
//!   - /users/me
//!   - /static/*
//! ```

use crate::pattern::decompose;
use crate::{Matcher, MatcherError, MAX_PATTERNS, MAX_PATTERN_LENGTH};

/// Configuration for a [`Matcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Patterns, registered in order. A later pattern replaces an earlier one
    /// that ends at the same place in the tree.
    pub patterns: Vec<String>,
}

impl TableConfig {
    /// Create a config from a list of patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Check limits and pattern shape without building anything.
    ///
    /// # Errors
    ///
    /// - [`MatcherError::TooManyPatterns`] beyond [`MAX_PATTERNS`]
    /// - [`MatcherError::PatternTooLong`] beyond [`MAX_PATTERN_LENGTH`]
    /// - [`MatcherError::TextAfterWildcard`] when a `*` is not the last character
    pub fn validate(&self) -> Result<(), MatcherError> {
        if self.patterns.len() > MAX_PATTERNS {
            return Err(MatcherError::TooManyPatterns {
                count: self.patterns.len(),
                max: MAX_PATTERNS,
            });
        }

        for pattern in &self.patterns {
            if pattern.len() > MAX_PATTERN_LENGTH {
                return Err(MatcherError::PatternTooLong {
                    len: pattern.len(),
                    max: MAX_PATTERN_LENGTH,
                });
            }
            if !decompose(pattern).ignored.is_empty() {
                return Err(MatcherError::TextAfterWildcard {
                    pattern: pattern.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate, then build a [`Matcher`] holding every pattern.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build(&self) -> Result<Matcher, MatcherError> {
        self.validate()?;
        let matcher: Matcher = self.patterns.iter().map(String::as_str).collect();
        tracing::debug!(patterns = matcher.len(), "routing table built");
        Ok(matcher)
    }
}

impl From<&Matcher> for TableConfig {
    fn from(matcher: &Matcher) -> Self {
        Self::new(matcher.patterns())
    }
}
