//! Pattern decomposition.
//!
//! A pattern is read left to right and cut into the segments the tree stores:
//! literal text, named parameters (`:name`) and a trailing wildcard (`*`).
//! `\:` is a literal colon. Every decomposition starts with a (possibly empty)
//! literal segment, which is matched against the root's own fragment.

use std::mem;

/// Marks the start of a named parameter.
pub(crate) const PARAM_LABEL: u8 = b':';
/// Marks a wildcard that captures the rest of the input.
pub(crate) const WILDCARD_LABEL: u8 = b'*';
/// Capture name bound by a wildcard.
pub(crate) const WILDCARD_NAME: &str = "*";

const ESCAPE: u8 = b'\\';
const SEPARATOR: u8 = b'/';

/// One piece of a decomposed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'p> {
    /// Literal text with escapes already removed.
    Static(String),
    /// A parameter; the name runs up to the next `/`.
    Param(&'p str),
    /// The wildcard. Always the last segment.
    Wildcard,
}

/// A pattern cut into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decomposed<'p> {
    pub(crate) segments: Vec<Segment<'p>>,
    /// Text following a wildcard. It takes no part in the tree.
    pub(crate) ignored: &'p str,
}

impl Decomposed<'_> {
    /// Capture names in root-to-leaf order.
    pub(crate) fn capture_names(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Static(_) => None,
                Segment::Param(name) => Some((*name).to_owned()),
                Segment::Wildcard => Some(WILDCARD_NAME.to_owned()),
            })
            .collect()
    }
}

/// Cut `pattern` into segments.
pub(crate) fn decompose(pattern: &str) -> Decomposed<'_> {
    let bytes = pattern.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            ESCAPE if bytes.get(i + 1) == Some(&PARAM_LABEL) => {
                literal.push_str(&pattern[run_start..i]);
                literal.push(PARAM_LABEL as char);
                i += 2;
                run_start = i;
            }
            PARAM_LABEL => {
                literal.push_str(&pattern[run_start..i]);
                segments.push(Segment::Static(mem::take(&mut literal)));

                let name_start = i + 1;
                let name_end = bytes[name_start..]
                    .iter()
                    .position(|&b| b == SEPARATOR)
                    .map_or(bytes.len(), |offset| name_start + offset);
                segments.push(Segment::Param(&pattern[name_start..name_end]));

                i = name_end;
                run_start = i;
            }
            WILDCARD_LABEL => {
                literal.push_str(&pattern[run_start..i]);
                segments.push(Segment::Static(literal));
                segments.push(Segment::Wildcard);
                return Decomposed {
                    segments,
                    ignored: &pattern[i + 1..],
                };
            }
            _ => i += 1,
        }
    }

    literal.push_str(&pattern[run_start..]);
    segments.push(Segment::Static(literal));
    Decomposed {
        segments,
        ignored: "",
    }
}
