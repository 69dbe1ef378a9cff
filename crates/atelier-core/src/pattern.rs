//! Path patterns and segment matching.
//!
//! Patterns use the `:name` syntax for required parameters and `:name?`
//! for an optional trailing parameter. Matching is exact: the path must
//! be fully consumed by the pattern.
//!
//! Path segments are percent-decoded once before comparison and capture,
//! the same way the browser router decodes them, so `%2F` inside a
//! parameter yields a literal `/` in the captured value.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::PatternError;

/// Bytes escaped when a value is written as a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One segment of a parsed [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text, compared ASCII-case-insensitively.
    Literal(String),
    /// Required parameter; any segment value is captured, including `""`.
    Param(String),
    /// Optional trailing parameter.
    OptionalParam(String),
}

/// A parsed route pattern such as `/projects/:projectId/edit/:representationId?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parses a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is not absolute, contains
    /// an empty segment or parameter name, repeats a parameter, or places
    /// an optional parameter anywhere but last.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        };

        let mut segments: Vec<Segment> = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment(pattern.to_string()));
                }
                if matches!(segments.last(), Some(Segment::OptionalParam(_))) {
                    return Err(PatternError::OptionalNotLast(pattern.to_string()));
                }
                segments.push(Self::parse_segment(pattern, part)?);
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for segment in &segments {
            if let Segment::Param(name) | Segment::OptionalParam(name) = segment {
                if seen.contains(&name.as_str()) {
                    return Err(PatternError::DuplicateParameter {
                        name: name.clone(),
                        pattern: pattern.to_string(),
                    });
                }
                seen.push(name);
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    fn parse_segment(pattern: &str, part: &str) -> Result<Segment, PatternError> {
        let Some(param) = part.strip_prefix(':') else {
            return Ok(Segment::Literal(part.to_string()));
        };
        let (name, optional) = match param.strip_suffix('?') {
            Some(name) => (name, true),
            None => (param, false),
        };
        if name.is_empty() {
            return Err(PatternError::EmptyParameter(pattern.to_string()));
        }
        Ok(if optional {
            Segment::OptionalParam(name.to_string())
        } else {
            Segment::Param(name.to_string())
        })
    }

    /// Returns the pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of all parameters in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) | Segment::OptionalParam(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Matches a request path against this pattern.
    ///
    /// Returns the captured parameters on success, percent-decoded. An
    /// optional parameter whose segment is empty is treated as absent.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<Cow<'_, str>> = split_path(path).into_iter().map(decode_segment).collect();
        if parts.len() > self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (i, segment) in self.segments.iter().enumerate() {
            match (segment, parts.get(i)) {
                (Segment::Literal(text), Some(part)) if part.eq_ignore_ascii_case(text) => {}
                (Segment::Literal(_), _) => return None,
                (Segment::Param(name), Some(part)) => params.insert(name, part),
                (Segment::Param(_), None) => return None,
                (Segment::OptionalParam(name), Some(part)) if !part.is_empty() => {
                    params.insert(name, part);
                }
                (Segment::OptionalParam(_), _) => {}
            }
        }
        Some(params)
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters captured from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Returns the value captured for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns `true` if no parameters were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

/// Splits a request path into segments.
///
/// Query and fragment are dropped, a missing leading `/` is tolerated and
/// a single trailing `/` is ignored. Interior empty segments are kept so
/// `/projects//edit` yields `["projects", "", "edit"]`.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

/// Percent-decodes one path segment.
///
/// A segment that does not decode to UTF-8 is kept as written.
#[must_use]
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(segment))
}

/// Percent-encodes `value` so it occupies exactly one path segment.
///
/// `/` and `%` are escaped, so [`decode_segment`] gives `value` back.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}
