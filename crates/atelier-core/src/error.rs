//! Error types for routing, rendering and configuration.

use thiserror::Error;

/// Errors raised while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Patterns are absolute.
    #[error("pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    /// A `:` with no name after it.
    #[error("empty parameter name in pattern: {0}")]
    EmptyParameter(String),

    /// `//` inside a pattern.
    #[error("empty segment in pattern: {0}")]
    EmptySegment(String),

    /// An optional parameter followed by more segments.
    #[error("optional parameter must be the last segment: {0}")]
    OptionalNotLast(String),

    /// The same parameter name used twice.
    #[error("duplicate parameter '{name}' in pattern: {pattern}")]
    DuplicateParameter {
        /// Repeated name.
        name: String,
        /// Offending pattern.
        pattern: String,
    },
}

/// Errors raised while building a [`Router`](crate::Router).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A pattern in the table failed to parse.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The fallback target is not served by any route.
    #[error("fallback target '{0}' does not resolve to a view")]
    RedirectLoop(String),
}

/// Failure while rendering a routed view.
///
/// Contained by the [`ErrorBoundary`](crate::ErrorBoundary); never
/// propagates past the view that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A route parameter the view cannot work with.
    #[error("invalid route parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as declared in the route pattern.
        name: String,
        /// Why the view rejected it.
        reason: String,
    },

    /// The view reported a failure.
    #[error("view failed: {0}")]
    Failed(String),

    /// The view panicked while rendering.
    #[error("view panicked: {0}")]
    Panicked(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The HTTP origin is not an absolute `http(s)` origin.
    #[error("invalid http origin '{0}': expected http:// or https://")]
    InvalidOrigin(String),

    /// The configuration document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
