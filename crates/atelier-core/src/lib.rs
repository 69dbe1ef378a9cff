//! Core logic of the Atelier studio client.
//!
//! This crate holds everything in the client that does not depend on a UI
//! framework:
//! - [`Router`] - ordered route table with first-match-wins resolution and
//!   a redirect fallback
//! - [`History`] - location stack that applies redirects and replaces the
//!   [`NavigationContext`] on every navigation
//! - [`ErrorBoundary`] - per-view containment of render failures
//! - [`ContextMenu`] - entries and click dispatch for the edit-project
//!   navbar menu
//! - [`Config`] - explicit, environment-derived client configuration

mod boundary;
mod config;
mod error;
mod history;
mod menu;
mod pattern;
mod router;

pub use boundary::{ErrorBoundary, Fallback, Rendered, ViewRenderer};
pub use config::{Config, DEFAULT_HTTP_ORIGIN, HTTP_ORIGIN_ENV};
pub use error::{ConfigError, PatternError, RenderError, RouterError};
pub use history::{History, Navigation, NavigationContext};
pub use menu::{
    ContextMenu, MenuAction, MenuActionSet, MenuCallback, MenuEntry, MenuIcon, MenuOutcome,
    MenuPosition, DOWNLOAD_MIME_TYPE, MENU_TEST_ID,
};
pub use pattern::{decode_segment, encode_segment, split_path, PathPattern, RouteParams, Segment};
pub use router::{
    Resolution, Route, RouteMatch, Router, View, ViewKind, EDIT_PROJECT_PATTERN, NEW_PROJECT_PATH,
    PROJECTS_PATH, PROJECT_ID_PARAM, REPRESENTATION_ID_PARAM, UPLOAD_PROJECT_PATH,
};
