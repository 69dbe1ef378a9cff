//! # Routing
//!
//! First-match-wins dispatch of request paths to studio views.
//!
//! The table is ordered; the first pattern that matches wins. Paths that
//! match nothing are redirected to the fallback location rather than
//! rendered in place.

use std::fmt;

use crate::error::RouterError;
use crate::pattern::{encode_segment, PathPattern, RouteParams};

/// Create-project form.
pub const NEW_PROJECT_PATH: &str = "/new/project";
/// Upload-project form.
pub const UPLOAD_PROJECT_PATH: &str = "/upload/project";
/// Project list, also the redirect target for unknown paths.
pub const PROJECTS_PATH: &str = "/projects";
/// Project editor, with an optional representation to open.
pub const EDIT_PROJECT_PATTERN: &str = "/projects/:projectId/edit/:representationId?";

/// Parameter carrying the edited project's identifier.
pub const PROJECT_ID_PARAM: &str = "projectId";
/// Parameter carrying the representation opened in the editor.
pub const REPRESENTATION_ID_PARAM: &str = "representationId";

/// The view handlers a route can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// `NewProjectView`.
    NewProject,
    /// `UploadProjectView`.
    UploadProject,
    /// `ProjectsView`.
    Projects,
    /// `EditProjectView`.
    EditProject,
}

impl ViewKind {
    /// Component name of the view handler.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewProject => "NewProjectView",
            Self::UploadProject => "UploadProjectView",
            Self::Projects => "ProjectsView",
            Self::EditProject => "EditProjectView",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved view together with its route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Create a new project.
    NewProject,
    /// Upload a project archive.
    UploadProject,
    /// List all projects.
    Projects,
    /// Edit a project, optionally opening one representation.
    ///
    /// `project_id` is passed through unvalidated and may be empty.
    EditProject {
        /// Project being edited.
        project_id: String,
        /// Representation to open, if any.
        representation_id: Option<String>,
    },
}

impl View {
    fn from_match(kind: ViewKind, params: &RouteParams) -> Self {
        match kind {
            ViewKind::NewProject => Self::NewProject,
            ViewKind::UploadProject => Self::UploadProject,
            ViewKind::Projects => Self::Projects,
            ViewKind::EditProject => Self::EditProject {
                project_id: params.get(PROJECT_ID_PARAM).unwrap_or_default().to_string(),
                representation_id: params.get(REPRESENTATION_ID_PARAM).map(str::to_string),
            },
        }
    }

    /// Returns the handler this view dispatches to.
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::NewProject => ViewKind::NewProject,
            Self::UploadProject => ViewKind::UploadProject,
            Self::Projects => ViewKind::Projects,
            Self::EditProject { .. } => ViewKind::EditProject,
        }
    }

    /// Canonical location of this view, suitable for links.
    ///
    /// Parameters are percent-encoded as single segments.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::NewProject => NEW_PROJECT_PATH.to_string(),
            Self::UploadProject => UPLOAD_PROJECT_PATH.to_string(),
            Self::Projects => PROJECTS_PATH.to_string(),
            Self::EditProject {
                project_id,
                representation_id: None,
            } => format!("{PROJECTS_PATH}/{}/edit", encode_segment(project_id)),
            Self::EditProject {
                project_id,
                representation_id: Some(representation_id),
            } => format!(
                "{PROJECTS_PATH}/{}/edit/{}",
                encode_segment(project_id),
                encode_segment(representation_id)
            ),
        }
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render this view at the requested location.
    Render(View),
    /// Replace the location with `to`; nothing renders at the old path.
    Redirect {
        /// Target location.
        to: String,
    },
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    kind: ViewKind,
}

impl Route {
    /// Creates a route from a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Pattern`] if the pattern does not parse.
    pub fn new(pattern: &str, kind: ViewKind) -> Result<Self, RouterError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            kind,
        })
    }

    /// The route's path pattern.
    #[must_use]
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The view handler this route dispatches to.
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.kind
    }
}

/// A successful match of a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Position of the matching route in the table.
    pub index: usize,
    /// Captured parameters.
    pub params: RouteParams,
    /// The view to render.
    pub view: View,
}

/// Ordered route table with a redirect fallback.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
    fallback: String,
    fallback_match: RouteMatch,
}

impl Router {
    /// Builds a router from an ordered table and a fallback location.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::RedirectLoop`] if `fallback` is not itself
    /// served by one of `routes`.
    pub fn new(routes: Vec<Route>, fallback: impl Into<String>) -> Result<Self, RouterError> {
        let fallback = fallback.into();
        let fallback_match = match_table(&routes, &fallback)
            .ok_or_else(|| RouterError::RedirectLoop(fallback.clone()))?;
        Ok(Self {
            routes,
            fallback,
            fallback_match,
        })
    }

    /// The studio route table.
    ///
    /// 1. `/new/project`
    /// 2. `/upload/project`
    /// 3. `/projects`
    /// 4. `/projects/:projectId/edit/:representationId?`
    ///
    /// Anything else redirects to `/projects`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in table is malformed.
    pub fn studio() -> Result<Self, RouterError> {
        let routes = vec![
            Route::new(NEW_PROJECT_PATH, ViewKind::NewProject)?,
            Route::new(UPLOAD_PROJECT_PATH, ViewKind::UploadProject)?,
            Route::new(PROJECTS_PATH, ViewKind::Projects)?,
            Route::new(EDIT_PROJECT_PATTERN, ViewKind::EditProject)?,
        ];
        Self::new(routes, PROJECTS_PATH)
    }

    /// The route table in priority order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Location unknown paths are redirected to.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the first route matching `path`, if any.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        match_table(&self.routes, path)
    }

    /// Resolves `path` to a view or a redirect.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.match_path(path) {
            Some(found) => {
                tracing::debug!(path, view = %found.view.kind(), "Resolved route");
                Resolution::Render(found.view)
            }
            None => {
                tracing::debug!(path, to = %self.fallback, "No route matched");
                Resolution::Redirect {
                    to: self.fallback.clone(),
                }
            }
        }
    }

    /// The match for the fallback location, computed once at construction.
    #[must_use]
    pub fn fallback_match(&self) -> &RouteMatch {
        &self.fallback_match
    }
}

fn match_table(routes: &[Route], path: &str) -> Option<RouteMatch> {
    routes.iter().enumerate().find_map(|(index, route)| {
        route.pattern.matches(path).map(|params| RouteMatch {
            index,
            view: View::from_match(route.kind, &params),
            params,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::studio().unwrap()
    }

    fn render(path: &str) -> View {
        match router().resolve(path) {
            Resolution::Render(view) => view,
            other => panic!("expected {path} to render, got {other:?}"),
        }
    }

    #[test]
    fn test_static_routes() {
        assert_eq!(render("/new/project"), View::NewProject);
        assert_eq!(render("/upload/project"), View::UploadProject);
        assert_eq!(render("/projects"), View::Projects);
    }

    #[test]
    fn test_edit_project_without_representation() {
        assert_eq!(
            render("/projects/abc123/edit"),
            View::EditProject {
                project_id: "abc123".to_string(),
                representation_id: None,
            }
        );
    }

    #[test]
    fn test_edit_project_with_representation() {
        assert_eq!(
            render("/projects/abc123/edit/rep-1"),
            View::EditProject {
                project_id: "abc123".to_string(),
                representation_id: Some("rep-1".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_project_id_passes_through() {
        assert_eq!(
            render("/projects//edit"),
            View::EditProject {
                project_id: String::new(),
                representation_id: None,
            }
        );
    }

    #[test]
    fn test_unknown_paths_redirect() {
        for path in [
            "/",
            "/unknown",
            "/new",
            "/projects/abc123",
            "/projects/abc123/edit/rep-1/extra",
            "/new/project/extra",
        ] {
            assert_eq!(
                router().resolve(path),
                Resolution::Redirect {
                    to: PROJECTS_PATH.to_string()
                },
                "path {path}"
            );
        }
    }

    #[test]
    fn test_first_match_wins() {
        let routes = vec![
            Route::new("/projects/:projectId/edit/:representationId?", ViewKind::EditProject)
                .unwrap(),
            Route::new("/projects/special/edit", ViewKind::NewProject).unwrap(),
            Route::new("/projects", ViewKind::Projects).unwrap(),
        ];
        let router = Router::new(routes, "/projects").unwrap();
        let found = router.match_path("/projects/special/edit").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.view.kind(), ViewKind::EditProject);
    }

    #[test]
    fn test_fallback_must_resolve() {
        let routes = vec![Route::new("/projects", ViewKind::Projects).unwrap()];
        assert_eq!(
            Router::new(routes, "/nowhere").unwrap_err(),
            RouterError::RedirectLoop("/nowhere".to_string())
        );
    }

    #[test]
    fn test_fallback_match_is_projects() {
        let router = router();
        assert_eq!(router.fallback(), PROJECTS_PATH);
        assert_eq!(router.fallback_match().view, View::Projects);
        assert_eq!(router.fallback_match().index, 2);
    }

    #[test]
    fn test_view_path_round_trips_through_router() {
        let views = [
            View::NewProject,
            View::UploadProject,
            View::Projects,
            View::EditProject {
                project_id: "p1".to_string(),
                representation_id: None,
            },
            View::EditProject {
                project_id: "p1".to_string(),
                representation_id: Some("r1".to_string()),
            },
        ];
        for view in views {
            assert_eq!(render(&view.path()), view);
        }
    }

    #[test]
    fn test_encoded_ids_round_trip_through_router() {
        let view = View::EditProject {
            project_id: "team/a b".to_string(),
            representation_id: Some("r%1".to_string()),
        };
        assert_eq!(view.path(), "/projects/team%2Fa%20b/edit/r%251");
        assert_eq!(render(&view.path()), view);
    }

    #[test]
    fn test_encoded_slash_is_part_of_project_id() {
        assert_eq!(
            render("/projects/a%2Fb/edit"),
            View::EditProject {
                project_id: "a/b".to_string(),
                representation_id: None,
            }
        );
    }

    #[test]
    fn test_view_kind_names() {
        assert_eq!(ViewKind::NewProject.to_string(), "NewProjectView");
        assert_eq!(ViewKind::EditProject.name(), "EditProjectView");
        assert_eq!(View::Projects.kind(), ViewKind::Projects);
    }
}
