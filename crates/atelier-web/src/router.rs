//! # Routing
//!
//! Defines the application routes and navigation structure.
//!
//! The variants mirror the `atelier-core` route table in the same priority
//! order. Each route component wraps its view in [`Guarded`] so a failure
//! is contained to that route.

use std::str::FromStr;

use atelier_core::{encode_segment, View, ViewKind};
use dioxus::prelude::*;

use crate::components::{Guarded, Layout};
use crate::state::AppState;
use crate::views::{EditProjectView, NewProjectView, ProjectsView, UploadProjectView};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which provides
/// consistent navigation and structure.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Create project form.
    #[route("/new/project")]
    NewProject {},

    /// Upload project form.
    #[route("/upload/project")]
    UploadProject {},

    /// All projects.
    #[route("/projects")]
    Projects {},

    /// Project editor without an open representation.
    ///
    /// # Parameters
    ///
    /// * `project_id` - The project being edited
    #[route("/projects/:project_id/edit")]
    EditProject { project_id: String },

    /// Project editor with a representation open.
    ///
    /// # Parameters
    ///
    /// * `project_id` - The project being edited
    /// * `representation_id` - The representation to open
    #[route("/projects/:project_id/edit/:representation_id")]
    EditProjectRepresentation {
        project_id: String,
        representation_id: String,
    },
    #[end_layout]

    /// Anything else; replaced by `/projects`.
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

impl Route {
    /// The core view this route renders, `None` for [`Route::Unmatched`].
    #[must_use]
    pub fn view(&self) -> Option<View> {
        match self {
            Self::NewProject {} => Some(View::NewProject),
            Self::UploadProject {} => Some(View::UploadProject),
            Self::Projects {} => Some(View::Projects),
            Self::EditProject { project_id } => Some(View::EditProject {
                project_id: project_id.clone(),
                representation_id: None,
            }),
            Self::EditProjectRepresentation {
                project_id,
                representation_id,
            } => Some(View::EditProject {
                project_id: project_id.clone(),
                representation_id: Some(representation_id.clone()),
            }),
            Self::Unmatched { .. } => None,
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::NewProject => Self::NewProject {},
            View::UploadProject => Self::UploadProject {},
            View::Projects => Self::Projects {},
            View::EditProject {
                project_id,
                representation_id: None,
            } => Self::EditProject { project_id },
            View::EditProject {
                project_id,
                representation_id: Some(representation_id),
            } => Self::EditProjectRepresentation {
                project_id,
                representation_id,
            },
        }
    }
}

#[component]
fn NewProject() -> Element {
    rsx! {
        Guarded { view: ViewKind::NewProject, NewProjectView {} }
    }
}

#[component]
fn UploadProject() -> Element {
    rsx! {
        Guarded { view: ViewKind::UploadProject, UploadProjectView {} }
    }
}

#[component]
fn Projects() -> Element {
    rsx! {
        Guarded { view: ViewKind::Projects, ProjectsView {} }
    }
}

#[component]
fn EditProject(project_id: String) -> Element {
    rsx! {
        Guarded {
            view: ViewKind::EditProject,
            EditProjectView { project_id, representation_id: None }
        }
    }
}

#[component]
fn EditProjectRepresentation(project_id: String, representation_id: String) -> Element {
    rsx! {
        Guarded {
            view: ViewKind::EditProject,
            EditProjectView { project_id, representation_id: Some(representation_id) }
        }
    }
}

/// Replaces an unrecognised location.
///
/// Locations the core table still serves (letter case, trailing slash)
/// go to their canonical route when the route enum can parse it back;
/// everything else goes to the core fallback. Nothing renders at the old
/// location.
#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();

    let path = unmatched_path(&segments);
    let canonical = state
        .resolve_unmatched(&path)
        .map(Route::from)
        .filter(|route| Route::from_str(&route.to_string()).ok().as_ref() == Some(route));
    let target = match canonical {
        Some(route) => route,
        None => {
            let fallback = Route::from(state.fallback_view());
            tracing::info!(path = %path, to = %fallback, "Redirecting unknown path");
            fallback
        }
    };

    use_effect(move || {
        navigator.replace(target.clone());
    });

    rsx! {}
}

/// Rebuilds the location from the decoded catch-all segments.
fn unmatched_path(segments: &[String]) -> String {
    let encoded: Vec<String> = segments.iter().map(|s| encode_segment(s)).collect();
    format!("/{}", encoded.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Config, ContextMenu, MenuPosition, Resolution, Router};

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap()
    }

    #[test]
    fn test_routes_parse_to_variants() {
        assert_eq!(parse("/new/project"), Route::NewProject {});
        assert_eq!(parse("/upload/project"), Route::UploadProject {});
        assert_eq!(parse("/projects"), Route::Projects {});
        assert_eq!(
            parse("/projects/abc123/edit"),
            Route::EditProject {
                project_id: "abc123".to_string()
            }
        );
        assert_eq!(
            parse("/projects/abc123/edit/rep-1"),
            Route::EditProjectRepresentation {
                project_id: "abc123".to_string(),
                representation_id: "rep-1".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_path_is_unmatched() {
        assert!(matches!(parse("/unknown"), Route::Unmatched { .. }));
        assert!(matches!(parse("/projects/abc123"), Route::Unmatched { .. }));
    }

    #[test]
    fn test_routes_agree_with_core_table() {
        let routes = Router::studio().unwrap();
        for path in [
            "/new/project",
            "/upload/project",
            "/projects",
            "/projects/abc123/edit",
            "/projects/abc123/edit/rep-1",
            "/unknown",
            "/projects/abc123",
            "/new/project/extra",
        ] {
            let expected = match routes.resolve(path) {
                Resolution::Render(view) => Some(view),
                Resolution::Redirect { .. } => None,
            };
            assert_eq!(parse(path).view(), expected, "path {path}");
        }
    }

    #[test]
    fn test_encoded_project_id_agrees_with_core() {
        let routes = Router::studio().unwrap();
        let path = "/projects/a%2Fb/edit";

        let Resolution::Render(core_view) = routes.resolve(path) else {
            panic!("expected {path} to render");
        };
        assert_eq!(parse(path).view(), Some(core_view.clone()));

        let View::EditProject { project_id, .. } = core_view else {
            panic!("expected the editor");
        };
        assert_eq!(project_id, "a/b");

        let config = Config::new("https://example.com").unwrap();
        let menu = ContextMenu::new(MenuPosition::default(), project_id, &config);
        assert_eq!(menu.download_url(), "https://example.com/api/projects/a%2Fb");
    }

    #[test]
    fn test_encoded_representation_id_agrees_with_core() {
        let routes = Router::studio().unwrap();
        let path = "/projects/p%201/edit/r%2F2";
        let expected = View::EditProject {
            project_id: "p 1".to_string(),
            representation_id: Some("r/2".to_string()),
        };
        assert_eq!(routes.resolve(path), Resolution::Render(expected.clone()));
        assert_eq!(parse(path).view(), Some(expected));
    }

    #[test]
    fn test_unmatched_path_keeps_segments_apart() {
        let segments = vec!["Projects".to_string(), "a/b".to_string(), "edit".to_string()];
        assert_eq!(unmatched_path(&segments), "/Projects/a%2Fb/edit");

        let state = AppState::new(Config::default(), Router::studio().unwrap());
        assert_eq!(
            state.resolve_unmatched(&unmatched_path(&segments)),
            Some(View::EditProject {
                project_id: "a/b".to_string(),
                representation_id: None,
            })
        );
    }

    #[test]
    fn test_menu_link_targets_core_view() {
        let state = AppState::new(Config::default(), Router::studio().unwrap());
        assert_eq!(Route::from(state.view_at("/projects")), Route::Projects {});
        assert_eq!(Route::from(state.view_at("/nowhere")), Route::Projects {});
        assert_eq!(Route::from(state.fallback_view()), Route::Projects {});
    }

    #[test]
    fn test_view_round_trip() {
        let view = View::EditProject {
            project_id: "p1".to_string(),
            representation_id: Some("r1".to_string()),
        };
        let route = Route::from(view.clone());
        assert_eq!(route.to_string(), view.path());
        assert_eq!(route.view(), Some(view));
    }
}
