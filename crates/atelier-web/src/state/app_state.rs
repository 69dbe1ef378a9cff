//! # Application State
//!
//! Configuration and route table shared across all components.

use atelier_core::{Config, ContextMenu, MenuPosition, Router, View};

/// Global application state.
///
/// Installed once at launch with `LaunchBuilder::with_context` and read
/// with `use_context::<AppState>()`. Nothing in it changes after launch.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///
///     rsx! {
///         p { "API origin: {state.config.http_origin()}" }
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Client configuration.
    pub config: Config,

    /// Studio route table.
    pub routes: Router,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(config: Config, routes: Router) -> Self {
        Self { config, routes }
    }

    /// Builds the navbar menu for `project_id` at `position`.
    #[must_use]
    pub fn context_menu(&self, position: MenuPosition, project_id: &str) -> ContextMenu {
        ContextMenu::new(position, project_id, &self.config)
    }

    /// Resolves a location the route enum did not recognise.
    ///
    /// Returns the canonical view when the core table still matches (a
    /// case or trailing-slash variant), otherwise `None` for a redirect.
    #[must_use]
    pub fn resolve_unmatched(&self, path: &str) -> Option<View> {
        self.routes.match_path(path).map(|found| found.view)
    }

    /// The view rendered at `location` after any redirect.
    #[must_use]
    pub fn view_at(&self, location: &str) -> View {
        self.resolve_unmatched(location).unwrap_or_else(|| self.fallback_view())
    }

    /// The view unknown locations are redirected to.
    #[must_use]
    pub fn fallback_view(&self) -> View {
        self.routes.fallback_match().view.clone()
    }
}
