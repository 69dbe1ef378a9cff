//! # Navigation History
//!
//! Location stack the router runs against.
//!
//! Each navigation event produces exactly one resolution and a fresh
//! [`NavigationContext`]; contexts are replaced, never mutated. A path that
//! matches no route is replaced by the router's fallback location so the
//! address the user sees is the redirect target.

use crate::pattern::RouteParams;
use crate::router::{RouteMatch, Router, View};

/// The resolved state of the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    /// Location as shown in the address bar.
    pub location: String,
    /// View rendered at `location`.
    pub view: View,
    /// Parameters captured from `location`.
    pub params: RouteParams,
}

impl NavigationContext {
    fn from_match(location: String, found: RouteMatch) -> Self {
        Self {
            location,
            view: found.view,
            params: found.params,
        }
    }
}

/// Record of one navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path the event asked for.
    pub requested: String,
    /// Whether the requested path was redirected.
    pub redirected: bool,
    /// Context after the event.
    pub context: NavigationContext,
}

/// Browser-style history over a [`Router`].
#[derive(Debug, Clone)]
pub struct History {
    router: Router,
    entries: Vec<NavigationContext>,
    index: usize,
}

impl History {
    /// Opens the history at `initial`, applying any redirect.
    #[must_use]
    pub fn new(router: Router, initial: &str) -> Self {
        let (context, _) = settle(&router, initial);
        Self {
            router,
            entries: vec![context],
            index: 0,
        }
    }

    /// Pushes `path` as a new entry. Forward entries are discarded.
    ///
    /// On redirect the pushed entry holds the redirect target, not `path`.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let (context, redirected) = settle(&self.router, path);
        self.entries.truncate(self.index + 1);
        self.entries.push(context.clone());
        self.index = self.entries.len() - 1;
        tracing::debug!(path, location = %context.location, "Navigated");
        Navigation {
            requested: path.to_string(),
            redirected,
            context,
        }
    }

    /// Replaces the current entry with `path`.
    pub fn replace(&mut self, path: &str) -> Navigation {
        let (context, redirected) = settle(&self.router, path);
        self.entries[self.index] = context.clone();
        tracing::debug!(path, location = %context.location, "Replaced location");
        Navigation {
            requested: path.to_string(),
            redirected,
            context,
        }
    }

    /// Steps back one entry, if possible.
    pub fn back(&mut self) -> Option<&NavigationContext> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps forward one entry, if possible.
    pub fn forward(&mut self) -> Option<&NavigationContext> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// The current context.
    #[must_use]
    pub fn current(&self) -> &NavigationContext {
        &self.entries[self.index]
    }

    /// The current location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.current().location
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history holds at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The router backing this history.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }
}

/// Resolves `path`, following the fallback redirect at most once.
fn settle(router: &Router, path: &str) -> (NavigationContext, bool) {
    match router.match_path(path) {
        Some(found) => (NavigationContext::from_match(path.to_string(), found), false),
        None => {
            tracing::info!(path, to = router.fallback(), "Redirecting unknown path");
            let context = NavigationContext::from_match(
                router.fallback().to_string(),
                router.fallback_match().clone(),
            );
            (context, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::PROJECTS_PATH;

    fn history(initial: &str) -> History {
        History::new(Router::studio().unwrap(), initial)
    }

    #[test]
    fn test_initial_location_is_resolved() {
        let history = history("/new/project");
        assert_eq!(history.location(), "/new/project");
        assert_eq!(history.current().view, View::NewProject);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_initial_unknown_location_redirects() {
        let history = history("/");
        assert_eq!(history.location(), PROJECTS_PATH);
        assert_eq!(history.current().view, View::Projects);
    }

    #[test]
    fn test_navigate_unknown_replaces_pushed_entry() {
        let mut history = history("/projects");
        let nav = history.navigate("/unknown");

        assert!(nav.redirected);
        assert_eq!(nav.requested, "/unknown");
        assert_eq!(nav.context.location, PROJECTS_PATH);
        assert_eq!(nav.context.view, View::Projects);
        assert_eq!(history.location(), PROJECTS_PATH);
        assert_eq!(history.len(), 2);
        assert!(history.entries.iter().all(|e| e.location != "/unknown"));
    }

    #[test]
    fn test_navigate_captures_params() {
        let mut history = history("/projects");
        let nav = history.navigate("/projects/abc123/edit/rep-1");

        assert!(!nav.redirected);
        assert_eq!(nav.context.params.get("projectId"), Some("abc123"));
        assert_eq!(nav.context.params.get("representationId"), Some("rep-1"));
    }

    #[test]
    fn test_context_is_replaced_per_event() {
        let mut history = history("/projects");
        history.navigate("/projects/a/edit/r");
        let first = history.current().clone();
        history.navigate("/projects/b/edit");
        let second = history.current();

        assert_eq!(first.params.get("representationId"), Some("r"));
        assert_eq!(second.params.get("projectId"), Some("b"));
        assert_eq!(second.params.get("representationId"), None);
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = history("/projects");
        history.navigate("/new/project");
        history.navigate("/upload/project");

        assert_eq!(history.back().map(|c| c.view.clone()), Some(View::NewProject));
        assert_eq!(history.back().map(|c| c.view.clone()), Some(View::Projects));
        assert!(history.back().is_none());
        assert_eq!(history.forward().map(|c| c.view.clone()), Some(View::NewProject));

        history.navigate("/projects/p/edit");
        assert!(history.forward().is_none());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = history("/projects");
        history.navigate("/new/project");
        let nav = history.replace("/upload/project");

        assert!(!nav.redirected);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().view, View::UploadProject);
        assert_eq!(history.back().map(|c| c.view.clone()), Some(View::Projects));
    }
}
