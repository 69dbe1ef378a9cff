//! # Navbar Context Menu
//!
//! Entries and click dispatch for the edit-project navbar menu.
//!
//! The menu holds no state of its own: the entry list is derived from the
//! position, project identifier and configuration it was built with, and
//! every click is relayed to the caller's [`MenuActionSet`].

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::router::PROJECTS_PATH;

/// Content type advertised by the download link.
pub const DOWNLOAD_MIME_TYPE: &str = "application/octet-stream";

/// Test id of the menu container.
pub const MENU_TEST_ID: &str = "navbar-contextmenu";

/// Where the menu is anchored, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuPosition {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl MenuPosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The caller-supplied actions the menu can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Create a model in the project.
    CreateDocument,
    /// Upload a model into the project.
    UploadDocument,
    /// Rename the project.
    Rename,
    /// Delete the project.
    Delete,
    /// Close the menu.
    Close,
}

/// Icon drawn before an entry label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Pencil.
    Edit,
    /// Bin.
    Delete,
}

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Clickable entry relayed to a callback.
    Action {
        /// Test id of the entry.
        id: &'static str,
        /// Visible label.
        label: &'static str,
        /// Optional leading icon.
        icon: Option<MenuIcon>,
        /// Callback to invoke.
        action: MenuAction,
    },
    /// Visual divider.
    Separator,
    /// Entry wrapped in a native download link.
    Download {
        /// Test id of the link.
        link_id: &'static str,
        /// Test id of the entry.
        id: &'static str,
        /// Visible label.
        label: &'static str,
        /// Link target.
        href: String,
        /// Advertised content type.
        mime_type: &'static str,
    },
    /// Entry wrapped in a client-side navigation link.
    Navigate {
        /// Test id of the link.
        link_id: &'static str,
        /// Test id of the entry.
        id: &'static str,
        /// Visible label.
        label: &'static str,
        /// Target location.
        to: &'static str,
    },
}

impl MenuEntry {
    /// Visible label, `None` for separators.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Action { label, .. }
            | Self::Download { label, .. }
            | Self::Navigate { label, .. } => Some(*label),
            Self::Separator => None,
        }
    }

    /// Test id of the entry, `None` for separators.
    #[must_use]
    pub fn id(&self) -> Option<&'static str> {
        match self {
            Self::Action { id, .. } | Self::Download { id, .. } | Self::Navigate { id, .. } => {
                Some(*id)
            }
            Self::Separator => None,
        }
    }

    fn answers_to(&self, target: &str) -> bool {
        match self {
            Self::Action { id, .. } => *id == target,
            Self::Download { link_id, id, .. } | Self::Navigate { link_id, id, .. } => {
                *id == target || *link_id == target
            }
            Self::Separator => false,
        }
    }
}

/// What a click on an entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The callback for this action was invoked.
    Invoked(MenuAction),
    /// The close callback was invoked; the browser downloads `href`.
    Download {
        /// Download target.
        href: String,
    },
    /// The link navigates to `to`; no callback was invoked.
    Navigate {
        /// Target location.
        to: &'static str,
    },
}

/// Callback type for menu actions.
pub type MenuCallback<'a> = Box<dyn FnMut() + 'a>;

/// Callbacks supplied by the view that opened the menu.
///
/// Passed in whole and invoked, never stored by the menu.
pub struct MenuActionSet<'a> {
    /// "New model".
    pub on_create_document: MenuCallback<'a>,
    /// "Upload model".
    pub on_upload_document: MenuCallback<'a>,
    /// "Rename".
    pub on_rename: MenuCallback<'a>,
    /// "Delete".
    pub on_delete: MenuCallback<'a>,
    /// Dismissal and "Download".
    pub on_close: MenuCallback<'a>,
}

impl MenuActionSet<'_> {
    /// Invokes the callback for `action`.
    pub fn invoke(&mut self, action: MenuAction) {
        let callback = match action {
            MenuAction::CreateDocument => &mut self.on_create_document,
            MenuAction::UploadDocument => &mut self.on_upload_document,
            MenuAction::Rename => &mut self.on_rename,
            MenuAction::Delete => &mut self.on_delete,
            MenuAction::Close => &mut self.on_close,
        };
        callback();
    }
}

impl std::fmt::Debug for MenuActionSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuActionSet").finish_non_exhaustive()
    }
}

/// The edit-project navbar menu.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    position: MenuPosition,
    project_id: String,
    download_url: String,
}

impl ContextMenu {
    /// Builds the menu for `project_id` anchored at `position`.
    #[must_use]
    pub fn new(position: MenuPosition, project_id: impl Into<String>, config: &Config) -> Self {
        let project_id = project_id.into();
        let download_url = config.project_download_url(&project_id);
        Self {
            position,
            project_id,
            download_url,
        }
    }

    /// Anchor position.
    #[must_use]
    pub fn position(&self) -> MenuPosition {
        self.position
    }

    /// Project the menu acts on.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Target of the "Download" link.
    #[must_use]
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<MenuEntry> {
        vec![
            MenuEntry::Action {
                id: "new-document",
                label: "New model",
                icon: None,
                action: MenuAction::CreateDocument,
            },
            MenuEntry::Action {
                id: "upload-document",
                label: "Upload model",
                icon: None,
                action: MenuAction::UploadDocument,
            },
            MenuEntry::Separator,
            MenuEntry::Action {
                id: "rename",
                label: "Rename",
                icon: Some(MenuIcon::Edit),
                action: MenuAction::Rename,
            },
            MenuEntry::Download {
                link_id: "download-link",
                id: "download",
                label: "Download",
                href: self.download_url.clone(),
                mime_type: DOWNLOAD_MIME_TYPE,
            },
            MenuEntry::Action {
                id: "delete",
                label: "Delete",
                icon: Some(MenuIcon::Delete),
                action: MenuAction::Delete,
            },
            MenuEntry::Separator,
            MenuEntry::Navigate {
                link_id: "projects-link",
                id: "projects",
                label: "Back to all projects",
                to: PROJECTS_PATH,
            },
        ]
    }

    /// Handles a click on the entry (or link) with test id `target`.
    ///
    /// Returns `None` without invoking anything if no entry answers to
    /// `target`.
    pub fn select(&self, target: &str, actions: &mut MenuActionSet<'_>) -> Option<MenuOutcome> {
        let entry = self.entries().into_iter().find(|e| e.answers_to(target))?;
        let outcome = match entry {
            MenuEntry::Action { action, .. } => {
                actions.invoke(action);
                MenuOutcome::Invoked(action)
            }
            MenuEntry::Download { href, .. } => {
                actions.invoke(MenuAction::Close);
                MenuOutcome::Download { href }
            }
            MenuEntry::Navigate { to, .. } => MenuOutcome::Navigate { to },
            MenuEntry::Separator => return None,
        };
        tracing::debug!(
            entry = target,
            project_id = %self.project_id,
            ?outcome,
            "Menu entry selected"
        );
        Some(outcome)
    }

    /// Handles a dismissal (click outside, Escape).
    pub fn dismiss(&self, actions: &mut MenuActionSet<'_>) {
        actions.invoke(MenuAction::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Calls(RefCell<Vec<MenuAction>>);

    impl Calls {
        fn record(&self, action: MenuAction) -> MenuCallback<'_> {
            Box::new(move || self.0.borrow_mut().push(action))
        }

        fn actions(&self) -> MenuActionSet<'_> {
            MenuActionSet {
                on_create_document: self.record(MenuAction::CreateDocument),
                on_upload_document: self.record(MenuAction::UploadDocument),
                on_rename: self.record(MenuAction::Rename),
                on_delete: self.record(MenuAction::Delete),
                on_close: self.record(MenuAction::Close),
            }
        }

        fn take(&self) -> Vec<MenuAction> {
            self.0.take()
        }
    }

    fn menu() -> ContextMenu {
        let config = Config::new("https://example.com").unwrap();
        ContextMenu::new(MenuPosition::new(12.0, 34.0), "p1", &config)
    }

    #[test]
    fn test_download_url() {
        assert_eq!(menu().download_url(), "https://example.com/api/projects/p1");
    }

    #[test]
    fn test_entry_order() {
        let labels: Vec<_> = menu().entries().iter().map(MenuEntry::label).collect();
        assert_eq!(
            labels,
            vec![
                Some("New model"),
                Some("Upload model"),
                None,
                Some("Rename"),
                Some("Download"),
                Some("Delete"),
                None,
                Some("Back to all projects"),
            ]
        );
    }

    #[test]
    fn test_download_entry() {
        let entries = menu().entries();
        assert_eq!(
            entries[4],
            MenuEntry::Download {
                link_id: "download-link",
                id: "download",
                label: "Download",
                href: "https://example.com/api/projects/p1".to_string(),
                mime_type: "application/octet-stream",
            }
        );
    }

    #[test]
    fn test_delete_invokes_only_delete() {
        let calls = Calls::default();
        let outcome = menu().select("delete", &mut calls.actions());
        assert_eq!(outcome, Some(MenuOutcome::Invoked(MenuAction::Delete)));
        assert_eq!(calls.take(), vec![MenuAction::Delete]);
    }

    #[test]
    fn test_each_action_entry_invokes_its_callback() {
        let menu = menu();
        let calls = Calls::default();
        let mut actions = calls.actions();
        for (id, action) in [
            ("new-document", MenuAction::CreateDocument),
            ("upload-document", MenuAction::UploadDocument),
            ("rename", MenuAction::Rename),
        ] {
            assert_eq!(menu.select(id, &mut actions), Some(MenuOutcome::Invoked(action)));
        }
        drop(actions);
        assert_eq!(
            calls.take(),
            vec![
                MenuAction::CreateDocument,
                MenuAction::UploadDocument,
                MenuAction::Rename
            ]
        );
    }

    #[test]
    fn test_download_invokes_close_once() {
        let calls = Calls::default();
        let outcome = menu().select("download-link", &mut calls.actions());
        assert_eq!(
            outcome,
            Some(MenuOutcome::Download {
                href: "https://example.com/api/projects/p1".to_string()
            })
        );
        assert_eq!(calls.take(), vec![MenuAction::Close]);

        menu().select("download", &mut calls.actions());
        assert_eq!(calls.take(), vec![MenuAction::Close]);
    }

    #[test]
    fn test_back_to_projects_invokes_nothing() {
        let calls = Calls::default();
        let outcome = menu().select("projects-link", &mut calls.actions());
        assert_eq!(outcome, Some(MenuOutcome::Navigate { to: "/projects" }));
        assert!(calls.take().is_empty());
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let calls = Calls::default();
        assert_eq!(menu().select("share", &mut calls.actions()), None);
        assert!(calls.take().is_empty());
    }

    #[test]
    fn test_dismiss_closes() {
        let calls = Calls::default();
        menu().dismiss(&mut calls.actions());
        assert_eq!(calls.take(), vec![MenuAction::Close]);
    }

    #[test]
    fn test_close_is_idempotent_for_parent_state() {
        let open = RefCell::new(true);
        let closes = RefCell::new(0);
        let noop = || {};
        let mut actions = MenuActionSet {
            on_create_document: Box::new(noop),
            on_upload_document: Box::new(noop),
            on_rename: Box::new(noop),
            on_delete: Box::new(noop),
            on_close: Box::new(|| {
                *closes.borrow_mut() += 1;
                *open.borrow_mut() = false;
            }),
        };
        let menu = menu();
        menu.select("download-link", &mut actions);
        menu.dismiss(&mut actions);
        drop(actions);

        assert!(!*open.borrow());
        assert_eq!(*closes.borrow(), 2);
    }

    #[test]
    fn test_menu_exposes_inputs() {
        let menu = menu();
        assert_eq!(menu.position(), MenuPosition { x: 12.0, y: 34.0 });
        assert_eq!(menu.project_id(), "p1");
    }
}
