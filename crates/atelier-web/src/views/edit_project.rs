//! # Edit Project View
//!
//! Project editor with the navbar context menu.

use atelier_core::{MenuPosition, RenderError, PROJECT_ID_PARAM};
use dioxus::prelude::*;

use crate::components::NavbarContextMenu;
use crate::router::Route;

/// Edit project view component.
///
/// Rejects an empty `project_id`; the failure is contained by the
/// surrounding error boundary.
///
/// # Props
///
/// * `project_id` - The project being edited
/// * `representation_id` - The representation to open, if any
#[component]
pub fn EditProjectView(project_id: String, representation_id: Option<String>) -> Element {
    let mut menu_position = use_signal(|| Option::<MenuPosition>::None);
    let mut last_action = use_signal(|| Option::<&'static str>::None);

    if project_id.trim().is_empty() {
        return Err(RenderError::InvalidParameter {
            name: PROJECT_ID_PARAM.to_string(),
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    let mut choose = move |action: &'static str| {
        tracing::debug!(action, "Navbar action chosen");
        last_action.set(Some(action));
        menu_position.set(None);
    };

    let on_more = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        menu_position.set(Some(MenuPosition::new(point.x, point.y)));
    };

    rsx! {
        div {
            class: "edit-project-view",

            nav {
                class: "edit-project-navbar",

                Link {
                    to: Route::Projects {},
                    class: "back-link",
                    "← Projects"
                }

                h2 { class: "mono", "{project_id}" }

                button {
                    class: "btn-sm btn-ghost",
                    "data-testid": "more",
                    onclick: on_more,
                    "⋮"
                }
            }

            if let Some(position) = *menu_position.read() {
                NavbarContextMenu {
                    x: position.x,
                    y: position.y,
                    project_id: project_id.clone(),
                    on_create_document: move |_| choose("create-document"),
                    on_upload_document: move |_| choose("upload-document"),
                    on_rename: move |_| choose("rename"),
                    on_delete: move |_| choose("delete"),
                    on_close: move |_| menu_position.set(None),
                }
            }

            div {
                class: "editor-body",

                match &representation_id {
                    Some(representation_id) => rsx! {
                        p { "Representation: {representation_id}" }
                    },
                    None => rsx! {
                        p { class: "text-secondary", "Select a representation to open it." }
                    },
                }

                if let Some(action) = *last_action.read() {
                    div {
                        class: "alert alert-info",
                        "Requested: {action}"
                    }
                }
            }
        }
    }
}
