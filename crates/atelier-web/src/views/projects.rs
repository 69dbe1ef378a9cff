//! # Projects View
//!
//! Landing page and redirect target for unknown locations.

use atelier_core::View;
use dioxus::prelude::*;

use crate::router::Route;

/// Projects view component.
///
/// Links to the create and upload forms, and opens a project in the
/// editor by identifier.
#[component]
pub fn ProjectsView() -> Element {
    let navigator = use_navigator();
    let mut project_input = use_signal(String::new);

    let on_open = move |evt: Event<FormData>| {
        evt.prevent_default();

        let project_id = project_input.read().trim().to_string();
        if project_id.is_empty() {
            return;
        }

        navigator.push(Route::from(View::EditProject {
            project_id,
            representation_id: None,
        }));
    };

    rsx! {
        div {
            class: "projects-view",

            div {
                class: "projects-header",

                h2 { "Projects" }

                div {
                    class: "btn-group",

                    Link {
                        to: Route::NewProject {},
                        class: "btn-primary",
                        "+ New Project"
                    }

                    Link {
                        to: Route::UploadProject {},
                        class: "btn-glass",
                        "Upload Project"
                    }
                }
            }

            form {
                class: "open-project-form glass-panel-static",
                onsubmit: on_open,

                div {
                    class: "form-field mb-md",

                    label { r#for: "project-id", "Project" }
                    input {
                        id: "project-id",
                        r#type: "text",
                        value: "{project_input}",
                        placeholder: "Project identifier",
                        oninput: move |evt| project_input.set(evt.value()),
                    }
                }

                button {
                    class: "btn-primary",
                    r#type: "submit",
                    "Open"
                }
            }
        }
    }
}
