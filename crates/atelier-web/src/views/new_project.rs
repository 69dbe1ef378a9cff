//! # New Project View
//!
//! Entry point for creating a project.

use dioxus::prelude::*;

use crate::router::Route;

/// Create project view component.
#[component]
pub fn NewProjectView() -> Element {
    rsx! {
        div {
            class: "new-project-view",

            Link {
                to: Route::Projects {},
                class: "back-link",
                "← Back to all projects"
            }

            h2 { class: "mb-lg", "Create a new project" }
        }
    }
}
