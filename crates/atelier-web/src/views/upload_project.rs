//! # Upload Project View
//!
//! Entry point for uploading a project archive.

use dioxus::prelude::*;

use crate::router::Route;

/// Upload project view component.
#[component]
pub fn UploadProjectView() -> Element {
    rsx! {
        div {
            class: "upload-project-view",

            Link {
                to: Route::Projects {},
                class: "back-link",
                "← Back to all projects"
            }

            h2 { class: "mb-lg", "Upload a project" }
        }
    }
}
