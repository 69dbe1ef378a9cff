//! # Guarded Component
//!
//! Error boundary wrapped around each routed view.

use atelier_core::{Fallback, RenderError, ViewKind};
use dioxus::prelude::*;

use crate::router::Route;

/// Renders `children`, replacing them with an error panel if they fail.
///
/// The panel only replaces this view; the layout and the router keep
/// working, and the next navigation mounts a fresh boundary.
///
/// # Props
///
/// * `view` - The view being guarded, named in the error panel
/// * `children` - The view itself
#[component]
pub fn Guarded(view: ViewKind, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let fallback = fallback_for(view, &errors);
                let message = fallback.message();
                tracing::warn!(
                    view = %view,
                    error = %fallback.error,
                    "Contained view render failure"
                );
                rsx! {
                    div {
                        class: "alert alert-error view-error",
                        role: "alert",

                        h2 { "Something went wrong" }
                        p { "{message}" }

                        Link {
                            to: Route::Projects {},
                            class: "back-link",
                            "Back to all projects"
                        }
                    }
                }
            },

            {children}
        }
    }
}

/// Builds the panel contents from the captured error.
///
/// A view that failed with a [`RenderError`] keeps it; anything else is
/// reported by its message.
fn fallback_for(view: ViewKind, errors: &ErrorContext) -> Fallback {
    let error = match errors.error() {
        Some(captured) => captured
            .downcast_ref::<RenderError>()
            .cloned()
            .unwrap_or_else(|| RenderError::Failed(captured.to_string())),
        None => RenderError::Failed("unknown error".to_string()),
    };
    Fallback { view, error }
}
