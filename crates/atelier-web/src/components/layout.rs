//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;

use crate::router::Route;

/// Main layout wrapper component.
///
/// Provides the application header. All routed views are rendered inside
/// the main content area via `Outlet`.
#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "app-layout",

            header {
                class: "app-header",

                Link {
                    to: Route::Projects {},
                    class: "brand",
                    "Atelier"
                }
            }

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}
