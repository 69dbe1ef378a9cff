//! # Atelier Web
//!
//! Single-page web client for the Atelier modeling studio.
//!
//! ## Architecture
//!
//! Route resolution, the navbar menu model and configuration live in
//! `atelier-core`; this crate wires them into Dioxus components. Every
//! routed view is rendered inside its own error boundary so a failing view
//! never takes the rest of the application down.
//!
//! ## Modules
//!
//! - [`components`] - Layout, error boundary and context menu
//! - [`router`] - Application routes
//! - [`state`] - Shared application state
//! - [`views`] - Page-level view components

use atelier_core::Config;
use dioxus::prelude::*;
use tracing::Level;

mod components;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");

    tracing::info!("Starting Atelier Web");

    let origin = option_env!("ATELIER_HTTP_ORIGIN").map(str::to_string);
    let config = Config::from_origin_var(origin).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid http origin, using default");
        Config::default()
    });

    let routes = match atelier_core::Router::studio() {
        Ok(routes) => routes,
        Err(e) => {
            tracing::error!(error = %e, "Invalid route table");
            return;
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(AppState::new(config, routes))
        .launch(App);
}

/// Root application component.
///
/// Loads the stylesheet and renders the router.
#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
