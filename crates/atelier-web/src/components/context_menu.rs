//! # Navbar Context Menu
//!
//! Project actions menu opened from the editor navbar.

use atelier_core::{MenuAction, MenuEntry, MenuIcon, MenuPosition, MENU_TEST_ID};
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Navbar context menu component.
///
/// Renders the entries of [`atelier_core::ContextMenu`] anchored at
/// `(x, y)` and relays clicks to the supplied handlers. The menu keeps no
/// state: whether it is open is up to the parent.
///
/// # Props
///
/// * `x`, `y` - Anchor position in page coordinates
/// * `project_id` - The project the actions apply to
/// * `on_create_document` .. `on_delete` - Action handlers
/// * `on_close` - Called on dismissal and when "Download" is clicked
#[component]
pub fn NavbarContextMenu(
    x: f64,
    y: f64,
    project_id: String,
    on_create_document: EventHandler,
    on_upload_document: EventHandler,
    on_rename: EventHandler,
    on_delete: EventHandler,
    on_close: EventHandler,
) -> Element {
    let state = use_context::<AppState>();
    let menu = state.context_menu(MenuPosition::new(x, y), &project_id);

    let handler = move |action: MenuAction| match action {
        MenuAction::CreateDocument => on_create_document,
        MenuAction::UploadDocument => on_upload_document,
        MenuAction::Rename => on_rename,
        MenuAction::Delete => on_delete,
        MenuAction::Close => on_close,
    };

    rsx! {
        div {
            class: "context-menu-backdrop",
            tabindex: "-1",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!(error = ?e, "Could not focus context menu");
                }
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "context-menu caret-top-start",
                "data-testid": MENU_TEST_ID,
                style: "left: {x}px; top: {y}px;",
                onclick: move |evt| evt.stop_propagation(),

                for entry in menu.entries() {
                    match entry {
                        MenuEntry::Action { id, label, icon, action } => rsx! {
                            div {
                                class: "entry",
                                "data-testid": id,
                                onclick: move |_| handler(action).call(()),

                                if let Some(icon) = icon {
                                    EntryIcon { icon }
                                }
                                span { "{label}" }
                            }
                        },
                        MenuEntry::Separator => rsx! {
                            div { class: "separator" }
                        },
                        MenuEntry::Download { link_id, id, label, href, mime_type } => rsx! {
                            a {
                                href: "{href}",
                                r#type: mime_type,
                                "data-testid": link_id,
                                onclick: move |_| on_close.call(()),

                                div {
                                    class: "entry",
                                    "data-testid": id,
                                    span { "{label}" }
                                }
                            }
                        },
                        MenuEntry::Navigate { link_id, id, label, to } => rsx! {
                            span {
                                "data-testid": link_id,

                                Link {
                                    to: Route::from(state.view_at(to)),

                                    div {
                                        class: "entry",
                                        "data-testid": id,
                                        span { "{label}" }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn EntryIcon(icon: MenuIcon) -> Element {
    let (class, glyph) = match icon {
        MenuIcon::Edit => ("icon icon-edit", "✎"),
        MenuIcon::Delete => ("icon icon-delete", "🗑"),
    };

    rsx! {
        span { class: "{class}", aria_hidden: "true", "{glyph}" }
    }
}
