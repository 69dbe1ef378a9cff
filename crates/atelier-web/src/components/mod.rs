//! # UI Components
//!
//! Reusable UI components for the Atelier web client.
//!
//! This module provides:
//! - [`Layout`] - Main application layout wrapper
//! - [`Guarded`] - Per-route error boundary
//! - [`NavbarContextMenu`] - Project actions menu of the editor navbar

mod context_menu;
mod guarded;
mod layout;

pub use context_menu::NavbarContextMenu;
pub use guarded::Guarded;
pub use layout::Layout;
