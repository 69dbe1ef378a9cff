//! # Views
//!
//! Page-level view components for the Atelier web client.
//!
//! - [`ProjectsView`] - Project list and entry points
//! - [`NewProjectView`] - Create project form
//! - [`UploadProjectView`] - Upload project form
//! - [`EditProjectView`] - Project editor with its navbar menu

mod edit_project;
mod new_project;
mod projects;
mod upload_project;

pub use edit_project::EditProjectView;
pub use new_project::NewProjectView;
pub use projects::ProjectsView;
pub use upload_project::UploadProjectView;
