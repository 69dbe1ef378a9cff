//! # Error Boundary
//!
//! Contains render failures at the granularity of one routed view.
//!
//! A view renderer either returns its output or fails, by returning a
//! [`RenderError`] or by panicking. The boundary turns both into a
//! [`Rendered::Fallback`] so the caller can show an error in place of that
//! view while every other route keeps working.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::error::RenderError;
use crate::router::{View, ViewKind};

/// Something that can render a routed view.
pub trait ViewRenderer {
    /// What a successful render produces.
    type Output;

    /// Renders `view`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the view cannot be rendered.
    fn render(&mut self, view: &View) -> Result<Self::Output, RenderError>;
}

impl<F, T> ViewRenderer for F
where
    F: FnMut(&View) -> Result<T, RenderError>,
{
    type Output = T;

    fn render(&mut self, view: &View) -> Result<T, RenderError> {
        self(view)
    }
}

/// Substitute shown in place of a failed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Handler that failed.
    pub view: ViewKind,
    /// What went wrong.
    pub error: RenderError,
}

impl Fallback {
    /// User-facing message for the error panel.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} could not be displayed: {}", self.view, self.error)
    }
}

/// Per-view render outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<T> {
    /// The view rendered normally.
    View(T),
    /// The view failed and was replaced by an error state.
    Fallback(Fallback),
}

impl<T> Rendered<T> {
    /// Returns `true` if the view failed.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Converts into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`Fallback`] if the view failed.
    pub fn into_result(self) -> Result<T, Fallback> {
        match self {
            Self::View(output) => Ok(output),
            Self::Fallback(fallback) => Err(fallback),
        }
    }
}

/// Wraps view renders so a failure stays inside the failing view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorBoundary;

impl ErrorBoundary {
    /// Renders `view` through `renderer`, containing errors and panics.
    pub fn render<R>(&self, view: &View, renderer: &mut R) -> Rendered<R::Output>
    where
        R: ViewRenderer + ?Sized,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(view)));
        let error = match outcome {
            Ok(Ok(output)) => return Rendered::View(output),
            Ok(Err(error)) => error,
            Err(payload) => RenderError::Panicked(panic_message(payload.as_ref())),
        };

        tracing::warn!(view = %view.kind(), error = %error, "Contained view render failure");
        Rendered::Fallback(Fallback {
            view: view.kind(),
            error,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
