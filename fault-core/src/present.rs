//! Presentation capability abstraction.
//!
//! The core never talks to a UI toolkit or log sink directly; hosts supply a
//! [`Presenter`] and [`StructuredError::show`](crate::StructuredError::show)
//! forwards the rendered text to it.

/// Title used when the caller passes an empty one.
pub const DEFAULT_TITLE: &str = "Error";

/// Shows a rendered error to a user or operator.
///
/// Implementations may block (e.g. until a modal is dismissed); callers get no
/// result back and impose no timeout.
pub trait Presenter {
    /// Present `body` under `title`.
    fn present(&self, title: &str, body: &str);
}

impl<F> Presenter for F
where
    F: Fn(&str, &str),
{
    fn present(&self, title: &str, body: &str) {
        self(title, body);
    }
}
