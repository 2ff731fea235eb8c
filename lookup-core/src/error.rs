use thiserror::Error;

/// Errors surfaced by the lookup widget.
///
/// The display strings are exactly what the user sees; the underlying cause
/// of a fetch failure is carried for the diagnostic log only.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Please enter a location")]
    EmptyQuery,

    #[error("Please select a sorting option")]
    NoSortKey,

    #[error("Error fetching data. Please try again.")]
    Fetch(anyhow::Error),
}
