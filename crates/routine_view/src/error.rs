//! Error types for the routine view.

use routine_client::RoutineApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// One of the three bulk fetches failed; no view is produced.
    #[error("failed to load routines: {0}")]
    FetchFailure(#[source] RoutineApiError),

    /// The delete request failed; local collections are untouched.
    #[error("failed to delete routine {id}: {source}")]
    DeleteFailure {
        id: String,
        #[source]
        source: RoutineApiError,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
