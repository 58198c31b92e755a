use thiserror::Error;

use crate::api::ApiError;

/// A failed view operation, tagged with the action that failed.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Initial or refresh load. The last known list is kept.
    #[error("Failed to fetch posts: {0}")]
    Fetch(#[source] ApiError),

    /// Create or update. The modal stays open with the draft intact.
    #[error("Failed to save post: {0}")]
    Submit(#[source] ApiError),

    #[error("Failed to delete post: {0}")]
    Delete(#[source] ApiError),

    #[error("Failed to publish post: {0}")]
    Publish(#[source] ApiError),
}

impl OperationError {
    /// User-facing message. Carries no error detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            OperationError::Fetch(_) => "Failed to fetch posts.",
            OperationError::Submit(_) => "Failed to save post.",
            OperationError::Delete(_) => "Failed to delete post.",
            OperationError::Publish(_) => "Failed to publish post.",
        }
    }

    /// Technical details for the log.
    pub fn details(&self) -> String {
        match self {
            OperationError::Fetch(e)
            | OperationError::Submit(e)
            | OperationError::Delete(e)
            | OperationError::Publish(e) => e.to_string(),
        }
    }
}
