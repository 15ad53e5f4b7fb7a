use super::todo::TodoId;

/// Error kinds shared by the repository and service layers.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("TodoItem with id {0} was not found.")]
    NotFound(TodoId),
    /// Connection, query or migration failure. Never retried.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
