use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueError {
    /// The requested issue does not exist on the remote store.
    #[error("Issue not found: {0}")]
    NotFound(String),

    /// A mutation was attempted by an identity that does not own the issue.
    #[error("Issue '{id}' is not owned by '{email}'")]
    NotOwned { id: String, email: String },

    /// The record returned by the store could not be interpreted.
    #[error("Invalid issue data: {0}")]
    InvalidData(String),
}
