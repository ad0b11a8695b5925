//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised by the services.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    PostNotFound { id: i64 },

    #[error("Post {id} can only be updated by its creator")]
    PostNotUpdatable { id: i64 },

    #[error("Post {id} can only be deleted by its creator")]
    PostNotDeletable { id: i64 },

    #[error("Comment not found: {id}")]
    CommentNotFound { id: i64 },

    #[error("Comment {id} can only be updated by its creator")]
    CommentNotUpdatable { id: i64 },

    #[error("Comment {id} can only be deleted by its creator")]
    CommentNotDeletable { id: i64 },

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Counter store errors.
///
/// These never surface from the read path of the like counter - a failed
/// read is treated as a cache miss.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
