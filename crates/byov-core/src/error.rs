//! Error types shared by the services and the store adapters.

use thiserror::Error;

/// Why a service call was refused or could not complete.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Duplicate(String),

    #[error("Sign in required")]
    Unauthorized,

    #[error("Only the author may modify this verse")]
    Forbidden,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Failures reported by a document store.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    /// The addressed document does not exist.
    #[error("Document not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
