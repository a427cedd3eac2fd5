//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync + std::fmt::Display;

    /// Client-supplied fields of a not yet stored entity
    type Draft: Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Every failed list/insert/delete collapses into `RemoteOperationFailed`;
/// its message is the backend's raw payload, shown to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    RemoteOperationFailed(String),
    #[error("Backend not configured: {0}")]
    NotConfigured(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
