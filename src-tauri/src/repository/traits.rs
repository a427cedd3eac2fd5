//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! The hosted table only supports full reads, single inserts and deletes by id.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for the three table operations
///
/// Generic over any Entity type.
/// All operations are async; none are retried or timed out here.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities, in the order the backend returns them
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Insert one entity and return the stored row
    async fn create(&self, draft: &T::Draft) -> DomainResult<T>;

    /// Delete the entity whose ID matches exactly
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
