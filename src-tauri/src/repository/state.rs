//! Backend Connection State
//!
//! Holds the repository built from configuration, or the reason there is none.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Grocery};
use super::traits::Repository;

pub type GroceryRepository = Arc<dyn Repository<Grocery>>;

/// Backend state wrapper
pub struct BackendState {
    repo: DomainResult<GroceryRepository>,
}

impl BackendState {
    pub fn connected(repo: GroceryRepository) -> Self {
        Self { repo: Ok(repo) }
    }

    /// Every command will fail with `reason`
    pub fn unavailable(reason: DomainError) -> Self {
        Self { repo: Err(reason) }
    }

    /// Get the repository, or the reason it is missing
    pub fn repository(&self) -> DomainResult<GroceryRepository> {
        self.repo.clone()
    }
}
