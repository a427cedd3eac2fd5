//! Domain Layer
//!
//! Contains the grocery entity and core abstractions.
//! This layer has NO external dependencies (except serde and thiserror).

mod entity;
mod grocery;

pub use entity::{Entity, DomainError, DomainResult};
pub use grocery::{Grocery, NewGrocery};
