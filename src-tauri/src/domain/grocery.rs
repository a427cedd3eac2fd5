//! Grocery Entity
//!
//! One row of the hosted `Groceries` table.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use super::entity::Entity;

/// Price column value, kept exactly as the backend returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// A stored grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grocery {
    /// Assigned by the backend
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    /// Supabase's default timestamp column, when the table has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entity for Grocery {
    type Id = i64;
    type Draft = NewGrocery;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Insert payload: the raw input values, never coerced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGrocery {
    pub name: String,
    pub price: String,
}

impl NewGrocery {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into() }
    }
}
