//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Price as stored by the backend, rendered verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
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

/// Grocery data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grocery {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Grocery {
    /// List row text, `name - $price`
    pub fn label(&self) -> String {
        let price = self.price.as_ref().map(|p| p.to_string()).unwrap_or_default();
        format!("{} - ${}", self.name, price)
    }

    /// List key; includes the rendered fields so an edited row re-renders
    pub fn row_key(&self) -> (i64, String) {
        (self.id, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grocery(id: i64, name: &str, price: Option<Price>) -> Grocery {
        Grocery { id, name: name.to_string(), price, created_at: None }
    }

    #[test]
    fn test_label_keeps_number_formatting() {
        assert_eq!(grocery(1, "Milk", Some(Price::Number(2.5))).label(), "Milk - $2.5");
        assert_eq!(grocery(2, "Eggs", Some(Price::Number(3.0))).label(), "Eggs - $3");
    }

    #[test]
    fn test_label_text_and_missing_price() {
        assert_eq!(grocery(1, "Bread", Some(Price::Text("1.99".into()))).label(), "Bread - $1.99");
        assert_eq!(grocery(2, "Salt", None).label(), "Salt - $");
    }

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{"id":7,"name":"Milk","price":2.5,"created_at":"2024-01-01T00:00:00+00:00"}"#;
        let g: Grocery = serde_json::from_str(json).unwrap();
        assert_eq!(g.id, 7);
        assert_eq!(g.price, Some(Price::Number(2.5)));

        let sparse: Grocery = serde_json::from_str(r#"{"id":8,"name":null,"price":null}"#).unwrap();
        assert_eq!(sparse.name, "");
        assert_eq!(sparse.price, None);
    }

    #[test]
    fn test_row_key_changes_with_fields() {
        let before = grocery(7, "Milk", Some(Price::Number(2.5)));
        let repriced = grocery(7, "Milk", Some(Price::Number(2.75)));
        let renamed = grocery(7, "Oat milk", Some(Price::Number(2.5)));

        assert_eq!(before.row_key(), before.clone().row_key());
        assert_ne!(before.row_key(), repriced.row_key());
        assert_ne!(before.row_key(), renamed.row_key());
    }
}
