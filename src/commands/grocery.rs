//! Grocery Commands
//!
//! Frontend bindings for the grocery table commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Grocery;
use super::{invoke, js_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddGroceryArgs<'a> {
    name: &'a str,
    price: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

// ========================
// Commands
// ========================

pub async fn list_groceries() -> Result<Vec<Grocery>, String> {
    let result = invoke("list_groceries", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Insert one row; `price` is the raw input value
pub async fn add_grocery(name: &str, price: &str) -> Result<Grocery, String> {
    let js_args = serde_wasm_bindgen::to_value(&AddGroceryArgs { name, price }).map_err(|e| e.to_string())?;
    let result = invoke("add_grocery", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_grocery(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_grocery", js_args).await.map_err(js_error)?;
    Ok(())
}
