//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the hosted table.

mod grocery_cmd;

pub use grocery_cmd::*;
