//! UI Components
//!
//! Leptos components for the grocery view.

mod grocery_form;
mod grocery_list;

pub use grocery_form::GroceryForm;
pub use grocery_list::GroceryList;
