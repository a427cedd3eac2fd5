//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Grocery;

/// Price sent when the price input was never touched
pub const DEFAULT_PRICE: &str = "0";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Groceries as last returned by the backend
    pub groceries: Vec<Grocery>,
    /// Name input, sent as-is
    pub name: String,
    /// Price input, sent as-is (never parsed here)
    pub price: String,
    /// Reload whose listing may still replace `groceries`
    pub generation: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            groceries: Vec::new(),
            name: String::new(),
            price: DEFAULT_PRICE.to_string(),
            generation: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listings from any earlier reload are dropped from now on
    pub fn begin_reload(&mut self, generation: u32) {
        self.generation = generation;
    }

    /// Reset the input draft to its initial values
    pub fn reset_draft(&mut self) {
        self.name.clear();
        self.price = DEFAULT_PRICE.to_string();
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
