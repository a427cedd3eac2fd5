//! Tauri Commands for Grocery CRUD
//!
//! Exposes the three table operations to the frontend via Tauri IPC.
//! Errors are sent back as their raw text; the frontend shows them as-is.

use tauri::State;

use crate::domain::{Grocery, NewGrocery};
use crate::repository::Repository;
use crate::AppState;

/// List every grocery in backend order
#[tauri::command]
pub async fn list_groceries(state: State<'_, AppState>) -> Result<Vec<Grocery>, String> {
    let repo = state.backend.repository().map_err(|e| e.to_string())?;
    match repo.list().await {
        Ok(groceries) => {
            log::info!("Listed {} groceries", groceries.len());
            Ok(groceries)
        }
        Err(e) => {
            log::error!("List groceries failed: {}", e);
            Err(e.to_string())
        }
    }
}

/// Insert one grocery; `price` is forwarded exactly as typed
#[tauri::command]
pub async fn add_grocery(
    state: State<'_, AppState>,
    name: String,
    price: String,
) -> Result<Grocery, String> {
    let repo = state.backend.repository().map_err(|e| e.to_string())?;
    match repo.create(&NewGrocery::new(name, price)).await {
        Ok(created) => {
            log::info!("Added grocery {}", created.id);
            Ok(created)
        }
        Err(e) => {
            log::error!("Add grocery failed: {}", e);
            Err(e.to_string())
        }
    }
}

/// Delete the grocery with exactly this id
#[tauri::command]
pub async fn delete_grocery(state: State<'_, AppState>, id: i64) -> Result<(), String> {
    let repo = state.backend.repository().map_err(|e| e.to_string())?;
    match repo.delete(id).await {
        Ok(()) => {
            log::info!("Deleted grocery {}", id);
            Ok(())
        }
        Err(e) => {
            log::error!("Delete grocery {} failed: {}", id, e);
            Err(e.to_string())
        }
    }
}
