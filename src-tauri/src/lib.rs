//! Grocery List Backend
//!
//! Layered architecture:
//! - domain: Core entities and errors
//! - repository: Data access abstraction and the Supabase implementation
//! - commands: Tauri command handlers
//! - config: Connection settings

use std::sync::Arc;
use tauri::Manager;

mod config;
mod domain;
mod repository;
mod commands;

use config::GroceryConfig;
use domain::Grocery;
use repository::{BackendState, SupabaseRepository};

/// Application state shared across commands
pub struct AppState {
    pub backend: BackendState,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let log_dir = app_handle.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "GroceryList") {
                eprintln!("[{}] Logger init failed: {}", chrono::Local::now().format("%H:%M:%S%.3f"), e);
            }

            let config_dir = app_handle.path().app_config_dir().ok();
            let backend = match GroceryConfig::load(config_dir.as_deref()) {
                Ok(config) => {
                    log::info!("Using table {} at {}", config.table, config.supabase_url);
                    let repo = SupabaseRepository::<Grocery>::from_config(reqwest::Client::new(), &config);
                    let _ = rolling_logger::info("Backend connected");
                    BackendState::connected(Arc::new(repo))
                }
                Err(e) => {
                    let _ = rolling_logger::error(&format!("Backend config failed: {}", e));
                    BackendState::unavailable(e)
                }
            };
            app.manage(AppState { backend });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_groceries,
            commands::add_grocery,
            commands::delete_grocery,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
