//! Grocery List Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod view_state;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
