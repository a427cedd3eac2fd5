//! Grocery List App
//!
//! Single view: add form on top, stored groceries below.

use leptos::prelude::*;
use leptos::html;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::components::{GroceryForm, GroceryList};
use crate::store::{AppState, AppStore};
use crate::view_state::Outcome;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: AppStore = AppStore::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let name_input = NodeRef::<html::Input>::new();
    let price_input = NodeRef::<html::Input>::new();

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (name_input, price_input));
    provide_context(ctx);

    // Load groceries on mount and after every successful mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading groceries, trigger={}", trigger).into());
        store.update(|state| state.begin_reload(trigger));
        spawn_local(async move {
            let outcome = Outcome::from_list(trigger, commands::list_groceries().await);
            if let Outcome::Listed { groceries, .. } = &outcome {
                web_sys::console::log_1(&format!("[APP] Loaded {} groceries", groceries.len()).into());
            }
            if let Some(followup) = store.try_update(|state| state.apply(outcome)) {
                ctx.follow(followup);
            }
        });
    });

    view! {
        <main class="main-content">
            <h1>"Grocery List"</h1>
            <GroceryForm />
            <GroceryList />
        </main>
    }
}
