//! Grocery Form Component
//!
//! Name and price inputs plus the add action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_state::Outcome;

/// Form for adding a grocery; whatever the inputs hold is sent unchanged
///
/// The inputs are not bound to the store, so a half-typed number is never
/// overwritten by the value the browser reports for it.
#[component]
pub fn GroceryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let add_grocery = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = store.name().get_untracked();
        let price = store.price().get_untracked();

        spawn_local(async move {
            let outcome = Outcome::from_mutation(commands::add_grocery(&name, &price).await);
            if let Some(followup) = store.try_update(|state| state.apply(outcome)) {
                ctx.follow(followup);
            }
        });
    };

    view! {
        <form class="grocery-form" on:submit=add_grocery>
            <label>"Name"</label>
            <input
                type="text"
                node_ref=ctx.name_input
                on:input=move |ev| store.name().set(event_target_value(&ev))
            />
            <label>"Price"</label>
            <input
                type="number"
                node_ref=ctx.price_input
                on:input=move |ev| store.price().set(event_target_value(&ev))
            />
            <button type="submit">"Add Grocery"</button>
        </form>
    }
}
