//! Grocery List Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::Grocery;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_state::Outcome;

/// One `<li>` per grocery, in the order the backend returned them
#[component]
pub fn GroceryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let delete_grocery = move |id: i64| {
        spawn_local(async move {
            let outcome = Outcome::from_mutation(commands::delete_grocery(id).await);
            if let Some(followup) = store.try_update(|state| state.apply(outcome)) {
                ctx.follow(followup);
            }
        });
    };

    view! {
        <ul class="grocery-list">
            <For
                each=move || store.groceries().get()
                key=Grocery::row_key
                children=move |grocery: Grocery| {
                    let id = grocery.id;
                    view! {
                        <li>
                            {grocery.label()}
                            <button class="delete-btn" on:click=move |_| delete_grocery(id)>
                                "Delete"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
