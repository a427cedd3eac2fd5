//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;

use crate::view_state::Followup;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload groceries from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload groceries from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Draft inputs; uncontrolled, only cleared on refresh
    pub name_input: NodeRef<html::Input>,
    pub price_input: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        inputs: (NodeRef<html::Input>, NodeRef<html::Input>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            name_input: inputs.0,
            price_input: inputs.1,
        }
    }

    /// Trigger a reload of groceries
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Empty both inputs, as on a fresh page
    fn clear_inputs(&self) {
        for input in [self.name_input, self.price_input] {
            if let Some(el) = input.get_untracked() {
                el.set_value("");
            }
        }
    }

    /// Carry out what a finished backend call asks for
    pub fn follow(&self, followup: Followup) {
        match followup {
            Followup::None => {}
            Followup::Refresh => {
                self.clear_inputs();
                self.reload();
            }
            Followup::Alert(message) => alert(&message),
        }
    }
}

/// Blocking browser notification
fn alert(message: &str) {
    web_sys::console::log_1(&format!("[APP] Backend error: {}", message).into());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
