//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use guestbook_client::{ClientConfig, HttpGuestbookApi};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload entries from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload entries from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Guestbook API endpoint
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ClientConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of entries
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// HTTP client for the configured endpoint
    pub fn api(&self) -> HttpGuestbookApi {
        self.config.with_value(|config| HttpGuestbookApi::new(config.clone()))
    }
}

/// Get the app context, panicking if the `App` root did not provide it
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
