//! Guestbook Frontend App
//!
//! Root component: entry form, entry list and the two modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use guestbook_client::{reload, ClientConfig};

use crate::browser;
use crate::components::{EditModal, EntryList, GuestbookForm, PasswordModal};
use crate::context::AppContext;
use crate::store::{store_replace_entries, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::resolve(browser::meta_api_url().as_deref());
    log::info!("guestbook endpoint: {}", config.base_url());

    let ctx = AppContext::new(signal(0u32), config);
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load entries on mount and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading entries, trigger={}", trigger);
        spawn_local(async move {
            if let Some(entries) = reload(&ctx.api()).await {
                store_replace_entries(&store, entries);
            }
        });
    });

    view! {
        <main class="guestbook">
            <h1>"Guestbook"</h1>

            <GuestbookForm />

            <EntryList />

            <PasswordModal />
            <EditModal />
        </main>
    }
}
