//! Entry List Component

use leptos::prelude::*;

use guestbook_client::messages;

use crate::components::EntryCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// All entries from the last fetch, in server order
#[component]
pub fn EntryList() -> impl IntoView {
    let store = use_app_store();

    let entries = move || store.entries().read().entries().to_vec();
    let is_empty = move || store.entries().read().is_empty();

    view! {
        <div id="guestbookEntries" class="guestbook-entries">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="no-entries">{messages::NO_ENTRIES}</p> }
            >
                <For
                    each=entries
                    // Every displayed field, so an edited entry re-renders
                    key=|entry| (
                        entry.id,
                        entry.title.clone(),
                        entry.author.clone(),
                        entry.body.clone(),
                        entry.created.clone(),
                    )
                    children=|entry| view! { <EntryCard entry=entry /> }
                />
            </Show>
        </div>
    }
}
