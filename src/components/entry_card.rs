//! Entry Card Component
//!
//! One rendered entry with its edit and delete controls.

use leptos::prelude::*;

use guestbook_client::{entry_html, Action, Entry, Flight};

use crate::store::{store_open_confirm, use_app_store, AppStateStoreFields};

#[component]
pub fn EntryCard(entry: Entry) -> impl IntoView {
    let store = use_app_store();

    let id = entry.id;
    // Title, author and body are escaped; the timestamp is not
    let rendered_html = entry_html(&entry);
    let deleting = move || store.in_flight().read().contains(Flight::Delete(id));

    view! {
        <div class="guestbook-entry" data-id=id.to_string()>
            <div class="entry-view" inner_html=rendered_html></div>
            <div class="entry-actions">
                <button
                    class="edit-btn"
                    on:click=move |_| {
                        store_open_confirm(&store, id, Action::Edit);
                    }
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    disabled=deleting
                    on:click=move |_| {
                        store_open_confirm(&store, id, Action::Delete);
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
