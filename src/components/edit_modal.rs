//! Edit Modal Component
//!
//! Edit form for an entry whose password has been verified.

use leptos::prelude::*;
use leptos::task::spawn_local;

use guestbook_client::{update_entry, EditDraft, EditForm, Flight};

use crate::browser::BrowserFeedback;
use crate::context::use_app_context;
use crate::store::{store_begin_flight, store_close_modals, store_finish_flight, use_app_store, AppStateStoreFields};

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (body, set_body) = signal(String::new());

    let draft = Memo::new(move |_| store.editing().get());

    // Pre-fill from the draft whenever a new one is opened
    Effect::new(move |_| {
        if let Some(EditDraft { form, .. }) = draft.get() {
            set_title.set(form.title);
            set_author.set(form.author);
            set_body.set(form.body);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = draft.get_untracked() else {
            return;
        };
        let flight = Flight::Update(current.entry_id);
        if !store_begin_flight(&store, flight) {
            return;
        }

        let edited = EditDraft {
            entry_id: current.entry_id,
            form: EditForm {
                title: title.get_untracked(),
                author: author.get_untracked(),
                body: body.get_untracked(),
            },
        };

        spawn_local(async move {
            let outcome = update_entry(&ctx.api(), &BrowserFeedback, &edited).await;
            store_finish_flight(&store, flight);
            // Closed after any attempt; a blank field keeps it open
            if outcome.attempted() {
                *store.editing().write() = None;
            }
            if outcome.needs_reload() {
                ctx.reload();
            }
        });
    };

    let saving = move || {
        draft
            .get()
            .is_some_and(|d| store.in_flight().read().contains(Flight::Update(d.entry_id)))
    };

    view! {
        <div id="editModal" class="modal" style:display=move || if draft.get().is_some() { "block" } else { "none" }>
            <div class="modal-content">
                <span class="close" on:click=move |_| store_close_modals(&store)>"×"</span>
                <h2>"Edit entry"</h2>
                <form id="editForm" on:submit=submit>
                    <div class="form-row">
                        <label for="editTitle">"Title"</label>
                        <input
                            type="text"
                            id="editTitle"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="editAuthor">"Author"</label>
                        <input
                            type="text"
                            id="editAuthor"
                            prop:value=move || author.get()
                            on:input=move |ev| set_author.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <label for="editContent">"Message"</label>
                        <textarea
                            id="editContent"
                            rows="4"
                            prop:value=move || body.get()
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" disabled=saving>"Save"</button>
                        <button type="button" id="cancelEdit" on:click=move |_| store_close_modals(&store)>"Cancel"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
