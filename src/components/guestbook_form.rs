//! Guestbook Form Component
//!
//! Form for posting a new entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use guestbook_client::{create_entry, EntryForm, Flight};

use crate::browser::BrowserFeedback;
use crate::context::use_app_context;
use crate::store::{store_begin_flight, store_finish_flight, use_app_store, AppStateStoreFields};

/// Form for creating new entries
#[component]
pub fn GuestbookForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_author.set(String::new());
        set_body.set(String::new());
        set_password.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store_begin_flight(&store, Flight::Create) {
            log::debug!("create already in flight, ignoring submit");
            return;
        }

        let form = EntryForm {
            title: title.get_untracked(),
            author: author.get_untracked(),
            body: body.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            let outcome = create_entry(&ctx.api(), &BrowserFeedback, &form).await;
            store_finish_flight(&store, Flight::Create);
            // Reset after any attempt, successful or not
            if outcome.attempted() {
                reset();
            }
            if outcome.needs_reload() {
                ctx.reload();
            }
        });
    };

    let submitting = move || store.in_flight().read().contains(Flight::Create);

    view! {
        <form id="guestbookForm" class="guestbook-form" on:submit=submit>
            <div class="form-row">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label for="author">"Author"</label>
                <input
                    type="text"
                    id="author"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <label for="content">"Message"</label>
                <textarea
                    id="content"
                    rows="4"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="form-row">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=submitting>"Post"</button>
        </form>
    }
}
