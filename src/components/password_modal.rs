//! Password Modal Component
//!
//! Confirms the entry password before an edit or delete goes ahead.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use guestbook_client::{begin_edit, delete_entry, verify, Action, Flight, Verification};

use crate::browser::BrowserFeedback;
use crate::context::use_app_context;
use crate::store::{
    store_begin_flight, store_begin_verify, store_close_modals, store_finish_flight, store_is_current,
    store_settle_verify, use_app_store, AppStateStoreFields,
};

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
pub fn PasswordModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (password, set_password) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let action = Memo::new(move |_| store.confirm().read().pending().map(|p| p.action));
    let serial = Memo::new(move |_| store.confirm().read().pending().map(|p| p.serial));
    let verifying = move || store.confirm().read().is_verifying();

    let focus_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // Empty, focused field for every new invocation
    Effect::new(move |_| {
        if serial.get().is_some() {
            set_password.set(String::new());
            focus_input();
        }
    });

    let confirm = move |_| {
        let Some(pending) = store_begin_verify(&store) else {
            return;
        };
        let entered = password.get_untracked();

        spawn_local(async move {
            let api = ctx.api();
            let verification = verify(&api, &BrowserFeedback, pending, &entered).await;
            store_settle_verify(&store, pending, verification.is_granted());

            match verification {
                Verification::Granted(grant) => match grant.pending.action {
                    Action::Delete => {
                        let entry_id = grant.pending.entry_id;
                        if !store_begin_flight(&store, Flight::Delete(entry_id)) {
                            return;
                        }
                        let outcome = delete_entry(&api, &BrowserFeedback, entry_id, &grant.password).await;
                        store_finish_flight(&store, Flight::Delete(entry_id));
                        if outcome.needs_reload() {
                            ctx.reload();
                        }
                    }
                    Action::Edit => {
                        let draft = begin_edit(&store.entries().read_untracked(), &BrowserFeedback, &grant);
                        match draft {
                            Some(draft) => *store.editing().write() = Some(draft),
                            None => ctx.reload(),
                        }
                    }
                },
                Verification::Denied => {
                    if store_is_current(&store, pending) {
                        set_password.set(String::new());
                        focus_input();
                    }
                }
                Verification::Failed => {}
            }
        });
    };

    view! {
        <div id="passwordModal" class="modal" style:display=move || display(action.get().is_some())>
            <div class="modal-content">
                <span class="close" on:click=move |_| store_close_modals(&store)>"×"</span>
                <h2>"Enter password"</h2>
                <input
                    type="password"
                    id="confirmPassword"
                    node_ref=input_ref
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <div class="modal-buttons">
                    <button
                        id="confirmDelete"
                        class="danger"
                        style:display=move || display(action.get() == Some(Action::Delete))
                        disabled=verifying
                        on:click=confirm
                    >
                        "Delete"
                    </button>
                    <button
                        id="confirmEdit"
                        style:display=move || display(action.get() == Some(Action::Edit))
                        disabled=verifying
                        on:click=confirm
                    >
                        "Edit"
                    </button>
                    <button id="cancelModal" on:click=move |_| store_close_modals(&store)>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}
