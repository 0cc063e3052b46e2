//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use guestbook_client::{Action, ConfirmState, EditDraft, Entry, EntryStore, Flight, InFlight, PendingAction};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched from the server
    pub entries: EntryStore,
    /// Password modal
    pub confirm: ConfirmState,
    /// Edit modal, open when `Some`
    pub editing: Option<EditDraft>,
    /// Requests that must not be re-triggered until they settle
    pub in_flight: InFlight,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the entry list with a fresh fetch
pub fn store_replace_entries(store: &AppStore, entries: Vec<Entry>) {
    store.entries().write().replace(entries);
}

/// Open the password modal for an entry, replacing any pending action
pub fn store_open_confirm(store: &AppStore, entry_id: u32, action: Action) -> PendingAction {
    store.confirm().write().open(entry_id, action)
}

/// Start verifying the pending action, if one is open and idle
pub fn store_begin_verify(store: &AppStore) -> Option<PendingAction> {
    store.confirm().write().begin_verify()
}

pub fn store_settle_verify(store: &AppStore, pending: PendingAction, granted: bool) {
    store.confirm().write().settle(pending, granted);
}

/// Whether `pending` is still the modal being shown
pub fn store_is_current(store: &AppStore, pending: PendingAction) -> bool {
    store.confirm().read_untracked().pending() == Some(pending)
}

/// Close both modals
pub fn store_close_modals(store: &AppStore) {
    store.confirm().write().close();
    *store.editing().write() = None;
}

/// Mark a request as started; `false` if it is already running
pub fn store_begin_flight(store: &AppStore, flight: Flight) -> bool {
    store.in_flight().write().try_begin(flight)
}

pub fn store_finish_flight(store: &AppStore, flight: Flight) {
    store.in_flight().write().finish(flight);
}
