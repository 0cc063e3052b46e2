//! Guestbook Client
//!
//! Everything the guestbook front end does that does not touch the DOM:
//! - models: wire types for the guestbook REST API
//! - api: the API trait and its HTTP implementation
//! - flow: create / verify / delete / edit / reload operations
//! - confirm, in_flight, store: client-side state the flows run against

mod api;
mod config;
mod confirm;
mod error;
mod flow;
mod in_flight;
mod markup;
mod models;
mod store;
mod validation;

pub mod messages;


pub use api::{GuestbookApi, HttpGuestbookApi};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use confirm::{ConfirmState, PendingAction};
pub use error::{ClientError, ClientResult};
pub use flow::{
    begin_edit, create_entry, delete_entry, reload, update_entry, verify, EditDraft, Feedback,
    Grant, Outcome, Verification,
};
pub use in_flight::{Flight, InFlight};
pub use markup::{entry_html, escape_html};
pub use models::{Action, ApiReply, Entry, EntryUpdate, NewEntry, PasswordCheck, VerifyReply};
pub use store::EntryStore;
pub use validation::{EditForm, EntryForm, Field, ValidationError};
