//! UI Components
//!
//! Leptos components for the guestbook page.

mod edit_modal;
mod entry_card;
mod entry_list;
mod guestbook_form;
mod password_modal;

pub use edit_modal::EditModal;
pub use entry_card::EntryCard;
pub use entry_list::EntryList;
pub use guestbook_form::GuestbookForm;
pub use password_modal::PasswordModal;
