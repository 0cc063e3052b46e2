//! Guestbook Flows
//!
//! The user-facing operations. Each one validates, calls the API, reports to
//! the user through [`Feedback`] and logs transport failures. None of them
//! touch UI state; callers act on the returned outcome.

use crate::api::GuestbookApi;
use crate::confirm::PendingAction;
use crate::error::ClientResult;
use crate::messages;
use crate::models::{Action, ApiReply, Entry};
use crate::store::EntryStore;
use crate::validation::{EditForm, EntryForm};

/// Blocking user notifications (`window.alert` in the browser)
pub trait Feedback {
    fn alert(&self, message: &str);
}

/// Result of a create, update or delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// Server confirmed the change; the list should be reloaded
    Applied,
    /// Server answered with an error, or with neither message nor error
    Refused,
    /// Transport or decode failure, logged only
    Failed,
}

impl Outcome {
    /// Whether a request went out (forms reset / modals close after this)
    pub fn attempted(&self) -> bool {
        !matches!(self, Outcome::Invalid)
    }

    pub fn needs_reload(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// A verified password for a pending action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub pending: PendingAction,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Granted(Grant),
    /// Wrong password; the user was told and may retry
    Denied,
    /// Transport failure, logged only
    Failed,
}

impl Verification {
    pub fn is_granted(&self) -> bool {
        matches!(self, Verification::Granted(_))
    }
}

/// Edit form opened for a verified entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub entry_id: u32,
    pub form: EditForm,
}

fn report(result: ClientResult<ApiReply>, feedback: &dyn Feedback, success: Option<&str>, what: &str) -> Outcome {
    match result {
        Ok(ApiReply::Message(message)) => {
            log::info!("{} succeeded: {}", what, message);
            feedback.alert(success.unwrap_or(&message));
            Outcome::Applied
        }
        Ok(ApiReply::Error(error)) => {
            log::warn!("{} refused: {}", what, error);
            feedback.alert(&error);
            Outcome::Refused
        }
        Ok(ApiReply::Unrecognized) => {
            log::warn!("{}: response had neither message nor error", what);
            Outcome::Refused
        }
        Err(e) => {
            log::error!("{} failed: {}", what, e);
            Outcome::Failed
        }
    }
}

/// Fetch the full list. `None` (logged) on any failure.
pub async fn reload<A: GuestbookApi + ?Sized>(api: &A) -> Option<Vec<Entry>> {
    match api.list().await {
        Ok(entries) => {
            log::debug!("loaded {} entries", entries.len());
            Some(entries)
        }
        Err(e) => {
            log::error!("loading entries failed: {}", e);
            None
        }
    }
}

/// Submit the new-entry form
pub async fn create_entry<A: GuestbookApi + ?Sized>(api: &A, feedback: &dyn Feedback, form: &EntryForm) -> Outcome {
    let entry = match form.validate() {
        Ok(entry) => entry,
        Err(e) => {
            log::debug!("create rejected: {}", e);
            feedback.alert(messages::FILL_ALL_FIELDS);
            return Outcome::Invalid;
        }
    };

    report(api.create(&entry).await, feedback, Some(messages::ENTRY_CREATED), "create")
}

/// Check `password` against the pending action's entry
pub async fn verify<A: GuestbookApi + ?Sized>(
    api: &A,
    feedback: &dyn Feedback,
    pending: PendingAction,
    password: &str,
) -> Verification {
    match api.verify(pending.entry_id, password).await {
        Ok(true) => {
            log::info!("password verified for {} of entry {}", pending.action.as_str(), pending.entry_id);
            Verification::Granted(Grant { pending, password: password.to_string() })
        }
        Ok(false) => {
            feedback.alert(messages::PASSWORD_MISMATCH);
            Verification::Denied
        }
        Err(e) => {
            log::error!("verifying entry {} failed: {}", pending.entry_id, e);
            Verification::Failed
        }
    }
}

/// Delete an entry with its verified password
pub async fn delete_entry<A: GuestbookApi + ?Sized>(
    api: &A,
    feedback: &dyn Feedback,
    entry_id: u32,
    password: &str,
) -> Outcome {
    report(api.delete(entry_id, password).await, feedback, None, "delete")
}

/// Edit form pre-filled from the last fetched list. Alerts and returns `None`
/// if the entry has disappeared since.
pub fn begin_edit(store: &EntryStore, feedback: &dyn Feedback, grant: &Grant) -> Option<EditDraft> {
    debug_assert_eq!(grant.pending.action, Action::Edit);
    let entry_id = grant.pending.entry_id;
    match store.get(entry_id) {
        Some(entry) => Some(EditDraft { entry_id, form: EditForm::from_entry(entry) }),
        None => {
            log::warn!("entry {} verified for edit but not in the loaded list", entry_id);
            feedback.alert(messages::ENTRY_GONE);
            None
        }
    }
}

/// Submit the edit form. The password is not resent.
pub async fn update_entry<A: GuestbookApi + ?Sized>(api: &A, feedback: &dyn Feedback, draft: &EditDraft) -> Outcome {
    let update = match draft.form.validate() {
        Ok(update) => update,
        Err(e) => {
            log::debug!("update rejected: {}", e);
            feedback.alert(messages::FILL_ALL_FIELDS);
            return Outcome::Invalid;
        }
    };

    report(api.update(draft.entry_id, &update).await, feedback, Some(messages::ENTRY_UPDATED), "update")
}
