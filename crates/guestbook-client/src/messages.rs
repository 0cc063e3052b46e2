//! User-facing strings

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const ENTRY_CREATED: &str = "Your entry has been posted.";
pub const ENTRY_UPDATED: &str = "Your entry has been updated.";
pub const PASSWORD_MISMATCH: &str = "The password does not match.";
pub const ENTRY_GONE: &str = "This entry no longer exists.";
pub const NO_ENTRIES: &str = "No guestbook entries yet.";
pub const AUTHOR_LABEL: &str = "Author:";
