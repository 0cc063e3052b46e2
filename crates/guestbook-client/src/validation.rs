//! Form Validation
//!
//! Raw form input and the checks run before any request is sent.

use crate::models::{Entry, EntryUpdate, NewEntry};

/// A required form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Body,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Body => "body",
            Field::Password => "password",
        }
    }
}

/// One or more required fields were blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(Field::as_str).collect();
        write!(f, "Missing required fields: {}", names.join(", "))
    }
}

impl std::error::Error for ValidationError {}

fn check(fields: &[(Field, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<Field> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Contents of the new-entry form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub author: String,
    pub body: String,
    pub password: String,
}

impl EntryForm {
    /// Trimmed create body. The password is sent as typed.
    pub fn validate(&self) -> Result<NewEntry, ValidationError> {
        check(&[
            (Field::Title, &self.title),
            (Field::Author, &self.author),
            (Field::Body, &self.body),
            (Field::Password, &self.password),
        ])?;

        Ok(NewEntry {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            body: self.body.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Contents of the edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub author: String,
    pub body: String,
}

impl EditForm {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            author: entry.author.clone(),
            body: entry.body.clone(),
        }
    }

    pub fn validate(&self) -> Result<EntryUpdate, ValidationError> {
        check(&[
            (Field::Title, &self.title),
            (Field::Author, &self.author),
            (Field::Body, &self.body),
        ])?;

        Ok(EntryUpdate {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            body: self.body.trim().to_string(),
        })
    }
}
