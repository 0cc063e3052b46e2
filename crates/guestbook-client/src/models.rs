//! Guestbook Models
//!
//! Data structures matching the guestbook REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A guestbook entry as returned by the list endpoint.
///
/// The server may include the entry password in list payloads; it is not
/// deserialized and never kept on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub body: String,
    /// Server timestamp, displayed verbatim. Missing or null reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub title: String,
    pub author: String,
    pub body: String,
    pub password: String,
}

/// Body of an update request. Carries no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryUpdate {
    pub title: String,
    pub author: String,
    pub body: String,
}

/// Body of verify and delete requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordCheck<'a> {
    pub password: &'a str,
}

/// Response of the verify endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct VerifyReply {
    #[serde(default, deserialize_with = "truthy_flag")]
    pub valid: bool,
}

fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// Password-gated action a modal was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

/// How a create/update/delete response is read.
///
/// `message` wins over `error` when both are present; anything without either
/// key set to a truthy value is `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiReply {
    Message(String),
    Error(String),
    Unrecognized,
}

impl ApiReply {
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).filter(|v| is_truthy(v)).map(display_text);

        if let Some(message) = field("message") {
            ApiReply::Message(message)
        } else if let Some(error) = field("error") {
            ApiReply::Error(error)
        } else {
            ApiReply::Unrecognized
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
