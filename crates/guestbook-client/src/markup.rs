//! Entry Markup
//!
//! HTML for the read-only part of an entry card. User text is escaped; the
//! server timestamp is inserted as is.

use crate::messages;
use crate::models::Entry;

/// Escape text for insertion into element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Header, content and date blocks of an entry card
pub fn entry_html(entry: &Entry) -> String {
    format!(
        concat!(
            r#"<div class="entry-header">"#,
            r#"<div class="entry-title">{title}</div>"#,
            r#"<div class="entry-author">{label} {author}</div>"#,
            r#"</div>"#,
            r#"<div class="entry-content">{body}</div>"#,
            r#"<div class="entry-date">{created}</div>"#,
        ),
        title = escape_html(&entry.title),
        label = messages::AUTHOR_LABEL,
        author = escape_html(&entry.author),
        body = escape_html(&entry.body),
        created = entry.created,
    )
}
