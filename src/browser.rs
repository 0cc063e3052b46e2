//! Browser Glue
//!
//! Alerts and page-level settings read from the DOM.

use guestbook_client::Feedback;

/// Reports to the user with `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserFeedback;

impl Feedback for BrowserFeedback {
    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {}", message);
        }
    }
}

/// Endpoint override from `<meta name="guestbook-api" content="...">`
pub fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(r#"meta[name="guestbook-api"]"#).ok()??;
    meta.get_attribute("content")
}
