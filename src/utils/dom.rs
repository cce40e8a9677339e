//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

use crate::core::embed::MetaTag;

/// Attribute marking `<meta>` tags this app owns, so they can be replaced.
const MANAGED_ATTR: &str = "data-shareview";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Copy text to the clipboard (fire and forget).
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

/// Absolute origin of the current page (e.g. `https://files.example.com`).
pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Ask the user to confirm an action.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// =============================================================================
// Document Head
// =============================================================================

/// Replace this app's `<meta>` tags and the document title.
pub fn apply_head(tags: &[MetaTag], title: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);

    let Ok(Some(head)) = document.query_selector("head") else {
        return;
    };

    if let Ok(stale) = document.query_selector_all(&format!("meta[{}]", MANAGED_ATTR)) {
        for i in 0..stale.length() {
            if let Some(node) = stale.item(i) {
                let _ = head.remove_child(&node);
            }
        }
    }

    for tag in tags {
        if let Ok(meta) = document.create_element("meta") {
            let _ = meta.set_attribute(tag.attr.as_str(), &tag.key);
            let _ = meta.set_attribute("content", &tag.content);
            let _ = meta.set_attribute(MANAGED_ATTR, "");
            let _ = head.append_child(&meta);
        }
    }
}
