//! Path-based routing over the browser history API.

use crate::config::VIEW_ROUTE;

/// Application routes.
///
/// URL format:
/// - `/dashboard`, `/dashboard/files?page=2` → file table
/// - `/dashboard/folders/{id}` → file table scoped to a folder
/// - `/view/{name}?pw=secret` → public view page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Files {
        folder: Option<String>,
        page: usize,
    },
    View {
        name: String,
        pw: Option<String>,
    },
    NotFound,
}

impl AppRoute {
    /// Parse a pathname and query string into a route.
    pub fn from_location(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] | ["dashboard", "files"] => Self::Files {
                folder: None,
                page: page_param(search),
            },
            ["dashboard", "folders", id] => Self::Files {
                folder: Some(decode(id)),
                page: page_param(search),
            },
            ["view", name] => Self::View {
                name: decode(name),
                pw: query_param(search, "pw").filter(|pw| !pw.is_empty()),
            },
            _ => Self::NotFound,
        }
    }

    /// Convert the route back into a path with query string.
    pub fn to_url(&self) -> String {
        match self {
            Self::Files { folder: None, page } if *page <= 1 => "/dashboard/files".to_string(),
            Self::Files { folder: None, page } => format!("/dashboard/files?page={}", page),
            Self::Files {
                folder: Some(id),
                page,
            } if *page <= 1 => format!("/dashboard/folders/{}", urlencoding::encode(id)),
            Self::Files {
                folder: Some(id),
                page,
            } => format!(
                "/dashboard/folders/{}?page={}",
                urlencoding::encode(id),
                page
            ),
            Self::View { name, pw: None } => {
                format!("{}/{}", VIEW_ROUTE, urlencoding::encode(name))
            }
            Self::View { name, pw: Some(pw) } => format!(
                "{}/{}?pw={}",
                VIEW_ROUTE,
                urlencoding::encode(name),
                urlencoding::encode(pw)
            ),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Get current route from the browser location.
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Self::NotFound;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self::from_location(&path, &search)
    }

    /// Update the browser URL to this route, adding a history entry.
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&self.to_url()),
            );
        }
    }

    /// Update the browser URL to this route without adding a history entry.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&self.to_url()),
            );
        }
    }
}

/// Look up a query parameter, percent-decoded.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| decode(&v.replace('+', " ")))
}

fn page_param(search: &str) -> usize {
    query_param(search, "page")
        .and_then(|p| p.parse().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}
