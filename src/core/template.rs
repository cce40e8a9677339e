//! `{scope.field::modifier}` substitution for embed strings and view content.
//!
//! Supported placeholders:
//! - `file`: `id`, `name`, `originalName`, `type`, `size`, `views`, `createdAt`
//! - `user`: `id`, `username`
//! - `link`: `raw`, `returned`
//! - `metrics`: `files`, `storage`, `views`
//!
//! Modifiers `upper` and `lower` change case. Anything unrecognized is left
//! in place verbatim.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::{FileSummary, User, UserMetrics};
use crate::utils::format::format_bytes;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(file|user|link|metrics)\.([A-Za-z]+)(?:::([A-Za-z]+))?\}")
        .expect("placeholder pattern is valid")
});

/// Links exposed to templates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateLinks {
    /// Absolute raw content URL.
    pub raw: String,
    /// Absolute "returned" URL (the one handed out at upload time).
    pub returned: String,
}

/// Values a template may reference. Missing scopes leave placeholders untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateContext<'a> {
    pub file: Option<&'a FileSummary>,
    pub user: Option<&'a User>,
    pub link: Option<&'a TemplateLinks>,
    pub metrics: Option<&'a UserMetrics>,
}

impl TemplateContext<'_> {
    fn lookup(&self, scope: &str, field: &str) -> Option<String> {
        match scope {
            "file" => {
                let file = self.file?;
                match field {
                    "id" => Some(file.id.clone()),
                    "name" => Some(file.name.clone()),
                    "originalName" => {
                        Some(file.original_name.clone().unwrap_or_else(|| file.name.clone()))
                    }
                    "type" => Some(file.mime_type.clone()),
                    "size" => Some(format_bytes(file.size)),
                    "views" => Some(file.views.to_string()),
                    "createdAt" => Some(file.created_at.clone()),
                    _ => None,
                }
            }
            "user" => {
                let user = self.user?;
                match field {
                    "id" => Some(user.id.clone()),
                    "username" => Some(user.username.clone()),
                    _ => None,
                }
            }
            "link" => {
                let link = self.link?;
                match field {
                    "raw" => Some(link.raw.clone()),
                    "returned" => Some(link.returned.clone()),
                    _ => None,
                }
            }
            "metrics" => {
                let metrics = self.metrics?;
                match field {
                    "files" => Some(metrics.files.to_string()),
                    "storage" => Some(format_bytes(metrics.storage)),
                    "views" => Some(metrics.views.to_string()),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Substitute every recognized placeholder in `template`.
pub fn render(template: &str, ctx: &TemplateContext<'_>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let original = caps[0].to_string();
            let Some(value) = ctx.lookup(&caps[1], &caps[2]) else {
                return original;
            };
            match caps.get(3).map(|m| m.as_str()) {
                None => value,
                Some("upper") => value.to_uppercase(),
                Some("lower") => value.to_lowercase(),
                Some(_) => original,
            }
        })
        .into_owned()
}
