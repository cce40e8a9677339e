//! HTML rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion and sanitization of
//! user-authored content.

use std::collections::HashSet;

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough, tables, autolinks and task lists. The output is
/// sanitized with `ammonia` to prevent XSS.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    let html = comrak::markdown_to_html(markdown, &options);
    ammonia::clean(&html)
}

/// Sanitize user-authored HTML for inline display.
///
/// `script` and `style` content is dropped entirely.
pub fn sanitize_user_html(html: &str) -> String {
    ammonia::Builder::default()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_and_sanitizes() {
        let html = markdown_to_html("# Title\n\n~~gone~~\n\n<script>alert(1)</script>\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_user_html_drops_script_and_style() {
        let html = sanitize_user_html(
            "<p>hi <b>there</b></p><style>p{}</style><script>alert(1)</script>",
        );
        assert_eq!(html, "<p>hi <b>there</b></p>");
    }
}
