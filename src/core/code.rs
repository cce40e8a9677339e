//! Source-code detection by file extension.

use crate::models::RenderMode;

/// Known code extensions and the language name used for highlighting.
const CODE_EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("go", "go"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("html", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("json", "json"),
    ("jsx", "jsx"),
    ("kt", "kotlin"),
    ("lua", "lua"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("php", "php"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scss", "scss"),
    ("sh", "bash"),
    ("sql", "sql"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "tsx"),
    ("xml", "xml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("zig", "zig"),
];

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Language for an extension, if it is a known code type.
pub fn language_for(extension: &str) -> Option<&'static str> {
    let ext = extension.to_ascii_lowercase();
    CODE_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, lang)| *lang)
}

/// Whether a file name looks like source code.
pub fn is_code(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| language_for(&ext).is_some())
}

/// How text with this extension should be rendered.
pub fn render_mode(extension: &str) -> RenderMode {
    match language_for(extension) {
        Some("markdown") => RenderMode::Markdown,
        Some(_) => RenderMode::Highlight,
        None => RenderMode::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_code() {
        assert!(is_code("main.rs"));
        assert!(is_code("App.TSX"));
        assert!(is_code("notes.md"));
        assert!(!is_code("photo.png"));
        assert!(!is_code("Makefile"));
        assert!(!is_code("trailing."));
    }

    #[test]
    fn test_render_mode() {
        assert_eq!(render_mode("md"), RenderMode::Markdown);
        assert_eq!(render_mode("rs"), RenderMode::Highlight);
        assert_eq!(render_mode("txt"), RenderMode::Plain);
        assert_eq!(render_mode(""), RenderMode::Plain);
    }
}
