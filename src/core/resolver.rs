//! Preview resolution: access gating plus per-type rendering choice.
//!
//! [`resolve`] is a pure function over the file, the caller's reveal state,
//! the injected preview preferences and the state of the raw-text fetch for
//! the current resolution context. Rules are priority ordered, first match
//! wins:
//!
//! 1. previews disabled and not revealed → placeholder
//! 2. gated and not revealed → protected placeholder
//! 3. gated, revealed, no credential → [`RenderDirective::Locked`]
//! 4. dispatch on code-view override, then the primary MIME segment

use crate::core::code;
use crate::core::content_url::ContentUrl;
use crate::models::{
    FileOrigin, FileRecord, ImageFit, MediaKind, PlaceholderReason, PreviewPrefs, RenderDirective,
    RevealState, TextState,
};

/// Decide what the UI should render for `file`.
pub fn resolve(
    file: &FileRecord,
    reveal: &RevealState,
    prefs: PreviewPrefs,
    text: &TextState,
) -> RenderDirective {
    let gated = file.is_gated();

    if prefs.disable_media_preview && !reveal.show {
        return placeholder(if gated {
            PlaceholderReason::Protected
        } else {
            PlaceholderReason::ViewFile
        });
    }

    if gated && !reveal.show {
        return placeholder(PlaceholderReason::Protected);
    }

    let credential = credential(reveal);
    if gated && credential.is_none() {
        return RenderDirective::Locked;
    }

    let source_url = source_url(file, credential);

    match file.kind() {
        _ if reveal.force_code_view => resolve_text(file, reveal, source_url, text),
        MediaKind::Text => resolve_text(file, reveal, source_url, text),
        MediaKind::Video => {
            let poster_url = poster_url(file);
            if reveal.show {
                RenderDirective::Video {
                    source_url,
                    poster_url,
                    poster_only: false,
                }
            } else if poster_url.is_some() {
                RenderDirective::Video {
                    source_url,
                    poster_url,
                    poster_only: true,
                }
            } else {
                placeholder(PlaceholderReason::PlayVideo)
            }
        }
        MediaKind::Image => RenderDirective::Image {
            source_url,
            fit: if reveal.show {
                ImageFit::Full
            } else {
                ImageFit::Preview
            },
        },
        MediaKind::Audio if reveal.show => RenderDirective::Audio { source_url },
        MediaKind::Audio => placeholder(PlaceholderReason::PlayAudio),
        MediaKind::Other if !file.is_persisted() => RenderDirective::Unknown { open_url: None },
        MediaKind::Other if reveal.show => RenderDirective::Unknown {
            open_url: Some(source_url),
        },
        MediaKind::Other => placeholder(PlaceholderReason::ViewFile),
    }
}

/// URL the text branch fetches raw content from, if this file needs it.
///
/// Gated files without a credential never fetch.
pub fn text_source(file: &FileRecord, reveal: &RevealState) -> Option<String> {
    let wants_text = reveal.force_code_view || file.kind() == MediaKind::Text;
    let credential = credential(reveal);
    if !wants_text || (file.is_gated() && credential.is_none()) {
        return None;
    }
    Some(source_url(file, credential))
}

/// An empty password is no credential at all.
fn credential(reveal: &RevealState) -> Option<&str> {
    reveal.unlocked_password.as_deref().filter(|pw| !pw.is_empty())
}

fn resolve_text(
    file: &FileRecord,
    reveal: &RevealState,
    source_url: String,
    text: &TextState,
) -> RenderDirective {
    match text.loaded() {
        Some(content) if reveal.show => {
            let extension = file.extension().to_ascii_lowercase();
            RenderDirective::Text {
                source_url,
                mode: code::render_mode(&extension),
                language_hint: extension,
                content: content.to_string(),
            }
        }
        _ => placeholder(PlaceholderReason::ViewText),
    }
}

fn source_url(file: &FileRecord, credential: Option<&str>) -> String {
    match &file.origin {
        FileOrigin::Persisted { .. } => ContentUrl::new(&file.name)
            .password(credential)
            .to_string(),
        FileOrigin::Local { object_url } => object_url.clone(),
    }
}

fn poster_url(file: &FileRecord) -> Option<String> {
    if !file.is_persisted() {
        return None;
    }
    file.thumbnail_path
        .as_deref()
        .map(|path| ContentUrl::new(path).to_string())
}

fn placeholder(reason: PlaceholderReason) -> RenderDirective {
    RenderDirective::Placeholder { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RenderMode;

    const MIMES: &[&str] = &[
        "video/mp4",
        "image/png",
        "audio/mpeg",
        "text/plain",
        "application/zip",
        "",
        "garbage",
    ];

    fn stored(name: &str, mime: &str) -> FileRecord {
        FileRecord::persisted("id1", name, mime)
    }

    fn enabled() -> PreviewPrefs {
        PreviewPrefs::default()
    }

    fn disabled() -> PreviewPrefs {
        PreviewPrefs {
            disable_media_preview: true,
        }
    }

    // =========================================================================
    // Access gating
    // =========================================================================

    #[test]
    fn test_gated_without_credential_never_exposes_content() {
        for mime in MIMES {
            let file = stored("secret.bin", mime).with_password(true);
            for password in [None, Some(String::new())] {
                for show in [false, true] {
                    for code in [false, true] {
                        for prefs in [enabled(), disabled()] {
                            let reveal = RevealState {
                                show,
                                unlocked_password: password.clone(),
                                force_code_view: code,
                            };
                            let text = TextState::Loaded("leak".to_string());
                            let directive = resolve(&file, &reveal, prefs, &text);
                            assert!(
                                !directive.carries_content(),
                                "{mime} show={show} pw={password:?}: {directive}"
                            );
                            assert!(
                                matches!(
                                    directive,
                                    RenderDirective::Locked
                                        | RenderDirective::Placeholder {
                                            reason: PlaceholderReason::Protected
                                        }
                                ),
                                "{mime} show={show} pw={password:?}: {directive}"
                            );
                            assert_eq!(text_source(&file, &reveal), None);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_gated_hidden_is_protected_placeholder() {
        let file = stored("cat.png", "image/png").with_password(true);
        assert_eq!(
            resolve(&file, &RevealState::hidden(), enabled(), &TextState::Idle),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::Protected
            }
        );
    }

    #[test]
    fn test_gated_shown_without_credential_is_locked() {
        let file = stored("cat.png", "image/png").with_password(true);
        assert_eq!(
            resolve(&file, &RevealState::shown(), enabled(), &TextState::Idle),
            RenderDirective::Locked
        );
    }

    #[test]
    fn test_credential_unlocks_and_is_appended() {
        let file = stored("cat.png", "image/png").with_password(true);
        let reveal = RevealState::shown().with_password(Some("s3cret".to_string()));
        assert_eq!(
            resolve(&file, &reveal, enabled(), &TextState::Idle),
            RenderDirective::Image {
                source_url: "/raw/cat.png?pw=s3cret".to_string(),
                fit: ImageFit::Full,
            }
        );
    }

    #[test]
    fn test_local_file_ignores_password_flag() {
        let file = FileRecord::local("cat.png", "image/png", "blob:abc").with_password(true);
        assert_eq!(
            resolve(&file, &RevealState::shown(), enabled(), &TextState::Idle),
            RenderDirective::Image {
                source_url: "blob:abc".to_string(),
                fit: ImageFit::Full,
            }
        );
    }

    // =========================================================================
    // Media preview preference
    // =========================================================================

    #[test]
    fn test_disabled_previews_hidden_is_always_placeholder() {
        for mime in MIMES {
            let file = stored("f", mime).with_thumbnail(".thumb.jpg");
            let directive = resolve(&file, &RevealState::hidden(), disabled(), &TextState::Idle);
            assert_eq!(
                directive,
                RenderDirective::Placeholder {
                    reason: PlaceholderReason::ViewFile
                },
                "{mime}"
            );
        }
    }

    #[test]
    fn test_disabled_previews_shown_resolves_normally() {
        let file = stored("cat.png", "image/png");
        assert!(matches!(
            resolve(&file, &RevealState::shown(), disabled(), &TextState::Idle),
            RenderDirective::Image { .. }
        ));
    }

    // =========================================================================
    // MIME dispatch
    // =========================================================================

    #[test]
    fn test_dispatch_table_when_shown() {
        let shown = RevealState::shown();
        assert!(matches!(
            resolve(&stored("a.mp4", "video/mp4"), &shown, enabled(), &TextState::Idle),
            RenderDirective::Video {
                poster_only: false,
                ..
            }
        ));
        assert!(matches!(
            resolve(&stored("a.png", "image/png"), &shown, enabled(), &TextState::Idle),
            RenderDirective::Image { .. }
        ));
        assert_eq!(
            resolve(&stored("a.mp3", "audio/mpeg"), &shown, enabled(), &TextState::Idle),
            RenderDirective::Audio {
                source_url: "/raw/a.mp3".to_string()
            }
        );
        assert_eq!(
            resolve(&stored("a.zip", "application/zip"), &shown, enabled(), &TextState::Idle),
            RenderDirective::Unknown {
                open_url: Some("/raw/a.zip".to_string())
            }
        );
    }

    #[test]
    fn test_text_waits_for_fetch() {
        let file = stored("notes.txt", "text/plain");
        let shown = RevealState::shown();

        for pending in [TextState::Idle, TextState::Loading, TextState::Failed] {
            assert_eq!(
                resolve(&file, &shown, enabled(), &pending),
                RenderDirective::Placeholder {
                    reason: PlaceholderReason::ViewText
                }
            );
        }

        assert_eq!(
            resolve(&file, &shown, enabled(), &TextState::Loaded("hi".to_string())),
            RenderDirective::Text {
                source_url: "/raw/notes.txt".to_string(),
                language_hint: "txt".to_string(),
                mode: RenderMode::Plain,
                content: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_text_hidden_is_placeholder_even_when_loaded() {
        let file = stored("notes.txt", "text/plain");
        assert_eq!(
            resolve(
                &file,
                &RevealState::hidden(),
                enabled(),
                &TextState::Loaded("hi".to_string())
            ),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::ViewText
            }
        );
    }

    #[test]
    fn test_code_view_overrides_mime() {
        let file = stored("main.rs", "application/octet-stream");
        let reveal = RevealState::shown().with_code_view(true);
        let directive = resolve(&file, &reveal, enabled(), &TextState::Loaded("fn main() {}".into()));
        assert!(matches!(
            directive,
            RenderDirective::Text {
                mode: RenderMode::Highlight,
                ref language_hint,
                ..
            } if language_hint == "rs"
        ));
    }

    #[test]
    fn test_hidden_dispatch() {
        let hidden = RevealState::hidden();
        assert_eq!(
            resolve(&stored("a.mp4", "video/mp4"), &hidden, enabled(), &TextState::Idle),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::PlayVideo
            }
        );
        assert_eq!(
            resolve(&stored("a.mp3", "audio/mpeg"), &hidden, enabled(), &TextState::Idle),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::PlayAudio
            }
        );
        assert_eq!(
            resolve(&stored("a.png", "image/png"), &hidden, enabled(), &TextState::Idle),
            RenderDirective::Image {
                source_url: "/raw/a.png".to_string(),
                fit: ImageFit::Preview,
            }
        );
        assert_eq!(
            resolve(&stored("a.zip", "application/zip"), &hidden, enabled(), &TextState::Idle),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::ViewFile
            }
        );
    }

    #[test]
    fn test_unknown_local_file_has_no_open_action() {
        let file = FileRecord::local("a.zip", "application/zip", "blob:zip");
        for reveal in [RevealState::hidden(), RevealState::shown()] {
            assert_eq!(
                resolve(&file, &reveal, enabled(), &TextState::Idle),
                RenderDirective::Unknown { open_url: None }
            );
        }
    }

    #[test]
    fn test_video_poster_fallback() {
        let file = stored("clip.mp4", "video/mp4").with_thumbnail(".thumbnail.id1.jpg");
        assert_eq!(
            resolve(&file, &RevealState::hidden(), enabled(), &TextState::Idle),
            RenderDirective::Video {
                source_url: "/raw/clip.mp4".to_string(),
                poster_url: Some("/raw/.thumbnail.id1.jpg".to_string()),
                poster_only: true,
            }
        );

        let local = FileRecord::local("clip.mp4", "video/mp4", "blob:v").with_thumbnail("x.jpg");
        assert_eq!(
            resolve(&local, &RevealState::hidden(), enabled(), &TextState::Idle),
            RenderDirective::Placeholder {
                reason: PlaceholderReason::PlayVideo
            }
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let text = TextState::Loading;
        for mime in MIMES {
            let file = stored("f.txt", mime).with_thumbnail("t.jpg");
            for reveal in [RevealState::hidden(), RevealState::shown()] {
                let first = resolve(&file, &reveal, enabled(), &text);
                let second = resolve(&file, &reveal, enabled(), &text);
                assert_eq!(first, second);
            }
        }
    }

    // =========================================================================
    // Text source
    // =========================================================================

    #[test]
    fn test_text_source() {
        assert_eq!(
            text_source(&stored("a.txt", "text/plain"), &RevealState::hidden()),
            Some("/raw/a.txt".to_string())
        );
        assert_eq!(
            text_source(&stored("a.png", "image/png"), &RevealState::hidden()),
            None
        );
        assert_eq!(
            text_source(
                &stored("a.rs", "application/octet-stream"),
                &RevealState::hidden().with_code_view(true)
            ),
            Some("/raw/a.rs".to_string())
        );

        let gated = stored("a.txt", "text/plain").with_password(true);
        assert_eq!(text_source(&gated, &RevealState::shown()), None);
        assert_eq!(
            text_source(
                &gated,
                &RevealState::shown().with_password(Some("pw".to_string()))
            ),
            Some("/raw/a.txt?pw=pw".to_string())
        );
    }
}
