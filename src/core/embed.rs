//! Link-preview metadata (`og:*`, `twitter:*`) for view pages.

use serde::{Deserialize, Serialize};

use crate::config::player;
use crate::core::content_url::ContentUrl;
use crate::core::template::{self, TemplateContext};
use crate::models::{FileSummary, MediaKind, ViewSettings};

/// Which attribute names the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttr {
    Property,
    Name,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Name => "name",
        }
    }
}

/// A single `<meta>` tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    pub fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }
}

/// The media block for a file: exactly one of image, video, audio or generic.
pub fn media_tags(file: &FileSummary, host: &str) -> Vec<MetaTag> {
    let raw = ContentUrl::new(&file.name).absolute(host).to_string();
    let width = player::WIDTH.to_string();
    let height = player::HEIGHT.to_string();

    match MediaKind::from_mime(&file.mime_type) {
        MediaKind::Image => vec![
            MetaTag::property("og:type", "image"),
            MetaTag::property("og:image", raw.clone()),
            MetaTag::property("og:url", raw.clone()),
            MetaTag::property("twitter:card", "summary_large_image"),
            MetaTag::property("twitter:image", raw),
            MetaTag::property("twitter:title", file.name.clone()),
        ],
        MediaKind::Video => vec![
            MetaTag::name("twitter:card", "player"),
            MetaTag::name("twitter:player", raw.clone()),
            MetaTag::name("twitter:player:stream", raw.clone()),
            MetaTag::name("twitter:player:width", width.clone()),
            MetaTag::name("twitter:player:height", height.clone()),
            MetaTag::name("twitter:player:stream:content_type", file.mime_type.clone()),
            MetaTag::name("twitter:title", file.name.clone()),
            MetaTag::property("og:url", raw.clone()),
            MetaTag::property("og:video", raw.clone()),
            MetaTag::property("og:video:url", raw.clone()),
            MetaTag::property("og:video:secure_url", raw),
            MetaTag::property("og:video:type", file.mime_type.clone()),
            MetaTag::property("og:video:width", width),
            MetaTag::property("og:video:height", height),
            MetaTag::property("og:type", "video.other"),
        ],
        MediaKind::Audio => vec![
            MetaTag::name("twitter:card", "player"),
            MetaTag::name("twitter:player", raw.clone()),
            MetaTag::name("twitter:player:stream", raw.clone()),
            MetaTag::name("twitter:player:stream:content_type", file.mime_type.clone()),
            MetaTag::name("twitter:title", file.name.clone()),
            MetaTag::name("twitter:player:width", width),
            MetaTag::name("twitter:player:height", height),
            MetaTag::property("og:type", "music.song"),
            MetaTag::property("og:url", raw.clone()),
            MetaTag::property("og:audio", raw.clone()),
            MetaTag::property("og:audio:secure_url", raw),
            MetaTag::property("og:audio:type", file.mime_type.clone()),
        ],
        MediaKind::Text | MediaKind::Other => vec![MetaTag::property("og:url", raw)],
    }
}

/// The owner's embed block, rendered through templates. Empty when embeds are off.
pub fn embed_tags(view: &ViewSettings, ctx: &TemplateContext<'_>) -> Vec<MetaTag> {
    if !view.embed {
        return Vec::new();
    }

    [
        ("og:title", &view.embed_title),
        ("og:description", &view.embed_description),
        ("og:site_name", &view.embed_site_name),
        ("theme-color", &view.embed_color),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| MetaTag::property(key, template::render(v, ctx)))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    const HOST: &str = "https://files.test";

    fn file(name: &str, mime: &str) -> FileSummary {
        FileSummary {
            id: "f1".to_string(),
            name: name.to_string(),
            original_name: None,
            mime_type: mime.to_string(),
            size: 10,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            views: 0,
            favorite: false,
            password: false,
            thumbnail: None,
            folder_id: None,
        }
    }

    fn has(tags: &[MetaTag], key: &str) -> usize {
        tags.iter().filter(|t| t.key == key).count()
    }

    #[test]
    fn test_image_block() {
        let tags = media_tags(&file("cat.png", "image/png"), HOST);
        assert_eq!(has(&tags, "og:type"), 1);
        assert_eq!(has(&tags, "og:url"), 1);
        assert!(tags.contains(&MetaTag::property(
            "og:image",
            "https://files.test/raw/cat.png"
        )));
        assert_eq!(has(&tags, "og:video"), 0);
    }

    #[test]
    fn test_video_block() {
        let tags = media_tags(&file("clip.mp4", "video/mp4"), HOST);
        assert!(tags.contains(&MetaTag::property("og:type", "video.other")));
        assert!(tags.contains(&MetaTag::name("twitter:player:width", "720")));
        assert!(tags.contains(&MetaTag::property("og:video:type", "video/mp4")));
        assert_eq!(has(&tags, "og:url"), 1);
        assert_eq!(has(&tags, "og:image"), 0);
    }

    #[test]
    fn test_audio_block_has_single_url() {
        let tags = media_tags(&file("song.mp3", "audio/mpeg"), HOST);
        assert!(tags.contains(&MetaTag::property("og:type", "music.song")));
        assert_eq!(has(&tags, "og:url"), 1);
    }

    #[test]
    fn test_generic_block() {
        for mime in ["text/plain", "application/zip", ""] {
            let tags = media_tags(&file("a.bin", mime), HOST);
            assert_eq!(
                tags,
                vec![MetaTag::property("og:url", "https://files.test/raw/a.bin")]
            );
        }
    }

    #[test]
    fn test_embed_tags_respect_toggle() {
        let f = file("cat.png", "image/png");
        let mut user = User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            view: ViewSettings {
                embed: false,
                embed_title: Some("{file.name} by {user.username}".to_string()),
                embed_color: Some("#ff0000".to_string()),
                embed_description: Some(String::new()),
                ..Default::default()
            },
        };
        let ctx = TemplateContext {
            file: Some(&f),
            user: Some(&user),
            ..Default::default()
        };
        assert!(embed_tags(&user.view, &ctx).is_empty());

        user.view.embed = true;
        let ctx = TemplateContext {
            file: Some(&f),
            user: Some(&user),
            ..Default::default()
        };
        assert_eq!(
            embed_tags(&user.view, &ctx),
            vec![
                MetaTag::property("og:title", "cat.png by alice"),
                MetaTag::property("theme-color", "#ff0000"),
            ]
        );
    }
}
