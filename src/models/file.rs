use serde::{Deserialize, Serialize};

// =============================================================================
// Media Kind
// =============================================================================

/// Primary MIME segment that drives preview resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Text,
    Other,
}

impl MediaKind {
    /// Classify a `type/subtype` MIME string by its primary segment.
    ///
    /// Matching is case-insensitive and tolerant of missing subtypes or
    /// parameters; anything unrecognized is [`MediaKind::Other`].
    pub fn from_mime(mime: &str) -> Self {
        let primary = mime.split('/').next().unwrap_or_default().trim();
        match primary.to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "text" => Self::Text,
            _ => Self::Other,
        }
    }
}

// =============================================================================
// File Record
// =============================================================================

/// Where a file's bytes live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOrigin {
    /// Stored server-side under a durable id.
    Persisted { id: String },
    /// Freshly selected in a local form, addressed by a blob object URL.
    Local { object_url: String },
}

/// The subset of a file that preview resolution needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Public slug used to build content URLs.
    pub name: String,
    /// `type/subtype` MIME string as reported at upload.
    pub mime_type: String,
    /// Access is gated behind a password.
    pub has_password: bool,
    /// Stored poster image, usually present only for videos.
    pub thumbnail_path: Option<String>,
    pub origin: FileOrigin,
}

impl FileRecord {
    /// A server-stored file.
    pub fn persisted(id: &str, name: &str, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            has_password: false,
            thumbnail_path: None,
            origin: FileOrigin::Persisted { id: id.to_string() },
        }
    }

    /// A local selection that has not been uploaded yet.
    pub fn local(name: &str, mime_type: &str, object_url: &str) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            has_password: false,
            thumbnail_path: None,
            origin: FileOrigin::Local {
                object_url: object_url.to_string(),
            },
        }
    }

    pub fn with_password(mut self, has_password: bool) -> Self {
        self.has_password = has_password;
        self
    }

    pub fn with_thumbnail(mut self, path: &str) -> Self {
        self.thumbnail_path = Some(path.to_string());
        self
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.origin, FileOrigin::Persisted { .. })
    }

    /// Persisted and password protected. Local files are never gated.
    pub fn is_gated(&self) -> bool {
        self.is_persisted() && self.has_password
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }

    /// Extension after the last `.`, or empty when there is none.
    pub fn extension(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => "",
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Stored thumbnail reference.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Thumbnail {
    pub path: String,
}

/// File row as returned by the files API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub favorite: bool,
    /// Whether the file is password protected (the hash never leaves the server).
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub folder_id: Option<String>,
}

impl From<&FileSummary> for FileRecord {
    fn from(file: &FileSummary) -> Self {
        Self {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            has_password: file.password,
            thumbnail_path: file.thumbnail.as_ref().map(|t| t.path.clone()),
            origin: FileOrigin::Persisted {
                id: file.id.clone(),
            },
        }
    }
}

/// One page of the files listing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FilePage {
    pub page: Vec<FileSummary>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub pages: usize,
}

/// Folder as listed by the folders API (without its files).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}
