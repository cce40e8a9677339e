//! Preview resolution inputs and outputs.

use std::fmt;

/// Per-render user intent for a preview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    /// The user asked to see the content (click-through).
    pub show: bool,
    /// Credential that unlocked a gated file.
    pub unlocked_password: Option<String>,
    /// Render as code regardless of MIME type.
    pub force_code_view: bool,
}

impl RevealState {
    /// Collapsed state (nothing revealed).
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Revealed state without a credential.
    pub fn shown() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.unlocked_password = password.filter(|p| !p.is_empty());
        self
    }

    pub fn with_code_view(mut self, code: bool) -> Self {
        self.force_code_view = code;
        self
    }
}

/// Preferences the resolver consults besides the file and reveal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewPrefs {
    pub disable_media_preview: bool,
}

/// State of the raw-text retrieval for the current resolution context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Raw text is available.
    Loaded(String),
    /// Request failed or timed out.
    Failed,
}

impl TextState {
    pub fn loaded(&self) -> Option<&str> {
        match self {
            Self::Loaded(text) => Some(text),
            _ => None,
        }
    }
}

/// Why a placeholder is shown instead of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// Media previews are disabled, or an unknown type awaits a click.
    ViewFile,
    /// The file is password protected.
    Protected,
    PlayVideo,
    PlayAudio,
    ViewText,
}

impl PlaceholderReason {
    /// Label shown under the placeholder icon.
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::ViewFile => format!("Click to view file {}", name),
            Self::Protected => format!("Click to view protected {}", name),
            Self::PlayVideo => format!("Click to play video {}", name),
            Self::PlayAudio => format!("Click to play audio {}", name),
            Self::ViewText => format!("Click to view text {}", name),
        }
    }
}

/// How an image is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFit {
    /// Bounded thumbnail-style preview.
    Preview,
    /// Revealed, centered display.
    Full,
}

/// How text content is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Markdown,
    Highlight,
    Plain,
}

/// Declarative output of preview resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDirective {
    /// Gated content; a credential has to be supplied first.
    Locked,
    Placeholder {
        reason: PlaceholderReason,
    },
    Video {
        source_url: String,
        poster_url: Option<String>,
        /// Show the poster with a play overlay instead of the player.
        poster_only: bool,
    },
    Image {
        source_url: String,
        fit: ImageFit,
    },
    Audio {
        source_url: String,
    },
    Text {
        source_url: String,
        language_hint: String,
        mode: RenderMode,
        content: String,
    },
    /// No inline rendering; optionally open the raw content elsewhere.
    Unknown {
        open_url: Option<String>,
    },
}

impl RenderDirective {
    /// Whether the directive exposes file bytes to the UI.
    pub fn carries_content(&self) -> bool {
        matches!(
            self,
            Self::Video { .. }
                | Self::Image { .. }
                | Self::Audio { .. }
                | Self::Text { .. }
                | Self::Unknown { open_url: Some(_) }
        )
    }
}

impl fmt::Display for RenderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "locked"),
            Self::Placeholder { reason } => write!(f, "placeholder({:?})", reason),
            Self::Video { poster_only, .. } if *poster_only => write!(f, "video(poster)"),
            Self::Video { .. } => write!(f, "video"),
            Self::Image { .. } => write!(f, "image"),
            Self::Audio { .. } => write!(f, "audio"),
            Self::Text { .. } => write!(f, "text"),
            Self::Unknown { .. } => write!(f, "unknown"),
        }
    }
}
