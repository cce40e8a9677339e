use serde::{Deserialize, Serialize};

/// Text alignment for the user's view-page content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ContentAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Owner preferences for how their shared files are presented.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewSettings {
    /// Emit the owner's embed tags (`og:title` and friends).
    pub embed: bool,
    pub embed_title: Option<String>,
    pub embed_description: Option<String>,
    pub embed_site_name: Option<String>,
    pub embed_color: Option<String>,
    /// Show the MIME type next to the file name.
    pub show_mimetype: bool,
    /// Template rendered below the preview.
    pub content: Option<String>,
    pub align: ContentAlign,
}

/// Owner of a shared file, as exposed to the view page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub view: ViewSettings,
}

/// Aggregate numbers about a user, exposed to templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub files: u64,
    pub storage: u64,
    pub views: u64,
}
