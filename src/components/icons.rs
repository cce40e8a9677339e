//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::MediaKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as SortDesc, LuArrowUp as SortAsc, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCopy as Copy, LuDownload as Download,
        LuExternalLink as ExternalLink, LuFile as File, LuFileCode as FileCode,
        LuFileText as FileText, LuFileX as FileUnknown, LuFilm as FileVideo,
        LuFolder as Folder, LuImage as FileImage, LuLock as Lock, LuMusic as FileAudio,
        LuPlay as Play, LuSearch as Search, LuStar as Star, LuTrash2 as Trash, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboard as Copy, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFileEarmarkX as FileUnknown, BsFolderFill as Folder,
        BsLockFill as Lock, BsPlayFill as Play, BsSearch as Search, BsSortDown as SortDesc,
        BsSortUp as SortAsc, BsStarFill as Star, BsTrashFill as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_UNKNOWN, FileUnknown);
themed_icon!(SEARCH, Search);
themed_icon!(LOCK, Lock);
themed_icon!(PLAY, Play);
themed_icon!(CLOSE, Close);
themed_icon!(COPY, Copy);
themed_icon!(STAR, Star);
themed_icon!(TRASH, Trash);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);

/// Icon for a file, chosen by media kind and code extension.
pub fn file_icon(kind: MediaKind, is_code: bool) -> Icon {
    if is_code {
        return FILE_CODE;
    }
    match kind {
        MediaKind::Image => FILE_IMAGE,
        MediaKind::Video => FILE_VIDEO,
        MediaKind::Audio => FILE_AUDIO,
        MediaKind::Text => FILE_TEXT,
        MediaKind::Other => FILE,
    }
}
