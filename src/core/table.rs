//! File table state: search, sort, pagination and multi-selection.
//!
//! Kept free of reactive types so it can be driven and tested directly;
//! the table component wraps one [`TableState`] in a signal.

use crate::config::{API_BASE, DEFAULT_PER_PAGE, PER_PAGE_OPTIONS};
use crate::models::Folder;
use crate::utils::format::pluralize;

// =============================================================================
// Search
// =============================================================================

/// Column a search applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Name,
    OriginalName,
    Type,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [Self::Name, Self::OriginalName, Self::Type];

    /// Field name used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::OriginalName => "originalName",
            Self::Type => "type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::OriginalName => "Original name",
            Self::Type => "Type",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("Search by {}", self.label().to_lowercase())
    }
}

/// One query per searchable column; at most one is non-empty at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub original_name: String,
    pub mime_type: String,
}

impl SearchQuery {
    pub fn get(&self, field: SearchField) -> &str {
        match field {
            SearchField::Name => &self.name,
            SearchField::OriginalName => &self.original_name,
            SearchField::Type => &self.mime_type,
        }
    }

    fn slot(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::Name => &mut self.name,
            SearchField::OriginalName => &mut self.original_name,
            SearchField::Type => &mut self.mime_type,
        }
    }

    /// Set `field` and clear every other field.
    pub fn set(&mut self, field: SearchField, query: &str) {
        for other in SearchField::ALL {
            if other != field {
                self.slot(other).clear();
            }
        }
        *self.slot(field) = query.to_string();
    }

    pub fn is_searching(&self) -> bool {
        SearchField::ALL
            .iter()
            .any(|f| !self.get(*f).trim().is_empty())
    }
}

// =============================================================================
// Sort
// =============================================================================

/// Sortable columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Type,
    Size,
    Views,
    Favorite,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Name => "name",
            Self::Type => "type",
            Self::Size => "size",
            Self::Views => "views",
            Self::Favorite => "favorite",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

// =============================================================================
// Table State
// =============================================================================

/// Complete state of the file table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    pub page: usize,
    pub per_page: usize,
    pub sort: SortField,
    pub order: SortOrder,
    pub search_field: SearchField,
    pub search: SearchQuery,
    /// Restrict the listing to a folder.
    pub folder: Option<String>,
    /// Selected file ids; kept across page changes.
    pub selected: Vec<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(1, None)
    }
}

impl TableState {
    pub fn new(page: usize, folder: Option<String>) -> Self {
        Self {
            page: page.max(1),
            per_page: DEFAULT_PER_PAGE,
            sort: SortField::default(),
            order: SortOrder::default(),
            search_field: SearchField::default(),
            search: SearchQuery::default(),
            folder,
            selected: Vec::new(),
        }
    }

    /// Type into a search box: the field becomes active and the others clear.
    pub fn set_search(&mut self, field: SearchField, query: &str) {
        self.search_field = field;
        self.search.set(field, query);
        self.page = 1;
    }

    pub fn searching(&self) -> bool {
        self.search.is_searching()
    }

    /// Click a column header: same column flips order, new column sorts descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort == field {
            self.order = self.order.flipped();
        } else {
            self.sort = field;
            self.order = SortOrder::Desc;
        }
    }

    /// Unknown sizes snap to the default.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = if PER_PAGE_OPTIONS.contains(&per_page) {
            per_page
        } else {
            DEFAULT_PER_PAGE
        };
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Listing endpoint with the current query.
    pub fn request_url(&self, search_threshold: f64) -> String {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("perpage", self.per_page.to_string()),
            ("filter", "all".to_string()),
            ("sortBy", self.sort.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
        ];
        if let Some(folder) = &self.folder {
            params.push(("id", folder.clone()));
        }

        let query = self.search.get(self.search_field).trim();
        if !query.is_empty() {
            params.push(("searchField", self.search_field.as_str().to_string()));
            params.push(("searchQuery", query.to_string()));
            params.push(("searchThreshold", search_threshold.to_string()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/user/files?{}", API_BASE, query_string)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Select or deselect every id on the current page.
    pub fn toggle_all(&mut self, page_ids: &[String]) {
        if page_ids.iter().all(|id| self.is_selected(id)) {
            self.selected.retain(|s| !page_ids.contains(s));
        } else {
            for id in page_ids {
                if !self.is_selected(id) {
                    self.selected.push(id.clone());
                }
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

/// Pages needed for `total` files; at least one.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Button label for a bulk action ("Delete 2 files").
pub fn bulk_label(verb: &str, count: usize) -> String {
    format!("{} {}", verb, pluralize(count, "file"))
}

/// Folders whose name contains `query` (case-insensitive).
pub fn filter_folders<'a>(folders: &'a [Folder], query: &str) -> Vec<&'a Folder> {
    let needle = query.trim().to_lowercase();
    folders
        .iter()
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .collect()
}
