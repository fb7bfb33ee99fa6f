//! Read-only snapshot of a window's pagination state.

use serde::Serialize;

use crate::options::PageSizeOptions;

/// Pagination state as a renderer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Selected page size.
    pub page_size: usize,
    /// Page size the window was created with.
    pub initial_page_size: usize,
    /// Number of loaded records.
    pub total_records: usize,
    /// Number of pages as last computed.
    pub total_pages: usize,
    /// Page sizes offered besides the selected one.
    pub page_size_options: PageSizeOptions,
    /// Display hint for the page-size picker.
    pub page_size_hidden: bool,
    /// True when the window is on page 1.
    pub is_first_page: bool,
    /// True when there is no later page to move to.
    pub is_last_page: bool,
}
