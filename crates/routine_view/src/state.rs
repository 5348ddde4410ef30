//! Control state of the routine table: search box, filter select, sortable
//! headers and page buttons.

use serde::Serialize;

use crate::column::{Column, FilterColumn};
use crate::error::{ViewError, ViewResult};
use crate::sort::{SortOrder, SortSpec};
use crate::view::{DEFAULT_PAGE_SIZE, ViewParams};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    search_term: String,
    filter_column: FilterColumn,
    sort_column: Option<Column>,
    sort_order: SortOrder,
    current_page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_column: FilterColumn::All,
            sort_column: None,
            sort_order: SortOrder::Asc,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> ViewResult<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidParameter(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn filter_column(&self) -> FilterColumn {
        self.filter_column
    }

    pub fn set_filter_column(&mut self, filter: FilterColumn) {
        self.filter_column = filter;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn go_to_page(&mut self, page: usize) -> ViewResult<()> {
        if page == 0 {
            return Err(ViewError::InvalidParameter(
                "page must be at least 1".into(),
            ));
        }
        self.current_page = page;
        Ok(())
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort_column
            .map(|column| SortSpec::new(column, self.sort_order))
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, column: Column) {
        if self.sort_column == Some(column) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_column = Some(column);
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn params(&self) -> ViewParams {
        ViewParams {
            search_term: self.search_term.clone(),
            filter_column: self.filter_column,
            sort: self.sort(),
            page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// Numbered page buttons for `total_pages`.
pub fn page_numbers(total_pages: usize) -> impl Iterator<Item = usize> {
    1..=total_pages
}

/// Target of the "Last" button. With no results this is page 1.
pub fn last_page(total_pages: usize) -> usize {
    total_pages.max(1)
}
