//! Page arithmetic. Pages are 1-based.

use crate::error::{ViewError, ViewResult};

/// Number of pages needed for `count` items; `0` when there are no items.
pub fn total_pages(count: usize, page_size: usize) -> ViewResult<usize> {
    check_page_size(page_size)?;
    Ok(count.div_ceil(page_size))
}

/// The items on `page`, clamped to what exists. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> ViewResult<&[T]> {
    check_page_size(page_size)?;
    if page == 0 {
        return Err(ViewError::InvalidParameter(
            "page must be at least 1".into(),
        ));
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    Ok(&items[start..end])
}

fn check_page_size(page_size: usize) -> ViewResult<()> {
    if page_size == 0 {
        return Err(ViewError::InvalidParameter(
            "page size must be at least 1".into(),
        ));
    }
    Ok(())
}
