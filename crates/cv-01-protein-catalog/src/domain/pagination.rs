//! Result Paginator
//!
//! 1-indexed, fixed-size windows over an ordered result set. A page past
//! the end is an empty window, not an error.
//!
//! The page count is `total / per_page + 1`, which reports a trailing empty
//! page when `total` is an exact multiple of `per_page`. Existing clients
//! depend on that arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Default window size.
pub const DEFAULT_PER_PAGE: usize = 100;

/// Return the records of `page`.
pub fn paginate<T>(records: &[T], page: i64, per_page: usize) -> Result<&[T], CatalogError> {
    if page < 1 {
        return Err(CatalogError::PageOutOfRange { page });
    }
    if per_page == 0 {
        return Err(CatalogError::InvalidPageSize { per_page });
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
        .unwrap_or(usize::MAX)
        .min(records.len());
    let end = start.saturating_add(per_page).min(records.len());
    Ok(&records[start..end])
}

/// Number of pages reported for `total` records.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total / per_page + 1
}

/// A window of results plus the numbers a caller needs to render it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub records: Vec<T>,
    pub page: i64,
    pub per_page: usize,
    pub total_pages: usize,
    pub result_count: usize,
}

impl<T: Clone> ResultPage<T> {
    /// Slice `all` into the requested page.
    pub fn from_all(all: &[T], page: i64, per_page: usize) -> Result<Self, CatalogError> {
        let window = paginate(all, page, per_page)?;
        Ok(Self {
            records: window.to_vec(),
            page,
            per_page,
            total_pages: total_pages(all.len(), per_page),
            result_count: all.len(),
        })
    }
}

impl<T> ResultPage<T> {
    /// 1-based position of the first record of this page.
    pub fn first_position(&self) -> usize {
        let offset = usize::try_from(self.page - 1).unwrap_or(0);
        offset.saturating_mul(self.per_page).saturating_add(1)
    }

    /// 1-based position of the last record of this page.
    pub fn last_position(&self) -> usize {
        let page = usize::try_from(self.page).unwrap_or(0);
        page.saturating_mul(self.per_page).min(self.result_count)
    }

    /// `"<first>-<last>"` label.
    pub fn showing(&self) -> String {
        format!("{}-{}", self.first_position(), self.last_position())
    }
}
