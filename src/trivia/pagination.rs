use std::fmt;

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Number of questions shown on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(pub usize);

impl Default for PageSize {
    fn default() -> Self {
        PageSize(QUESTIONS_PER_PAGE)
    }
}

/// 1-based page number. Zero and negative numbers never make it past `try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub struct Page(usize);

#[derive(Debug, PartialEq, Eq)]
pub enum PageError {
    NotPositive(i64),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotPositive(value) => {
                write!(f, "page number should be 1 or greater, got {value}")
            }
        }
    }
}

impl std::error::Error for PageError {}

impl Page {
    pub fn number(self) -> usize {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

impl TryFrom<i64> for Page {
    type Error = PageError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(PageError::NotPositive(value));
        }
        // pages past usize::MAX are empty anyway
        Ok(Page(usize::try_from(value).unwrap_or(usize::MAX)))
    }
}

/// Returns the window of `items` shown on `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: Page, page_size: PageSize) -> &[T] {
    let start = (page.0 - 1).saturating_mul(page_size.0).min(items.len());
    let end = start.saturating_add(page_size.0).min(items.len());
    &items[start..end]
}
