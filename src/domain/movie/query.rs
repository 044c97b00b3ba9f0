/// Optional, conjunctive filters for listing movies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,

    /// Exact release year; zero or negative values are passed through as-is
    pub release_year: Option<i32>,

    /// Case-insensitive substring of any attached genre name
    pub genre: Option<String>,
}

impl MovieFilter {
    /// Normalized title needle, `None` when absent or blank
    pub fn title_needle(&self) -> Option<String> {
        normalize(self.title.as_deref())
    }

    /// Normalized genre needle, `None` when absent or blank
    pub fn genre_needle(&self) -> Option<String> {
        normalize(self.genre.as_deref())
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// One-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Rows to skip for this page. Only meaningful once validated (page >= 1).
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }

    pub fn total_pages(&self, total_items: u64) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        total_items.div_ceil(u64::from(self.page_size))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE)
    }
}
