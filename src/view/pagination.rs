pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages for `total` items; never below 1
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// The 1-based `page_number`-th slice of `items`, clipped to bounds
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page of the preview table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advance one page if there is one; returns whether the page changed
    pub fn next(&mut self, total: usize) -> bool {
        if self.current < page_count(total, self.page_size) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page if possible; returns whether the page changed
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page_number`, clamped into the valid range
    pub fn go_to(&mut self, page_number: usize, total: usize) -> usize {
        self.current = page_number.clamp(1, page_count(total, self.page_size));
        self.current
    }
}
