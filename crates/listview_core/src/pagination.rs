pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page-number pagination over a result of known size.
///
/// `current_page` is 1-based and never leaves `[1, total_pages]` through the
/// navigation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: u32,
    total_records: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_records: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn set_total_records(&mut self, total: u64) {
        self.total_records = total;
    }

    /// `max(1, ceil(total / size))`.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }

        let pages = self.total_records.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.is_first_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn last(&mut self) {
        self.current_page = self.total_pages();
    }

    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Back to page 1 after a change that reshapes the result set.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn show_pagination(&self) -> bool {
        self.total_records > u64::from(self.page_size)
    }

    pub fn start_record(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.page_size) + 1
    }

    pub fn end_record(&self) -> u64 {
        let end = u64::from(self.current_page) * u64::from(self.page_size);
        end.min(self.total_records)
    }
}
