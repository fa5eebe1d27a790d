//! Client-side pagination over an already-filtered list

/// Page cursor over `total` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    total: usize,
    /// 1-based
    current: usize,
}

impl Paginator {
    /// A zero page size is treated as one item per page
    pub fn new(page_size: usize, total: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total,
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Real page count (0 when empty)
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Page count as displayed, never below 1
    pub fn display_total_pages(&self) -> usize {
        self.total_pages().max(1)
    }

    fn start_index(&self) -> usize {
        (self.current - 1) * self.page_size
    }

    /// 1-based index of the first item shown, 0 when empty
    pub fn showing_from(&self) -> usize {
        if self.total == 0 { 0 } else { self.start_index() + 1 }
    }

    /// 1-based index of the last item shown
    pub fn showing_to(&self) -> usize {
        (self.start_index() + self.page_size).min(self.total)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.total_pages()
    }

    /// Move back one page; returns whether the page changed
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one page; returns whether the page changed
    pub fn next(&mut self) -> bool {
        if self.current < self.total_pages() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into the valid range
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.display_total_pages());
    }

    /// Back to page 1 with a new item count
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.current = 1;
    }

    /// Items of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start_index().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}
