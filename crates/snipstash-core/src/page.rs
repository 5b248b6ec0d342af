/// Items revealed per batch when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Growing prefix of the filtered view revealed to the presentation layer.
///
/// The engine resets the window inside every operation that changes filter
/// criteria or mutates the collection, so a stale revealed count can never
/// leak into a new filter's result.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    page_size: usize,
    revealed: usize,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            revealed: 0,
        }
    }

    pub fn reset(&mut self, filtered_len: usize) {
        self.revealed = self.page_size.min(filtered_len);
    }

    pub fn load_more(&mut self, filtered_len: usize) {
        self.revealed = (self.revealed + self.page_size).min(filtered_len);
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
