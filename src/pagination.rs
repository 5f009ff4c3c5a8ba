//! Display pagination over an aggregated search result.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Result, ScryfallError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total_cards: usize,
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    pub fn new(total_cards: usize) -> Self {
        Self {
            total_cards,
            current_page: 1,
            page_size: config::PAGE_SIZE,
        }
    }

    /// `ceil(total / page_size)`; zero when there are no cards.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_cards.div_ceil(self.page_size)
    }

    /// One button per page, numbered from 1.
    pub fn page_buttons(&self) -> Vec<usize> {
        (1..=self.page_count()).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Check that `page` is a valid target without moving.
    pub fn check(&self, page: usize) -> Result<()> {
        if page == 0 || page > self.page_count() {
            return Err(ScryfallError::InvalidArgument(format!(
                "Page {} out of range 1..={}",
                page,
                self.page_count()
            )));
        }
        Ok(())
    }

    pub fn go_to(&mut self, page: usize) -> Result<()> {
        self.check(page)?;
        self.current_page = page;
        Ok(())
    }

    pub fn reset(&mut self, total_cards: usize) {
        *self = Self::new(total_cards);
    }
}
