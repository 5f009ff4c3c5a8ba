use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;
use crate::models::{join_codes, Card, Color};
use crate::sort::{sort_cards, SortKey};

// ---------------------------------------------------------------------------
// SearchResult — aggregate of every page of one search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub colors: Vec<Color>,
    /// Cards of all pages, in page order and server order within a page.
    pub cards: Vec<Card>,
    pub total_cards: u32,
    /// Sort applied on top of the server order, if any.
    pub sort: Option<SortKey>,
    pub current_page: usize,
    /// Number of upstream pages the aggregate was built from.
    pub pages_fetched: usize,
}

impl SearchResult {
    /// Reorder the aggregated cards client-side. Cache keys are unaffected.
    pub fn sort_by(&mut self, key: SortKey) {
        sort_cards(&mut self.cards, key);
        self.sort = Some(key);
    }

    /// The window of cards shown on a 1-based display page.
    pub fn page_cards(&self, page: usize) -> &[Card] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(config::PAGE_SIZE);
        if start >= self.cards.len() {
            return &[];
        }
        let end = (start + config::PAGE_SIZE).min(self.cards.len());
        &self.cards[start..end]
    }

    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            query: self.query.clone(),
            colors: self.colors.clone(),
            total_cards: self.total_cards,
        }
    }
}

// ---------------------------------------------------------------------------
// PrintList — every printing of one card name
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintList {
    pub name: String,
    pub prints: Vec<Card>,
    pub total_prints: u32,
}

// ---------------------------------------------------------------------------
// SearchSummary — "currently searching for ..." line
// ---------------------------------------------------------------------------

/// Human-readable description of the last search, derived purely from its
/// inputs and the reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub query: String,
    pub colors: Vec<Color>,
    pub total_cards: u32,
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Currently searching for {} cards containing \"{}\"",
            self.total_cards, self.query
        )?;
        if !self.colors.is_empty() {
            write!(f, " with color identity {}", join_codes(&self.colors))?;
        }
        Ok(())
    }
}
