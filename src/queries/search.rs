//! Card search: builds the query URL, walks every page through the cache and
//! aggregates the results.

use std::collections::HashSet;

use crate::cache::CacheKey;
use crate::connection::Connection;
use crate::error::{Result, ScryfallError};
use crate::models::{Color, SearchResult};
use crate::url_builder::{page_param, SearchUrlBuilder};

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Query interface for the paginated `/cards/search` endpoint.
pub struct SearchQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SearchQuery<'a> {
    /// Create a new `SearchQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Build the first-page URL for a query and color filter.
    pub fn url(&self, query: &str, colors: &[Color]) -> Result<String> {
        SearchUrlBuilder::new(self.conn.base_url())
            .query(query)
            .colors(colors)
            .build()
    }

    /// Search for `query`, optionally restricted to a color identity, and
    /// return every matching card.
    ///
    /// Pages are requested one after another, following `next_page` while
    /// the server reports `has_more`. Each page is looked up in the
    /// connection cache first; consecutive network requests are separated
    /// by the configured page delay.
    ///
    /// # Errors
    ///
    /// * [`ScryfallError::NotFound`] when the query matches no cards.
    /// * [`ScryfallError::InvalidArgument`] for an empty query.
    /// * Transport, status and protocol errors from any page; nothing is
    ///   retried and no partial result is returned.
    pub fn search(&self, query: &str, colors: &[Color]) -> Result<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ScryfallError::InvalidArgument(
                "Search query is empty".to_string(),
            ));
        }

        let mut colors = colors.to_vec();
        colors.sort();
        colors.dedup();

        let mut url = self.url(query, &colors)?;
        let mut visited = HashSet::new();
        let mut cards = Vec::new();
        let mut total_cards = 0;
        let mut pages_fetched = 0;
        let mut hit_network = false;

        loop {
            if !visited.insert(url.clone()) {
                return Err(ScryfallError::Protocol(format!(
                    "next_page points back to an already fetched page: {}",
                    url
                )));
            }

            let key = CacheKey::new(query, &colors, &page_param(&url)?);
            let cached = self.conn.cache.borrow().contains(&key);
            if !cached {
                if hit_network {
                    self.conn.pause();
                }
                hit_network = true;
            }

            let page = self.conn.fetch_cached(key, &url)?;
            pages_fetched += 1;
            total_cards = page.total_cards;
            let next = page.next().map(str::to_string);
            cards.extend(page.data);

            match next {
                Some(next) => url = next,
                None => break,
            }
        }

        log::info!(
            "search {:?} ({} colors): {} cards over {} pages",
            query,
            colors.len(),
            cards.len(),
            pages_fetched
        );

        Ok(SearchResult {
            query: query.to_string(),
            colors,
            cards,
            total_cards,
            sort: None,
            current_page: 1,
            pages_fetched,
        })
    }
}
