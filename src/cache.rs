//! In-memory look-aside cache for search pages.
//!
//! Pages are keyed by the query text, the joined color filter and the page
//! number. Entries live as long as the owning [`Connection`](crate::Connection):
//! there is no eviction, no TTL and nothing is written to disk.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::models::{join_codes, Color, Page};

// ---------------------------------------------------------------------------
// CacheKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    /// Selected color codes joined without a separator.
    pub colors: String,
    /// The `page` parameter of the request URL, `"1"` when absent.
    pub page: String,
}

impl CacheKey {
    pub fn new(query: &str, colors: &[Color], page: &str) -> Self {
        Self {
            query: query.to_string(),
            colors: join_codes(colors),
            page: page.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.query, self.colors, self.page)
    }
}

// ---------------------------------------------------------------------------
// ResponseCache
// ---------------------------------------------------------------------------

/// Session-lifetime map from [`CacheKey`] to a fetched [`Page`].
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, Page>,
    hits: u64,
    misses: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached page for `key`, or run `fetcher` and store its page.
    ///
    /// Failed fetches are not stored, so the next call for the same key
    /// goes to the network again.
    pub fn get_or_fetch<F>(&mut self, key: CacheKey, fetcher: F) -> Result<Page>
    where
        F: FnOnce() -> Result<Page>,
    {
        if let Some(page) = self.entries.get(&key) {
            self.hits += 1;
            log::debug!("cache hit: {}", key);
            return Ok(page.clone());
        }
        self.misses += 1;
        log::debug!("cache miss: {}", key);
        let page = fetcher()?;
        self.entries.insert(key, page.clone());
        Ok(page)
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Page> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every stored page and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScryfallError;
    use std::cell::Cell;

    fn page(total: u32) -> Page {
        Page {
            data: vec![],
            total_cards: total,
            has_more: false,
            next_page: None,
        }
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let mut cache = ResponseCache::new();
        let calls = Cell::new(0);
        let key = CacheKey::new("elf", &[Color::Green], "1");

        let first = cache
            .get_or_fetch(key.clone(), || {
                calls.set(calls.get() + 1);
                Ok(page(7))
            })
            .unwrap();
        let second = cache
            .get_or_fetch(key, || {
                calls.set(calls.get() + 1);
                Ok(page(99))
            })
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn keys_differ_by_colors_and_page() {
        let mut cache = ResponseCache::new();
        for key in [
            CacheKey::new("elf", &[], "1"),
            CacheKey::new("elf", &[Color::Green], "1"),
            CacheKey::new("elf", &[Color::Green], "2"),
        ] {
            cache.get_or_fetch(key, || Ok(page(1))).unwrap();
        }
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.hits(), 0);
    }

    #[test]
    fn failed_fetch_is_not_stored() {
        let mut cache = ResponseCache::new();
        let key = CacheKey::new("zzz", &[], "1");
        let err = cache
            .get_or_fetch(key.clone(), || Err(ScryfallError::NotFound("zzz".into())))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!cache.contains(&key));

        cache.get_or_fetch(key.clone(), || Ok(page(1))).unwrap();
        assert!(cache.contains(&key));
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = ResponseCache::new();
        cache
            .get_or_fetch(CacheKey::new("a", &[], "1"), || Ok(page(1)))
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn key_display_joins_parts() {
        let key = CacheKey::new("bolt", &[Color::Blue, Color::Red], "3");
        assert_eq!(key.to_string(), "bolt|UR|3");
    }
}
