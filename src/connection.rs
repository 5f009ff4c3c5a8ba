//! Connection: owns the page transport and the session response cache.

use std::cell::RefCell;
use std::fmt;
use std::thread;
use std::time::Duration;

use crate::cache::{CacheKey, ResponseCache};
use crate::error::Result;
use crate::models::Page;
use crate::transport::PageSource;

/// Wraps a [`PageSource`] together with the response cache shared by every
/// search issued through it.
pub struct Connection {
    source: Box<dyn PageSource>,
    /// Pages fetched so far, keyed by query, colors and page number.
    pub cache: RefCell<ResponseCache>,
    base_url: String,
    page_delay: Duration,
}

impl Connection {
    pub fn new(source: Box<dyn PageSource>, base_url: &str, page_delay: Duration) -> Self {
        Self {
            source,
            cache: RefCell::new(ResponseCache::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            page_delay,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }

    /// Resolve `url` through the cache under `key`.
    pub fn fetch_cached(&self, key: CacheKey, url: &str) -> Result<Page> {
        self.cache
            .borrow_mut()
            .get_or_fetch(key, || self.source.fetch_page(url))
    }

    /// Fetch `url` directly, bypassing the cache.
    pub fn fetch_fresh(&self, url: &str) -> Result<Page> {
        self.source.fetch_page(url)
    }

    /// Sleep between consecutive page requests of one search.
    pub fn pause(&self) {
        if !self.page_delay.is_zero() {
            thread::sleep(self.page_delay);
        }
    }

    /// Number of pages currently cached.
    pub fn cached_pages(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Forget every cached page.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("page_delay", &self.page_delay)
            .field("cached_pages", &self.cached_pages())
            .finish()
    }
}
