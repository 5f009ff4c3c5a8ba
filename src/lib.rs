//! Scryfall search SDK for Rust.
//!
//! Provides a high-level client for the Scryfall card search API. Every
//! page of a search is fetched sequentially, cached in memory for the life
//! of the client, and aggregated into one result. On top of that sit the
//! pieces a card-grid UI needs: client-side sorting, display pagination,
//! per-card render decisions and a prints lookup.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_search::{Color, ScryfallSearch};
//!
//! let sdk = ScryfallSearch::builder().build().unwrap();
//!
//! // All red goblins, every page
//! let result = sdk.search("goblin", &[Color::Red]).unwrap();
//! println!("{}", result.summary());
//!
//! // Every printing of one card
//! let prints = sdk.search_prints("Lightning Bolt").unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod render;
pub mod selection;
pub mod session;
pub mod sort;
pub mod transport;
pub mod url_builder;

#[cfg(feature = "async")]
pub use async_client::AsyncScryfallSearch;
pub use cache::{CacheKey, ResponseCache};
pub use connection::Connection;
pub use error::{Result, ScryfallError};
pub use models::{Card, CardFace, Color, Component, ImageUris, Layout, Page, PrintList, RelatedCard, SearchResult, SearchSummary};
pub use pagination::Pagination;
pub use render::{classify, render, style_tags, CardView, RenderKind, RenderVariant, StyleTag};
pub use selection::{CardEvent, SelectionState};
pub use session::{ColorSelection, ModalObserver, PrintsModal, SearchTicket, SessionState};
pub use sort::SortKey;
pub use transport::{HttpSource, PageSource};
pub use url_builder::SearchUrlBuilder;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ScryfallSearchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ScryfallSearch`] instance.
///
/// Use [`ScryfallSearch::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ScryfallSearchBuilder::build) to create the client.
pub struct ScryfallSearchBuilder {
    base_url: String,
    timeout: Duration,
    page_delay: Duration,
    user_agent: String,
    source: Option<Box<dyn PageSource>>,
}

impl Default for ScryfallSearchBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            page_delay: config::PAGE_DELAY,
            user_agent: config::USER_AGENT.to_string(),
            source: None,
        }
    }
}

impl ScryfallSearchBuilder {
    /// Point the client at another API host (a mirror or a mock server).
    ///
    /// Defaults to `https://api.scryfall.com`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between consecutive page requests of one search.
    ///
    /// Defaults to 50 milliseconds.
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Replace the HTTP transport with a custom [`PageSource`].
    ///
    /// The timeout and user agent settings are ignored when a source is set.
    pub fn source<S>(mut self, source: S) -> Self
    where
        S: PageSource + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Build the client.
    ///
    /// Validates the base URL and creates the HTTP client; no request is
    /// sent until the first search.
    pub fn build(self) -> Result<ScryfallSearch> {
        reqwest::Url::parse(&self.base_url).map_err(|e| {
            ScryfallError::InvalidArgument(format!("Bad base URL {}: {}", self.base_url, e))
        })?;
        let source: Box<dyn PageSource> = match self.source {
            Some(source) => source,
            None => Box::new(HttpSource::new(self.timeout, &self.user_agent)?),
        };
        let conn = Connection::new(source, &self.base_url, self.page_delay);
        Ok(ScryfallSearch { conn })
    }
}

// ---------------------------------------------------------------------------
// ScryfallSearch
// ---------------------------------------------------------------------------

/// The main entry point for the Scryfall search SDK.
///
/// Wraps a [`Connection`] (which owns the transport and the response cache)
/// and exposes the search and prints queries as lightweight borrowing wrappers.
///
/// Created via [`ScryfallSearch::builder()`].
pub struct ScryfallSearch {
    conn: Connection,
}

impl ScryfallSearch {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ScryfallSearchBuilder {
        ScryfallSearchBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card search interface.
    pub fn cards(&self) -> queries::SearchQuery<'_> {
        queries::SearchQuery::new(&self.conn)
    }

    /// Access the prints interface.
    pub fn prints(&self) -> queries::PrintsQuery<'_> {
        queries::PrintsQuery::new(&self.conn)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Search for cards matching `query` within the given color identity.
    ///
    /// See [`SearchQuery::search`](queries::SearchQuery::search).
    pub fn search(&self, query: &str, colors: &[Color]) -> Result<SearchResult> {
        self.cards().search(query, colors)
    }

    /// List every printing of the card named exactly `name`.
    ///
    /// See [`PrintsQuery::search_prints`](queries::PrintsQuery::search_prints).
    pub fn search_prints(&self, name: &str) -> Result<PrintList> {
        self.prints().search_prints(name)
    }

    // -- Cache -------------------------------------------------------------

    /// Number of pages held in the response cache.
    pub fn cached_pages(&self) -> usize {
        self.conn.cached_pages()
    }

    /// Drop every cached page; the next search goes back to the network.
    pub fn clear_cache(&self) {
        self.conn.clear_cache();
        log::debug!("response cache cleared");
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ScryfallSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.conn.cache.borrow();
        write!(
            f,
            "ScryfallSearch(base_url={}, cached_pages={}, hits={}, misses={})",
            self.conn.base_url(),
            cache.len(),
            cache.hits(),
            cache.misses()
        )
    }
}
