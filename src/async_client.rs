//! Async wrapper around [`ScryfallSearch`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client and the inter-page delay do their work.
//!
//! # Example
//!
//! ```no_run
//! use scryfall_search::{AsyncScryfallSearch, Color};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncScryfallSearch::builder().build().await.unwrap();
//!
//!     let result = sdk.search("goblin", &[Color::Red]).await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let pages = sdk.run(|s| Ok(s.cached_pages())).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, ScryfallError};
use crate::models::{Color, PrintList, SearchResult};
use crate::ScryfallSearch;

// ---------------------------------------------------------------------------
// AsyncScryfallSearchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncScryfallSearch`] instance.
#[derive(Default)]
pub struct AsyncScryfallSearchBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    page_delay: Option<Duration>,
    user_agent: Option<String>,
}

impl AsyncScryfallSearchBuilder {
    /// Point the client at another API host.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the pause between consecutive page requests of one search.
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = Some(delay);
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is created on the blocking thread pool so
    /// it never touches the async event loop.
    pub async fn build(self) -> Result<AsyncScryfallSearch> {
        tokio::task::spawn_blocking(move || {
            let mut builder = ScryfallSearch::builder();
            if let Some(url) = &self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(delay) = self.page_delay {
                builder = builder.page_delay(delay);
            }
            if let Some(agent) = &self.user_agent {
                builder = builder.user_agent(agent);
            }
            let sdk = builder.build()?;
            Ok(AsyncScryfallSearch {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| ScryfallError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncScryfallSearch
// ---------------------------------------------------------------------------

/// Async wrapper around [`ScryfallSearch`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`ScryfallSearch`] is
/// protected by a [`Mutex`] since its cache uses `RefCell` internally, so
/// concurrent calls run one after another and share the cache.
pub struct AsyncScryfallSearch {
    inner: Arc<Mutex<ScryfallSearch>>,
}

impl AsyncScryfallSearch {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncScryfallSearchBuilder {
        AsyncScryfallSearchBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ScryfallSearch) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| ScryfallError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| ScryfallError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Search asynchronously. See [`ScryfallSearch::search`].
    pub async fn search(&self, query: &str, colors: &[Color]) -> Result<SearchResult> {
        let query = query.to_string();
        let colors = colors.to_vec();
        self.run(move |s| s.search(&query, &colors)).await
    }

    /// List prints asynchronously. See [`ScryfallSearch::search_prints`].
    pub async fn search_prints(&self, name: &str) -> Result<PrintList> {
        let name = name.to_string();
        self.run(move |s| s.search_prints(&name)).await
    }

    /// Number of pages held in the response cache.
    pub async fn cached_pages(&self) -> Result<usize> {
        self.run(|s| Ok(s.cached_pages())).await
    }

    /// Close the client, releasing the HTTP client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self))
            .await
            .map_err(|e| ScryfallError::InvalidArgument(format!("Task join error: {e}")))
    }
}
