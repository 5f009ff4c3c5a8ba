//! Page transport: the seam between the search loop and HTTP.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::error::{Result, ScryfallError};
use crate::models::Page;

/// Something that can resolve a search URL into a [`Page`].
///
/// [`HttpSource`] is the production implementation; tests and offline
/// replays plug in their own.
pub trait PageSource: Send {
    fn fetch_page(&self, url: &str) -> Result<Page>;
}

/// Blocking HTTP transport backed by `reqwest`.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        log::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ScryfallError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            log::warn!("{} returned {}", url, status);
            return Err(ScryfallError::HttpStatus(status));
        }

        let body = resp.text()?;
        Page::from_json(&body).map_err(|e| {
            log::warn!("Malformed response from {}: {}", url, e);
            e
        })
    }
}
