//! Prints lookup: every printing of one exact card name. Never cached.

use std::collections::HashSet;

use crate::connection::Connection;
use crate::error::{Result, ScryfallError};
use crate::models::PrintList;
use crate::url_builder::SearchUrlBuilder;

// ---------------------------------------------------------------------------
// PrintsQuery
// ---------------------------------------------------------------------------

/// Query interface for the alternate printings of a card.
pub struct PrintsQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PrintsQuery<'a> {
    /// Create a new `PrintsQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// URL listing every print of `name`, extras included, ordered by
    /// release date.
    pub fn url(&self, name: &str) -> Result<String> {
        SearchUrlBuilder::new(self.conn.base_url())
            .order("released")
            .exact_name(name)
            .include_extras()
            .unique("prints")
            .build()
    }

    /// Fetch all printings of the card named exactly `name`.
    ///
    /// Always goes to the network; the connection cache is neither read
    /// nor written.
    pub fn search_prints(&self, name: &str) -> Result<PrintList> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScryfallError::InvalidArgument(
                "Card name is empty".to_string(),
            ));
        }

        let mut url = self.url(name)?;
        let mut visited = HashSet::new();
        let mut prints = Vec::new();
        let mut total_prints = 0;
        let mut first = true;

        loop {
            if !visited.insert(url.clone()) {
                return Err(ScryfallError::Protocol(format!(
                    "next_page points back to an already fetched page: {}",
                    url
                )));
            }
            if !first {
                self.conn.pause();
            }
            first = false;

            let page = self.conn.fetch_fresh(&url)?;
            total_prints = page.total_cards;
            let next = page.next().map(str::to_string);
            prints.extend(page.data);

            match next {
                Some(next) => url = next,
                None => break,
            }
        }

        log::info!("prints of {:?}: {}", name, prints.len());

        Ok(PrintList {
            name: name.to_string(),
            prints,
            total_prints,
        })
    }
}
