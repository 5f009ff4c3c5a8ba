use serde::{Deserialize, Serialize};

use crate::error::{Result, ScryfallError};
use crate::models::Card;

// ---------------------------------------------------------------------------
// Page — one response of the search endpoint
// ---------------------------------------------------------------------------

/// A single page of a Scryfall list response.
///
/// Only the fields the search loop consumes are modelled; a body missing
/// any of them is a protocol error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Card>,
    pub total_cards: u32,
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl Page {
    /// Decode and validate a response body.
    pub fn from_json(body: &str) -> Result<Page> {
        let page: Page = serde_json::from_str(body)?;
        page.validate()?;
        Ok(page)
    }

    /// Decode and validate an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Page> {
        let page: Page = serde_json::from_value(value)?;
        page.validate()?;
        Ok(page)
    }

    fn validate(&self) -> Result<()> {
        if self.has_more && self.next_page.is_none() {
            return Err(ScryfallError::Protocol(
                "has_more is true but next_page is missing".to_string(),
            ));
        }
        Ok(())
    }

    /// The cursor to follow, present only while more pages remain.
    pub fn next(&self) -> Option<&str> {
        if self.has_more {
            self.next_page.as_deref()
        } else {
            None
        }
    }
}
