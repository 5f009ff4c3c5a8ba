use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";
pub const SEARCH_PATH: &str = "/cards/search";

/// Cards per page as served by the search endpoint.
pub const PAGE_SIZE: usize = 175;

/// Pause between consecutive page requests of one search. Scryfall asks
/// clients to stay under ten requests per second.
pub const PAGE_DELAY: Duration = Duration::from_millis(50);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("scryfall-search/", env!("CARGO_PKG_VERSION"));

pub const NO_CARDS_MESSAGE: &str =
    "No cards found. Your search didn\u{2019}t match any cards, please try again.";
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred. Please retry or check your search input.";

