//! Query modules for the Scryfall search SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods
//! returning `Result<T>` with typed payloads.

pub mod prints;
pub mod search;

pub use prints::PrintsQuery;
pub use search::SearchQuery;
