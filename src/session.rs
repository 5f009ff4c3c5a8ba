//! Search session: the state a card-grid UI keeps between user actions.
//!
//! Holds the query input, the pending color selection, the current result
//! and its display order, pagination, per-card selection state and the
//! prints modal. Network work goes through a borrowed [`ScryfallSearch`];
//! failures are turned into a user-facing message and the session stays
//! usable.
//!
//! Each search is identified by a [`SearchTicket`]. Only the result for the
//! most recently issued ticket is applied; anything older is dropped.

use std::collections::BTreeSet;

use crate::error::{Result, ScryfallError};
use crate::models::{Card, Color, PrintList, SearchResult, SearchSummary};
use crate::pagination::Pagination;
use crate::render::{self, CardView};
use crate::selection::{CardEvent, SelectionState};
use crate::sort::SortKey;
use crate::ScryfallSearch;

// ---------------------------------------------------------------------------
// ColorSelection
// ---------------------------------------------------------------------------

/// Color checkboxes ticked since the last search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSelection {
    colors: BTreeSet<Color>,
}

impl ColorSelection {
    /// Tick or untick `color`. Returns whether it is now selected.
    pub fn toggle(&mut self, color: Color) -> bool {
        if self.colors.remove(&color) {
            false
        } else {
            self.colors.insert(color);
            true
        }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Selected colors in wheel order.
    pub fn to_vec(&self) -> Vec<Color> {
        self.colors.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

// ---------------------------------------------------------------------------
// SearchTicket
// ---------------------------------------------------------------------------

/// The committed inputs of one search and its generation number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub colors: Vec<Color>,
    /// Display page to show once the result arrives.
    pub page: usize,
}

// ---------------------------------------------------------------------------
// PrintsModal
// ---------------------------------------------------------------------------

/// Hook for document-level effects of the prints modal, such as locking
/// page scrolling while it is open.
pub trait ModalObserver {
    fn on_open(&mut self, _card_name: &str) {}
    fn on_close(&mut self) {}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintsModal {
    pub card_name: String,
    pub prints: Vec<Card>,
    pub total_prints: u32,
    pub error: Option<String>,
}

impl PrintsModal {
    /// `(card id, image url)` for every print that has an image.
    pub fn images(&self) -> Vec<(&str, &str)> {
        self.prints
            .iter()
            .filter_map(|p| render::print_image(p).map(|url| (p.id.as_str(), url)))
            .collect()
    }

    /// Header line, e.g. `"Opt - Total Prints found: 42"`.
    pub fn title(&self) -> String {
        format!("{} - Total Prints found: {}", self.card_name, self.total_prints)
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SessionState {
    query: String,
    colors: ColorSelection,
    result: Option<SearchResult>,
    sort: Option<SortKey>,
    pagination: Pagination,
    loading: bool,
    error: Option<String>,
    selection: SelectionState,
    prints: Option<PrintsModal>,
    summary: Option<SearchSummary>,
    generation: u64,
    last_search: Option<(String, Vec<Color>)>,
    observer: Option<Box<dyn ModalObserver>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a hook notified when the prints modal opens and closes.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ModalObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    // -- Inputs ------------------------------------------------------------

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle_color(&mut self, color: Color) -> bool {
        self.colors.toggle(color)
    }

    pub fn colors(&self) -> &ColorSelection {
        &self.colors
    }

    // -- Searching ---------------------------------------------------------

    /// Run a search for the current query and colors.
    ///
    /// Returns `true` when a result is now displayed. On failure the card
    /// list is cleared and [`error()`](Self::error) holds the message.
    pub fn search(&mut self, sdk: &ScryfallSearch) -> bool {
        let ticket = self.begin_search();
        let result = sdk.search(&ticket.query, &ticket.colors);
        self.finish_search(ticket, result)
    }

    /// Commit the current inputs and start a new search generation.
    ///
    /// Clears the displayed cards, the sort and any error, and empties the
    /// query input. The color selection is kept until the search succeeds.
    pub fn begin_search(&mut self) -> SearchTicket {
        let query = std::mem::take(&mut self.query);
        let colors = self.colors.to_vec();
        let ticket = self.issue_ticket(query, colors, 1);
        self.result = None;
        self.sort = None;
        self.error = None;
        self.selection.reset();
        ticket
    }

    /// Apply the outcome of a search started with [`begin_search`](Self::begin_search).
    ///
    /// Results for any ticket other than the latest are discarded and
    /// `false` is returned.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<SearchResult>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale search {:?} (generation {} < {})",
                ticket.query,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(mut result) => {
                if let Some(key) = self.sort {
                    result.sort_by(key);
                }
                self.pagination.reset(result.total_cards as usize);
                if ticket.page > 1 && self.pagination.go_to(ticket.page).is_err() {
                    log::warn!("page {} no longer exists; showing page 1", ticket.page);
                }
                result.current_page = self.pagination.current_page;
                self.summary = Some(result.summary());
                self.last_search = Some((ticket.query, ticket.colors));
                self.colors.clear();
                self.error = None;
                self.result = Some(result);
                true
            }
            Err(e) => {
                log::warn!("search {:?} failed: {}", ticket.query, e);
                self.result = None;
                self.summary = None;
                self.pagination.reset(0);
                self.error = Some(e.user_message().to_string());
                false
            }
        }
    }

    fn issue_ticket(&mut self, query: String, colors: Vec<Color>, page: usize) -> SearchTicket {
        self.generation += 1;
        self.loading = true;
        SearchTicket {
            generation: self.generation,
            query,
            colors,
            page,
        }
    }

    // -- Pagination --------------------------------------------------------

    /// Show display page `page`, re-running the last search first.
    ///
    /// The re-run is served from the response cache when the pages are
    /// already known. Errors only for an invalid target; fetch failures are
    /// reported through [`error()`](Self::error).
    pub fn go_to_page(&mut self, sdk: &ScryfallSearch, page: usize) -> Result<bool> {
        let (query, colors) = self.last_search.clone().ok_or_else(|| {
            ScryfallError::InvalidArgument("No search to paginate".to_string())
        })?;
        self.pagination.check(page)?;
        let ticket = self.issue_ticket(query, colors, page);
        let result = sdk.search(&ticket.query, &ticket.colors);
        Ok(self.finish_search(ticket, result))
    }

    pub fn next_page(&mut self, sdk: &ScryfallSearch) -> Result<bool> {
        let page = self.pagination.current_page + 1;
        self.go_to_page(sdk, page)
    }

    pub fn prev_page(&mut self, sdk: &ScryfallSearch) -> Result<bool> {
        let page = self.pagination.current_page.saturating_sub(1);
        self.go_to_page(sdk, page)
    }

    pub fn page_buttons(&self) -> Vec<usize> {
        self.pagination.page_buttons()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    // -- Sorting -----------------------------------------------------------

    /// Reorder the displayed cards. The choice sticks across page changes.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(key);
        if let Some(result) = self.result.as_mut() {
            result.sort_by(key);
        }
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    // -- Display -----------------------------------------------------------

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Cards on the current display page.
    pub fn visible_cards(&self) -> &[Card] {
        match &self.result {
            Some(result) => result.page_cards(self.pagination.current_page),
            None => &[],
        }
    }

    /// Render descriptors for the current display page.
    pub fn card_views(&self) -> Vec<CardView> {
        self.visible_cards()
            .iter()
            .map(|card| render::render(card, &self.selection))
            .collect()
    }

    pub fn summary(&self) -> Option<&SearchSummary> {
        self.summary.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // -- Card interaction --------------------------------------------------

    pub fn handle_card_event(&mut self, card_id: &str, event: CardEvent) -> bool {
        self.selection.handle(card_id, event)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // -- Prints modal ------------------------------------------------------

    /// Open the prints modal for `card_name` and load its printings.
    ///
    /// Returns `true` when the prints were loaded; on failure the modal
    /// stays open showing the error.
    pub fn open_prints(&mut self, sdk: &ScryfallSearch, card_name: &str) -> bool {
        self.selection.open_modal(card_name);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_open(card_name);
        }
        self.loading = true;
        let outcome = sdk.search_prints(card_name);
        self.loading = false;

        let mut modal = PrintsModal {
            card_name: card_name.to_string(),
            ..PrintsModal::default()
        };
        let loaded = match outcome {
            Ok(PrintList {
                prints,
                total_prints,
                ..
            }) => {
                modal.prints = prints;
                modal.total_prints = total_prints;
                true
            }
            Err(e) => {
                log::warn!("prints of {:?} failed: {}", card_name, e);
                modal.error = Some(e.user_message().to_string());
                false
            }
        };
        self.prints = Some(modal);
        loaded
    }

    /// Close the prints modal and drop its contents.
    pub fn close_prints(&mut self) {
        if self.prints.take().is_none() && !self.selection.is_modal_open() {
            return;
        }
        self.selection.close_modal();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_close();
        }
    }

    pub fn prints(&self) -> Option<&PrintsModal> {
        self.prints.as_ref()
    }
}
