//! Transient per-card UI state: flipped cards, hover, and the card whose
//! prints are open.

use std::collections::BTreeSet;

/// Pointer events the card grid forwards to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Click,
    MouseOver,
    MouseOut,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: BTreeSet<String>,
    hovered: Option<String>,
    clicked_name: Option<String>,
    modal_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer event to `card_id`.
    ///
    /// Events are ignored while the prints modal is open. Returns whether
    /// the state changed.
    pub fn handle(&mut self, card_id: &str, event: CardEvent) -> bool {
        if self.modal_open {
            return false;
        }
        match event {
            CardEvent::Click => {
                self.toggle_active(card_id);
                true
            }
            CardEvent::MouseOver => {
                let changed = self.hovered.as_deref() != Some(card_id);
                self.hovered = Some(card_id.to_string());
                changed
            }
            CardEvent::MouseOut => self.hovered.take().is_some(),
        }
    }

    /// Flip a card over, or back.
    pub fn toggle_active(&mut self, card_id: &str) {
        if !self.active.remove(card_id) {
            self.active.insert(card_id.to_string());
        }
    }

    pub fn is_active(&self, card_id: &str) -> bool {
        self.active.contains(card_id)
    }

    pub fn is_hovered(&self, card_id: &str) -> bool {
        self.hovered.as_deref() == Some(card_id)
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn clicked_name(&self) -> Option<&str> {
        self.clicked_name.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self, card_name: &str) {
        self.clicked_name = Some(card_name.to_string());
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.clicked_name = None;
        self.modal_open = false;
    }

    /// Forget everything; used when a new search replaces the grid.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
