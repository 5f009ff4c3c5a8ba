//! Card rendering decisions.
//!
//! Maps a card's layout and image data to one of a few mutually exclusive
//! visual compositions and derives the style tags a UI layer turns into
//! classes. Nothing here touches presentation directly.
//!
//! Precedence, first match wins:
//!
//! 1. a top-level image on anything but a meld or flip card: one static image;
//! 2. flip layout: one image inside an upside-down toggle;
//! 3. card faces: a two-sided flip unit;
//! 4. meld layout with related parts: the image plus ordered part captions.
//!
//! A card matching none of these renders as [`RenderVariant::Empty`].

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{Card, Component, Layout};
use crate::selection::SelectionState;

// ---------------------------------------------------------------------------
// StyleTag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StyleTag {
    DisplayCard,
    Hovered,
    Active,
    FlipCardFront,
    FlipCardBack,
    Siege,
    Split,
    Aftermath,
}

impl StyleTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::DisplayCard => "displayCard",
            StyleTag::Hovered => "hovered",
            StyleTag::Active => "active",
            StyleTag::FlipCardFront => "flip-card-front",
            StyleTag::FlipCardBack => "flip-card-back",
            StyleTag::Siege => "siege",
            StyleTag::Split => "split",
            StyleTag::Aftermath => "aftermath",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join tags into a space-separated class string.
pub fn class_names(tags: &BTreeSet<StyleTag>) -> String {
    tags.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderKind {
    Single,
    UpsideDown,
    DoubleFaced,
    Meld,
    Empty,
}

/// Decide how `card` is drawn.
pub fn classify(card: &Card) -> RenderKind {
    let has_image = card.image_url().is_some();

    if has_image && !matches!(card.layout, Layout::Meld | Layout::Flip) {
        return RenderKind::Single;
    }
    if card.layout == Layout::Flip && has_image {
        return RenderKind::UpsideDown;
    }
    if let Some(faces) = &card.card_faces {
        if !faces.is_empty() && faces.iter().all(|f| f.image_url().is_some()) {
            return RenderKind::DoubleFaced;
        }
    }
    if card.layout == Layout::Meld && card.all_parts.is_some() && has_image {
        return RenderKind::Meld;
    }
    RenderKind::Empty
}

/// Style tags for `card`, or for one of its faces when `face_index` is set.
///
/// Sided layouts tag face 1 as the back and everything else as the front.
/// `siege` goes on face 0 of a transform card whose type line names a
/// Siege. Split cards are tagged `split`, or `aftermath` when they carry
/// that keyword.
pub fn style_tags(card: &Card, face_index: Option<usize>, ui: &SelectionState) -> BTreeSet<StyleTag> {
    let mut tags = BTreeSet::from([StyleTag::DisplayCard]);

    if ui.is_hovered(&card.id) {
        tags.insert(StyleTag::Hovered);
    }
    if ui.is_active(&card.id) {
        tags.insert(StyleTag::Active);
    }
    if card.layout.is_sided() {
        tags.insert(if face_index == Some(1) {
            StyleTag::FlipCardBack
        } else {
            StyleTag::FlipCardFront
        });
    }
    if card.layout == Layout::Transform && card.type_line_contains("Siege") && face_index == Some(0) {
        tags.insert(StyleTag::Siege);
    }
    if card.layout == Layout::Split {
        tags.insert(if card.is_aftermath() {
            StyleTag::Aftermath
        } else {
            StyleTag::Split
        });
    }
    tags
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One drawable image with its alt text and tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    pub tags: BTreeSet<StyleTag>,
}

/// A related part listed under a meld card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeldCaption {
    pub name: String,
    pub component: Component,
    pub label: Option<&'static str>,
}

impl fmt::Display for MeldCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{} {}", self.name, label),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderVariant {
    Single {
        image: ImageView,
    },
    /// Rotated 180° while `upside_down` is set.
    UpsideDown {
        image: ImageView,
        upside_down: bool,
    },
    /// Shows the back while `flipped` is set.
    DoubleFaced {
        faces: Vec<ImageView>,
        flipped: bool,
    },
    Meld {
        image: ImageView,
        parts: Vec<MeldCaption>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub card_id: String,
    pub name: String,
    pub variant: RenderVariant,
}

/// Build the full render descriptor for `card` under the current UI state.
pub fn render(card: &Card, ui: &SelectionState) -> CardView {
    let top_image = |face_index: Option<usize>| ImageView {
        url: card.image_url().unwrap_or_default().to_string(),
        alt: card.name.clone(),
        tags: style_tags(card, face_index, ui),
    };

    let variant = match classify(card) {
        RenderKind::Single => RenderVariant::Single {
            image: top_image(None),
        },
        RenderKind::UpsideDown => RenderVariant::UpsideDown {
            image: top_image(None),
            upside_down: ui.is_active(&card.id),
        },
        RenderKind::DoubleFaced => {
            let faces = card
                .card_faces
                .iter()
                .flatten()
                .enumerate()
                .map(|(i, face)| ImageView {
                    url: face.image_url().unwrap_or_default().to_string(),
                    alt: face.name.clone(),
                    tags: style_tags(card, Some(i), ui),
                })
                .collect();
            RenderVariant::DoubleFaced {
                faces,
                flipped: ui.is_active(&card.id),
            }
        }
        RenderKind::Meld => RenderVariant::Meld {
            image: top_image(None),
            parts: meld_captions(card),
        },
        RenderKind::Empty => RenderVariant::Empty,
    };

    CardView {
        card_id: card.id.clone(),
        name: card.name.clone(),
        variant,
    }
}

/// Related parts of a meld card ordered part, token, result; anything
/// else follows in its original order.
pub fn meld_captions(card: &Card) -> Vec<MeldCaption> {
    let mut parts: Vec<MeldCaption> = card
        .all_parts
        .iter()
        .flatten()
        .map(|p| MeldCaption {
            name: p.name.clone(),
            component: p.component,
            label: p.component.label(),
        })
        .collect();
    parts.sort_by_key(|p| p.component.meld_rank());
    parts
}

/// The image shown for one entry of the prints list.
///
/// Flip and split cards (aftermath included) use their top-level image;
/// other multi-faced cards show their first face.
pub fn print_image(card: &Card) -> Option<&str> {
    if matches!(card.layout, Layout::Flip | Layout::Split) {
        return card.image_url();
    }
    match card.card_faces.as_deref() {
        Some([first, ..]) => first.image_url().or_else(|| card.image_url()),
        _ => card.image_url(),
    }
}
