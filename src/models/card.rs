use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Layout — printed structure of a card
// ---------------------------------------------------------------------------

/// The `layout` field of a Scryfall card object.
///
/// Only the layouts that change how a card is drawn get their own variant;
/// everything else is kept verbatim in [`Layout::Other`] so it sorts and
/// serializes under its real name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Meld,
    Adventure,
    Saga,
    Leveler,
    Token,
    DoubleFacedToken,
    ArtSeries,
    ReversibleCard,
    Other(String),
}

impl Layout {
    /// Layouts drawn as the front and back of a flipping card.
    pub fn is_sided(&self) -> bool {
        matches!(
            self,
            Layout::Transform | Layout::ReversibleCard | Layout::ModalDfc | Layout::ArtSeries
        )
    }

    /// The layout name exactly as the API spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Layout::Normal => "normal",
            Layout::Split => "split",
            Layout::Flip => "flip",
            Layout::Transform => "transform",
            Layout::ModalDfc => "modal_dfc",
            Layout::Meld => "meld",
            Layout::Adventure => "adventure",
            Layout::Saga => "saga",
            Layout::Leveler => "leveler",
            Layout::Token => "token",
            Layout::DoubleFacedToken => "double_faced_token",
            Layout::ArtSeries => "art_series",
            Layout::ReversibleCard => "reversible_card",
            Layout::Other(name) => name,
        }
    }
}

impl From<String> for Layout {
    fn from(name: String) -> Self {
        match name.as_str() {
            "normal" => Layout::Normal,
            "split" => Layout::Split,
            "flip" => Layout::Flip,
            "transform" => Layout::Transform,
            "modal_dfc" => Layout::ModalDfc,
            "meld" => Layout::Meld,
            "adventure" => Layout::Adventure,
            "saga" => Layout::Saga,
            "leveler" => Layout::Leveler,
            "token" => Layout::Token,
            "double_faced_token" => Layout::DoubleFacedToken,
            "art_series" => Layout::ArtSeries,
            "reversible_card" => Layout::ReversibleCard,
            _ => Layout::Other(name),
        }
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Component — role of a related card in `all_parts`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    MeldPart,
    Token,
    MeldResult,
    ComboPiece,
    #[serde(other)]
    Other,
}

impl Component {
    /// Caption suffix shown next to a meld part, if the component has one.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Component::Token => Some("(Token)"),
            Component::MeldPart => Some("(Part)"),
            Component::MeldResult => Some("(Result)"),
            _ => None,
        }
    }

    /// Position in the meld caption list; unknown components go last.
    pub fn meld_rank(self) -> usize {
        match self {
            Component::MeldPart => 0,
            Component::Token => 1,
            Component::MeldResult => 2,
            _ => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

impl CardFace {
    pub fn image_url(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|u| u.normal.as_deref())
    }
}

/// Stub of a related card listed in `all_parts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    pub id: String,
    pub name: String,
    pub component: Component,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

// ---------------------------------------------------------------------------
// Card — a Scryfall card object
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub layout: Layout,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedCard>>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub collector_number: Option<String>,
    #[serde(default)]
    pub released_at: Option<String>,
}

impl Card {
    /// The card's own (top-level) normal-size image.
    pub fn image_url(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|u| u.normal.as_deref())
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn type_line_contains(&self, needle: &str) -> bool {
        self.type_line
            .as_deref()
            .map_or(false, |t| t.contains(needle))
    }

    /// Split cards carrying the Aftermath keyword.
    pub fn is_aftermath(&self) -> bool {
        self.layout == Layout::Split && self.has_keyword("Aftermath")
    }

    /// Color identity codes joined without a separator (`["U","B"]` → `"UB"`).
    pub fn color_identity_joined(&self) -> String {
        self.color_identity
            .as_deref()
            .map(|codes| codes.concat())
            .unwrap_or_default()
    }
}
