//! Client-side ordering of an aggregated search result.
//!
//! Comparison is locale-style: case-insensitive first, lowercase before
//! uppercase on ties. A card missing the sorted field compares equal to
//! every other card, so the comparator is not a total order and the sort
//! below is a stable merge sort rather than `slice::sort_by`, which may
//! panic on inconsistent comparators.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ScryfallError;
use crate::models::Card;

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Rarity,
    Layout,
    Name,
    ColorIdentity,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Rarity,
        SortKey::Layout,
        SortKey::Name,
        SortKey::ColorIdentity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rarity => "rarity",
            SortKey::Layout => "layout",
            SortKey::Name => "name",
            SortKey::ColorIdentity => "color_identity",
        }
    }

    /// The string a card is compared on, or `None` when the field is absent.
    ///
    /// A missing color identity counts as the empty identity rather than
    /// an absent field.
    pub fn field<'c>(self, card: &'c Card) -> Option<Cow<'c, str>> {
        match self {
            SortKey::Rarity => card.rarity.as_deref().map(Cow::Borrowed),
            SortKey::Layout => Some(Cow::Borrowed(card.layout.as_str())),
            SortKey::Name => Some(Cow::Borrowed(card.name.as_str())),
            SortKey::ColorIdentity => Some(Cow::Owned(card.color_identity_joined())),
        }
    }

    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        compare_by_locale(self.field(a).as_deref(), self.field(b).as_deref())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ScryfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ScryfallError::InvalidArgument(format!("Unknown sort key: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Compare two optional values; an absent value is equal to anything.
pub fn compare_by_locale(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => locale_cmp(a, b),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive comparison with lowercase ordered before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| case_order(a, b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Stable in-place sort of `cards` by `key`.
pub fn sort_cards(cards: &mut Vec<Card>, key: SortKey) {
    let order = stable_order(cards, |a, b| key.compare(a, b));
    let mut slots: Vec<Option<Card>> = cards.drain(..).map(Some).collect();
    cards.extend(order.into_iter().filter_map(|i| slots[i].take()));
}

/// Indices of `items` in stable sorted order under `cmp`.
fn stable_order<T, F>(items: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut idx: Vec<usize> = (0..items.len()).collect();
    let mut buf = idx.clone();
    let mut width = 1;
    while width < idx.len() {
        let mut start = 0;
        while start < idx.len() {
            let mid = (start + width).min(idx.len());
            let end = (start + 2 * width).min(idx.len());
            let (mut l, mut r, mut out) = (start, mid, start);
            while l < mid && r < end {
                // Take from the right only when strictly smaller, keeping ties in place.
                if cmp(&items[idx[r]], &items[idx[l]]) == Ordering::Less {
                    buf[out] = idx[r];
                    r += 1;
                } else {
                    buf[out] = idx[l];
                    l += 1;
                }
                out += 1;
            }
            buf[out..out + (mid - l)].copy_from_slice(&idx[l..mid]);
            out += mid - l;
            buf[out..out + (end - r)].copy_from_slice(&idx[r..end]);
            start = end;
        }
        std::mem::swap(&mut idx, &mut buf);
        width *= 2;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(id: &str, extra: serde_json::Value) -> Card {
        let mut value = json!({ "id": id, "name": id, "layout": "normal" });
        if let (Some(obj), Some(more)) = (value.as_object_mut(), extra.as_object()) {
            for (k, v) in more {
                obj.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(value).unwrap()
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn color_identity_compares_joined_codes() {
        let mut cards = vec![
            card("ub", json!({ "color_identity": ["U", "B"] })),
            card("b", json!({ "color_identity": ["B"] })),
        ];
        sort_cards(&mut cards, SortKey::ColorIdentity);
        assert_eq!(ids(&cards), vec!["b", "ub"]);
    }

    #[test]
    fn missing_color_identity_counts_as_colorless() {
        let mut cards = vec![
            card("g", json!({ "color_identity": ["G"] })),
            card("none", json!({})),
        ];
        sort_cards(&mut cards, SortKey::ColorIdentity);
        assert_eq!(ids(&cards), vec!["none", "g"]);
    }

    #[test]
    fn missing_field_keeps_relative_position() {
        let mut cards = vec![
            card("x", json!({ "rarity": "rare" })),
            card("y", json!({})),
            card("z", json!({ "rarity": "common" })),
        ];
        sort_cards(&mut cards, SortKey::Rarity);
        // "y" compares equal to everything, so it stays right behind "x".
        assert_eq!(ids(&cards), vec!["z", "x", "y"]);
    }

    #[test]
    fn name_sort_is_case_insensitive_and_stable() {
        let mut cards = vec![
            card("2", json!({ "name": "bolt" })),
            card("1", json!({ "name": "Abrade" })),
            card("3", json!({ "name": "Bolt" })),
            card("4", json!({ "name": "bolt" })),
        ];
        sort_cards(&mut cards, SortKey::Name);
        assert_eq!(ids(&cards), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn locale_cmp_orders_lowercase_first_on_ties() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("B", "a"), Ordering::Greater);
        assert_eq!(locale_cmp("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn compare_by_locale_treats_absent_as_equal() {
        assert_eq!(compare_by_locale(None, Some("x")), Ordering::Equal);
        assert_eq!(compare_by_locale(Some("x"), None), Ordering::Equal);
    }

    #[test]
    fn sort_key_parses_select_values() {
        assert_eq!("color_identity".parse::<SortKey>().unwrap(), SortKey::ColorIdentity);
        assert!("price".parse::<SortKey>().is_err());
    }

    #[test]
    fn large_input_sorts_by_layout() {
        let layouts = ["transform", "flip", "normal", "split", "meld"];
        let mut cards: Vec<Card> = (0..37)
            .map(|i| card(&format!("c{i}"), json!({ "layout": layouts[i % layouts.len()] })))
            .collect();
        sort_cards(&mut cards, SortKey::Layout);
        assert_eq!(cards.len(), 37);
        let sorted: Vec<&str> = cards.iter().map(|c| c.layout.as_str()).collect();
        let mut expected = sorted.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn unmodelled_layouts_sort_by_their_own_names() {
        let mut cards = vec![
            card("p", json!({ "layout": "prototype" })),
            card("c", json!({ "layout": "class" })),
            card("n", json!({ "layout": "normal" })),
        ];
        sort_cards(&mut cards, SortKey::Layout);
        assert_eq!(ids(&cards), vec!["c", "n", "p"]);
    }
}
