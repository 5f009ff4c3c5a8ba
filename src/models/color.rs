use serde::{Deserialize, Serialize};
use std::fmt;

/// A color-identity code as used by the `c` filter and `color_identity`.
///
/// Ordering follows the WUBRG wheel with colorless last, which is also the
/// order codes are joined in when building a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "C")]
    Colorless,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Colorless => 'C',
        }
    }

    /// Parse a single color code, case-insensitively.
    pub fn from_code(code: char) -> Option<Color> {
        match code.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'C' => Some(Color::Colorless),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Join color codes with no separator, e.g. `[Blue, Black]` → `"UB"`.
pub fn join_codes<'a, I>(colors: I) -> String
where
    I: IntoIterator<Item = &'a Color>,
{
    colors.into_iter().map(|c| c.code()).collect()
}
