//! Search URL construction for the `/cards/search` endpoint.
//!
//! Every value is form-encoded through [`reqwest::Url`]'s query serializer,
//! never spliced into the URL by hand. Builder methods return `&mut Self`
//! for chaining.
//!
//! # Example
//!
//! ```rust
//! use scryfall_search::{Color, SearchUrlBuilder};
//! let url = SearchUrlBuilder::new("https://api.scryfall.com")
//!     .query("goblin")
//!     .colors(&[Color::Red])
//!     .build()
//!     .unwrap();
//! assert_eq!(url, "https://api.scryfall.com/cards/search?q=goblin&c=%22R%22");
//! ```

use reqwest::Url;

use crate::config;
use crate::error::{Result, ScryfallError};
use crate::models::{join_codes, Color};

/// Builds `/cards/search` request URLs.
pub struct SearchUrlBuilder {
    base: String,
    order: Option<String>,
    query_terms: Vec<String>,
    colors: Vec<Color>,
    unique: Option<String>,
    page: Option<usize>,
}

impl SearchUrlBuilder {
    /// Create a builder against an API base such as `https://api.scryfall.com`.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            order: None,
            query_terms: Vec::new(),
            colors: Vec::new(),
            unique: None,
            page: None,
        }
    }

    /// Append free text to the `q` parameter.
    pub fn query(&mut self, text: &str) -> &mut Self {
        let text = text.trim();
        if !text.is_empty() {
            self.query_terms.push(text.to_string());
        }
        self
    }

    /// Match one card name exactly: `!"<name>"`.
    pub fn exact_name(&mut self, name: &str) -> &mut Self {
        self.query_terms.push(format!("!\"{}\"", name.trim()));
        self
    }

    /// Include extras (tokens, art series, promos) in the result set.
    pub fn include_extras(&mut self) -> &mut Self {
        self.query_terms.push("include:extras".to_string());
        self
    }

    /// Filter by color identity. Codes are joined without separator in
    /// wheel order; an empty slice adds no filter.
    pub fn colors(&mut self, colors: &[Color]) -> &mut Self {
        self.colors = colors.to_vec();
        self.colors.sort();
        self.colors.dedup();
        self
    }

    /// Server-side ordering, e.g. `"released"`.
    pub fn order(&mut self, order: &str) -> &mut Self {
        self.order = Some(order.to_string());
        self
    }

    /// Uniqueness mode, e.g. `"prints"`.
    pub fn unique(&mut self, unique: &str) -> &mut Self {
        self.unique = Some(unique.to_string());
        self
    }

    /// Request a specific upstream page.
    pub fn page(&mut self, page: usize) -> &mut Self {
        self.page = Some(page);
        self
    }

    /// Build the final URL string.
    pub fn build(&self) -> Result<String> {
        let mut url = Url::parse(&format!("{}{}", self.base, config::SEARCH_PATH))
            .map_err(|e| ScryfallError::InvalidArgument(format!("Bad base URL {}: {}", self.base, e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(order) = &self.order {
                pairs.append_pair("order", order);
            }
            pairs.append_pair("q", &self.query_terms.join(" "));
            if !self.colors.is_empty() {
                pairs.append_pair("c", &format!("\"{}\"", join_codes(&self.colors)));
            }
            if let Some(unique) = &self.unique {
                pairs.append_pair("unique", unique);
            }
            if let Some(page) = self.page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        Ok(url.to_string())
    }
}

/// Value of the `page` query parameter of `url`, `"1"` when absent.
pub fn page_param(url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| ScryfallError::Protocol(format!("Invalid page URL {}: {}", url, e)))?;
    Ok(parsed
        .query_pairs()
        .find(|(k, _)| k == "page")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| "1".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.scryfall.com";

    #[test]
    fn plain_query() {
        let url = SearchUrlBuilder::new(BASE).query("bolt").build().unwrap();
        assert_eq!(url, "https://api.scryfall.com/cards/search?q=bolt");
    }

    #[test]
    fn query_with_spaces_is_form_encoded() {
        let url = SearchUrlBuilder::new(BASE)
            .query("lightning bolt")
            .build()
            .unwrap();
        assert!(url.ends_with("?q=lightning+bolt"));
    }

    #[test]
    fn colors_are_joined_and_quoted() {
        let url = SearchUrlBuilder::new(BASE)
            .query("dragon")
            .colors(&[Color::Red, Color::Blue, Color::Red])
            .build()
            .unwrap();
        assert!(url.ends_with("q=dragon&c=%22UR%22"));
    }

    #[test]
    fn empty_colors_add_no_filter() {
        let url = SearchUrlBuilder::new(BASE)
            .query("dragon")
            .colors(&[])
            .build()
            .unwrap();
        assert!(!url.contains("c="));
    }

    #[test]
    fn prints_query_shape() {
        let url = SearchUrlBuilder::new(BASE)
            .order("released")
            .exact_name("Opt")
            .include_extras()
            .unique("prints")
            .build()
            .unwrap();
        assert_eq!(
            url,
            "https://api.scryfall.com/cards/search?order=released&q=%21%22Opt%22+include%3Aextras&unique=prints"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let url = SearchUrlBuilder::new("http://localhost:8080/")
            .query("x")
            .build()
            .unwrap();
        assert_eq!(url, "http://localhost:8080/cards/search?q=x");
    }

    #[test]
    fn bad_base_is_invalid_argument() {
        let err = SearchUrlBuilder::new("not a url").query("x").build().unwrap_err();
        assert!(matches!(err, ScryfallError::InvalidArgument(_)));
    }

    #[test]
    fn page_param_defaults_to_one() {
        assert_eq!(page_param("https://api.scryfall.com/cards/search?q=x").unwrap(), "1");
        assert_eq!(
            page_param("https://api.scryfall.com/cards/search?format=json&page=3&q=x").unwrap(),
            "3"
        );
    }

    #[test]
    fn page_param_rejects_garbage() {
        assert!(matches!(
            page_param("::nope::").unwrap_err(),
            ScryfallError::Protocol(_)
        ));
    }
}
