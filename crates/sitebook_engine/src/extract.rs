use scraper::{Html, Selector};

use crate::strip::SelectorParseError;

/// Candidate containers for the main content, tried in order.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &["main", "article", ".bd-content"];

/// Picks the "main content" region of a page, first-match-wins over an
/// ordered candidate list, falling back to `<body>` and finally to the
/// whole parsed document.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    candidates: Vec<Selector>,
}

impl ContentExtractor {
    pub fn new<I, S>(candidates: I) -> Result<Self, SelectorParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for rule in candidates {
            let rule = rule.as_ref();
            let selector = Selector::parse(rule).map_err(|_| SelectorParseError {
                selector: rule.to_string(),
            })?;
            parsed.push(selector);
        }
        Ok(Self { candidates: parsed })
    }

    /// Returns the outer HTML of the selected region.
    pub fn extract(&self, doc: &Html) -> String {
        for selector in &self.candidates {
            if let Some(node) = doc.select(selector).next() {
                return node.html();
            }
        }
        if let Some(body) = Selector::parse("body")
            .ok()
            .and_then(|sel| doc.select(&sel).next())
        {
            return body.html();
        }
        doc.root_element().html()
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CONTENT_SELECTORS
                .iter()
                .filter_map(|rule| Selector::parse(rule).ok())
                .collect(),
        }
    }
}
