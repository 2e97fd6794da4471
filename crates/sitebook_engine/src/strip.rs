use ego_tree::NodeId;
use scraper::{Html, Selector};
use thiserror::Error;

/// Structural regions that never belong in the merged document: navigation,
/// Sphinx/PyData theme chrome, skip-links, anchor permalinks, and scripting.
pub const DEFAULT_STRIP_SELECTORS: &[&str] = &[
    "nav",
    ".bd-sidebar",
    ".bd-header",
    ".bd-footer",
    ".skip-link",
    ".pst-scroll-pixel-helper",
    ".pst-async-banner-revealer",
    "script",
    "style",
    "noscript",
    ".headerlink",
];

#[derive(Debug, Error)]
#[error("invalid selector '{selector}'")]
pub struct SelectorParseError {
    pub selector: String,
}

/// A configurable denylist of CSS selectors whose matches are removed from
/// the document before content extraction. Removal is destructive: the
/// whole subtree is detached, not hidden.
#[derive(Debug, Clone)]
pub struct StripPolicy {
    selectors: Vec<Selector>,
}

impl StripPolicy {
    /// Build a policy from user-supplied selector strings.
    pub fn new<I, S>(rules: I) -> Result<Self, SelectorParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selectors = Vec::new();
        for rule in rules {
            let rule = rule.as_ref();
            let selector = Selector::parse(rule).map_err(|_| SelectorParseError {
                selector: rule.to_string(),
            })?;
            selectors.push(selector);
        }
        Ok(Self { selectors })
    }

    /// Detach every node matching any selector in the policy.
    pub fn apply(&self, doc: &mut Html) {
        let mut doomed: Vec<NodeId> = Vec::new();
        for selector in &self.selectors {
            doomed.extend(doc.select(selector).map(|element| element.id()));
        }
        for id in doomed {
            if let Some(mut node) = doc.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}

impl Default for StripPolicy {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_STRIP_SELECTORS
                .iter()
                .filter_map(|rule| Selector::parse(rule).ok())
                .collect(),
        }
    }
}
