//! Sitebook engine: deterministic discovery, page conversion, and merging.
mod convert;
mod decode;
mod discover;
mod extract;
mod merge;
mod mirror;
mod strip;

pub use convert::{Html2MdRenderer, MarkdownRenderer, PageConverter};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use discover::discover;
pub use extract::{ContentExtractor, DEFAULT_CONTENT_SELECTORS};
pub use merge::{merge, MergeError, FRAGMENT_SEPARATOR};
pub use mirror::{mirror, MirrorDir, MirrorError};
pub use strip::{SelectorParseError, StripPolicy, DEFAULT_STRIP_SELECTORS};
