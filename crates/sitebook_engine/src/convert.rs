use std::fs;
use std::io;
use std::path::Path;

use scraper::Html;
use thiserror::Error;

use crate::decode::{decode_html, DecodeError};
use crate::extract::ContentExtractor;
use crate::strip::StripPolicy;

/// Renders an HTML fragment to Markdown text.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, html: &str) -> String;
}

/// `html2md`-backed renderer; emits ATX-style (`#`) headings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdRenderer;

impl MarkdownRenderer for Html2MdRenderer {
    fn render(&self, html: &str) -> String {
        html2md::parse_html(html)
    }
}

#[derive(Debug, Error)]
enum ConvertError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Converts one HTML file to a Markdown fragment: read, decode, strip
/// boilerplate, extract the main content region, render.
///
/// `convert` is total. Any failure is logged and turned into a short
/// placeholder fragment naming the file, so a single bad page never stops
/// a run. Every fragment carries a provenance comment with the source
/// filename.
pub struct PageConverter {
    strip: StripPolicy,
    extractor: ContentExtractor,
    renderer: Box<dyn MarkdownRenderer>,
}

impl PageConverter {
    pub fn new(strip: StripPolicy, extractor: ContentExtractor) -> Self {
        Self {
            strip,
            extractor,
            renderer: Box::new(Html2MdRenderer),
        }
    }

    pub fn with_renderer(
        strip: StripPolicy,
        extractor: ContentExtractor,
        renderer: Box<dyn MarkdownRenderer>,
    ) -> Self {
        Self {
            strip,
            extractor,
            renderer,
        }
    }

    pub fn convert(&self, path: &Path) -> String {
        match self.try_convert(path) {
            Ok(fragment) => fragment,
            Err(err) => {
                log::error!("Error converting {}: {err}", path.display());
                format!("\n\n<!-- Error converting {} -->\n\n", display_name(path))
            }
        }
    }

    fn try_convert(&self, path: &Path) -> Result<String, ConvertError> {
        let bytes = fs::read(path)?;
        let decoded = decode_html(&bytes)?;
        log::debug!(
            "decoded {} as {}",
            path.display(),
            decoded.encoding_label
        );

        let mut doc = Html::parse_document(&decoded.html);
        self.strip.apply(&mut doc);
        let content = self.extractor.extract(&doc);
        let markdown = self.renderer.render(&content);

        Ok(format!(
            "\n\n<!-- Source: {} -->\n\n{markdown}",
            display_name(path)
        ))
    }
}

impl Default for PageConverter {
    fn default() -> Self {
        Self::new(StripPolicy::default(), ContentExtractor::default())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
