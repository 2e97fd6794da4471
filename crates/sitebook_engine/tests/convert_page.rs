use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use sitebook_engine::{
    decode_html, ContentExtractor, MarkdownRenderer, PageConverter, StripPolicy,
};
use tempfile::TempDir;

fn write_page(dir: &Path, name: &str, html: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn nav_is_stripped_and_main_content_selected() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "page.html",
        r#"<html><body>
            <nav><a href="/">Site Navigation</a></nav>
            <main><h1>Install Guide</h1><p>Run the installer.</p></main>
        </body></html>"#,
    );

    let fragment = PageConverter::default().convert(&page);
    assert!(fragment.starts_with("\n\n<!-- Source: page.html -->\n\n"));
    assert!(fragment.contains("Install Guide"));
    assert!(fragment.contains("Run the installer."));
    assert!(!fragment.contains("Site Navigation"));
}

#[test]
fn headings_are_atx_style() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "h.html",
        "<html><body><main><h1>Title</h1><h2>Section</h2></main></body></html>",
    );

    let fragment = PageConverter::default().convert(&page);
    assert!(fragment.contains("# Title"));
    assert!(fragment.contains("## Section"));
}

#[test]
fn article_is_selected_when_main_is_absent() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "a.html",
        r#"<html><body>
            <div class="bd-sidebar">sidebar junk</div>
            <article><p>Article body.</p></article>
        </body></html>"#,
    );

    let fragment = PageConverter::default().convert(&page);
    assert!(fragment.contains("Article body."));
    assert!(!fragment.contains("sidebar junk"));
}

#[test]
fn body_is_the_fallback_when_no_candidate_matches() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "plain.html",
        "<html><body><p>Plain page text.</p></body></html>",
    );

    let fragment = PageConverter::default().convert(&page);
    assert!(fragment.contains("Plain page text."));
}

#[test]
fn scripts_and_styles_never_reach_the_markdown() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "scripted.html",
        r#"<html><body><main>
            <script>var leaked = "script-payload";</script>
            <style>.leaked { color: red; }</style>
            <p>Visible text.</p>
        </main></body></html>"#,
    );

    let fragment = PageConverter::default().convert(&page);
    assert!(fragment.contains("Visible text."));
    assert!(!fragment.contains("script-payload"));
    assert!(!fragment.contains("leaked"));
}

#[test]
fn strip_policy_is_extensible_per_site() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "themed.html",
        r#"<html><body><main>
            <div class="site-banner">Cookie banner</div>
            <p>Real content.</p>
        </main></body></html>"#,
    );

    let strip = StripPolicy::new([".site-banner"]).unwrap();
    let converter = PageConverter::new(strip, ContentExtractor::default());
    let fragment = converter.convert(&page);
    assert!(fragment.contains("Real content."));
    assert!(!fragment.contains("Cookie banner"));
}

struct UppercasingRenderer;

impl MarkdownRenderer for UppercasingRenderer {
    fn render(&self, html: &str) -> String {
        html.to_uppercase()
    }
}

#[test]
fn custom_renderer_receives_the_extracted_region() {
    let dir = TempDir::new().unwrap();
    let page = write_page(
        dir.path(),
        "custom.html",
        r#"<html><body>
            <nav>chrome</nav>
            <main><p>payload</p></main>
        </body></html>"#,
    );

    let converter = PageConverter::with_renderer(
        StripPolicy::default(),
        ContentExtractor::default(),
        Box::new(UppercasingRenderer),
    );
    let fragment = converter.convert(&page);
    assert!(fragment.starts_with("\n\n<!-- Source: custom.html -->\n\n"));
    assert!(fragment.contains("PAYLOAD"));
    assert!(!fragment.contains("CHROME"));
}

#[test]
fn invalid_selector_is_rejected_at_policy_construction() {
    let err = StripPolicy::new(["li:::nth"]).unwrap_err();
    assert!(err.to_string().contains("li:::nth"));
}

#[test]
fn unreadable_file_yields_placeholder_not_panic() {
    let fragment =
        PageConverter::default().convert(Path::new("/no/such/dir/missing.html"));
    assert_eq!(fragment, "\n\n<!-- Error converting missing.html -->\n\n");
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBF<p>hello</p>";
    let decoded = decode_html(bytes).unwrap();
    assert_eq!(decoded.html, "<p>hello</p>");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_detects_legacy_encodings_without_bom() {
    let bytes = b"<p>caf\xe9 cr\xe8me</p>"; // latin-1 style bytes
    let decoded = decode_html(bytes).unwrap();
    assert!(decoded.html.contains("café crème"));
}
