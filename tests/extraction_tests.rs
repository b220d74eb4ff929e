//! Extraction module tests
//!
//! These verify link extraction on realistic page markup and the OPML output
//! built from it.

use blogroll_opml::extraction::HREF_PREFIX;
use blogroll_opml::{deduplicate, generate_opml, Link, LinkExtractor, OpmlDocument};
use pretty_assertions::assert_eq;

const SIDEBAR: &str = r#"
<aside id="blogroll">
  <h2>Friends</h2>
  <a href="https://jvns.ca/">Julia Evans</a>
  <a href="https://jvns.ca/atom.xml">Julia's feed</a>
  <a href="http://www.example.org/blog/">Example
     Blog</a>
  <a href="//cdn.example.net/theme.css">protocol-relative</a>
  <a href="javascript:void(0)">Toggle</a>
  <a href="https://fasterthanli.me"><img src="avatar.png" alt="Amos"></a>
</aside>
"#;

#[test]
fn test_href_prefix_constant() {
    assert_eq!(HREF_PREFIX, "http");
}

#[test]
fn test_sidebar_extraction() {
    let links = LinkExtractor::extract(SIDEBAR).unwrap();

    assert_eq!(
        links,
        vec![
            Link::new("Julia Evans", "https://jvns.ca/"),
            Link::new("Julia's feed", "https://jvns.ca/atom.xml"),
            Link::new("Example\n     Blog", "http://www.example.org/blog/"),
            Link::new("", "https://fasterthanli.me"),
        ]
    );
}

#[test]
fn test_sidebar_to_opml() {
    let links = deduplicate(LinkExtractor::extract(SIDEBAR).unwrap());
    let xml = generate_opml(&links, "jvns blogroll");

    assert_eq!(xml.matches("<outline ").count(), 3);
    assert!(xml.contains("text=\"Julia Evans\" xmlUrl=\"https://jvns.ca/\""));
    assert!(xml.contains("text=\"Example&#10;     Blog\""));
    assert!(!xml.contains("atom.xml"));
}

#[test]
fn test_document_from_links() {
    let doc = OpmlDocument::new("x blogroll", &[Link::new("Blog <X>", "http://x.com")]);

    assert_eq!(doc.title, "x blogroll");
    assert_eq!(doc.outlines.len(), 1);
    assert_eq!(doc.outlines[0].text, "Blog <X>");
    assert!(doc
        .to_xml()
        .contains("<outline type=\"rss\" text=\"Blog &lt;X&gt;\" xmlUrl=\"http://x.com\" />"));
}
