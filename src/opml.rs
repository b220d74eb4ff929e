//! OPML generation
//!
//! Builds a flat `opml > head > title` / `opml > body > outline*` tree and
//! serialises it compactly: no XML declaration, no indentation, and
//! self-closing empty elements.

use crate::extraction::Link;
use std::fmt;

/// OPML version written on the root element
pub const OPML_VERSION: &str = "2.0";

/// One `<outline>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Value of the `text` attribute
    pub text: String,
    /// Value of the `xmlUrl` attribute
    pub xml_url: String,
}

impl From<&Link> for Outline {
    fn from(link: &Link) -> Self {
        Self {
            text: link.title.clone(),
            xml_url: link.url.clone(),
        }
    }
}

/// An OPML subscription list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpmlDocument {
    /// Contents of `head/title`
    pub title: String,
    /// Body entries, in order
    pub outlines: Vec<Outline>,
}

impl OpmlDocument {
    /// Build a document with one outline per link
    pub fn new(title: impl Into<String>, links: &[Link]) -> Self {
        Self {
            title: title.into(),
            outlines: links.iter().map(Outline::from).collect(),
        }
    }

    /// Serialise to an XML string
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OpmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<opml version=\"{}\">", OPML_VERSION)?;
        f.write_str("<head>")?;
        if self.title.is_empty() {
            f.write_str("<title />")?;
        } else {
            write!(f, "<title>{}</title>", escape_text(&self.title))?;
        }
        f.write_str("</head>")?;

        if self.outlines.is_empty() {
            f.write_str("<body />")?;
        } else {
            f.write_str("<body>")?;
            for outline in &self.outlines {
                write!(
                    f,
                    "<outline type=\"rss\" text=\"{}\" xmlUrl=\"{}\" />",
                    escape_attribute(&outline.text),
                    escape_attribute(&outline.xml_url)
                )?;
            }
            f.write_str("</body>")?;
        }

        f.write_str("</opml>")
    }
}

/// Render `links` under `title` as an OPML string
pub fn generate_opml(links: &[Link], title: &str) -> String {
    OpmlDocument::new(title, links).to_xml()
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in htmlescape::encode_minimal(value).chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#09;"),
            _ => out.push(c),
        }
    }
    out
}
