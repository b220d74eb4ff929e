//! Link extraction
//!
//! This module pulls absolute links out of a fetched page, in document order.

use crate::error::{ParseError, Result};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Prefix an href must start with to be kept.
///
/// This is a plain string prefix, so `https` passes and so does any scheme that
/// happens to start with these four letters.
pub const HREF_PREFIX: &str = "http";

/// A link found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Anchor text, verbatim (may be empty)
    pub title: String,
    /// The href value
    pub url: String,
}

impl Link {
    /// Create a link from its text and target
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Link extraction functionality
pub struct LinkExtractor;

impl LinkExtractor {
    /// Extract every anchor whose href starts with [`HREF_PREFIX`].
    ///
    /// Anchors without an href are skipped. The parser tolerates malformed
    /// markup, so only a selector failure can make this return an error.
    #[instrument(skip(html), fields(bytes = html.len()))]
    pub fn extract(html: &str) -> Result<Vec<Link>> {
        let document = Html::parse_document(html);
        let selector =
            Selector::parse("a").map_err(|e| ParseError::InvalidSelector(format!("{:?}", e)))?;

        let mut anchors = 0usize;
        let links: Vec<Link> = document
            .select(&selector)
            .inspect(|_| anchors += 1)
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                if !href.starts_with(HREF_PREFIX) {
                    return None;
                }
                Some(Link::new(el.text().collect::<String>(), href))
            })
            .collect();

        debug!("Kept {} of {} anchors", links.len(), anchors);
        Ok(links)
    }
}
