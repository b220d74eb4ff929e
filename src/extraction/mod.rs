//! Page fetching and link extraction
//!
//! The first pipeline stage: download the page, then scan it for anchors.

pub mod fetch;
pub mod links;

pub use fetch::{FetchConfig, PageFetcher};
pub use links::{Link, LinkExtractor, HREF_PREFIX};
