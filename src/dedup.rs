//! Domain deduplication
//!
//! Keeps the first link seen for each netloc and drops the rest outright.

use crate::extraction::Link;
use crate::netloc::netloc;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Collapse `links` to one entry per netloc, preserving first-seen order.
///
/// Links without a netloc share the empty key, so at most one of them
/// survives.
#[instrument(skip(links), fields(input = links.len()))]
pub fn deduplicate(links: Vec<Link>) -> Vec<Link> {
    let mut seen: HashSet<String> = HashSet::with_capacity(links.len());
    let mut kept = Vec::with_capacity(links.len());

    for link in links {
        if seen.insert(netloc(&link.url)) {
            kept.push(link);
        }
    }

    debug!("{} links left after deduplication", kept.len());
    kept
}
