//! The fetch → extract → deduplicate → render pipeline
//!
//! [`run`] does everything except touching the filesystem, so it can be
//! exercised without side effects beyond the one HTTP request.
//! [`write_blogroll`] persists the result.

use crate::dedup::deduplicate;
use crate::error::{FileWriteError, Result};
use crate::extraction::{FetchConfig, Link, LinkExtractor, PageFetcher};
use crate::netloc::netloc;
use crate::opml::generate_opml;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Suffix appended to the host label to form the title
pub const TITLE_SUFFIX: &str = " blogroll";

/// Extension of the written file. Kept as `ompl`, not `opml`.
pub const OUTPUT_EXTENSION: &str = "ompl";

/// A rendered blogroll ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blogroll {
    /// OPML title, also the output file stem
    pub title: String,
    /// Deduplicated links, in page order
    pub links: Vec<Link>,
    /// Serialised OPML document
    pub opml: String,
}

impl Blogroll {
    /// Assemble a blogroll from already-extracted links
    pub fn from_links(source_url: &str, links: Vec<Link>) -> Self {
        let title = derive_title(source_url);
        let links = deduplicate(links);
        let opml = generate_opml(&links, &title);
        Self { title, links, opml }
    }

    /// Name of the output file, `<title>.ompl`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.title, OUTPUT_EXTENSION)
    }
}

/// Derive the OPML title from the page URL.
///
/// Takes the part of the netloc before the first dot, so
/// `http://blog.example.com/feed` becomes `blog blogroll`.
pub fn derive_title(url: &str) -> String {
    let host = netloc(url);
    let label = host.split('.').next().unwrap_or_default();
    format!("{label}{TITLE_SUFFIX}")
}

/// Fetch `url` and build its blogroll
#[instrument(skip(config))]
pub async fn run(url: &str, config: &FetchConfig) -> Result<Blogroll> {
    let fetcher = PageFetcher::new(config.clone())?;
    let html = fetcher.fetch(url).await?;
    let links = LinkExtractor::extract(&html)?;
    info!("Extracted {} links", links.len());

    let blogroll = Blogroll::from_links(url, links);
    info!(
        "Built \"{}\" with {} unique hosts",
        blogroll.title,
        blogroll.links.len()
    );
    Ok(blogroll)
}

/// Write `blogroll` into `dir`, replacing any existing file of the same name.
///
/// The document goes to a temporary sibling first and is renamed into place,
/// so a failed write never leaves a truncated `.ompl` behind.
#[instrument(skip(blogroll), fields(title = %blogroll.title))]
pub async fn write_blogroll(blogroll: &Blogroll, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(blogroll.file_name());
    let tmp_path = dir.join(format!("{}.tmp", blogroll.file_name()));

    debug!("Writing {}", tmp_path.display());
    if let Err(source) = tokio::fs::write(&tmp_path, blogroll.opml.as_bytes()).await {
        if let Err(e) = tokio::fs::remove_file(&tmp_path).await {
            debug!("Could not remove {}: {}", tmp_path.display(), e);
        }
        return Err(FileWriteError::WriteFailed {
            path: tmp_path,
            source,
        }
        .into());
    }

    if let Err(source) = tokio::fs::rename(&tmp_path, &path).await {
        warn!("Leaving {} in place", tmp_path.display());
        return Err(FileWriteError::PersistFailed { path, source }.into());
    }

    info!("Wrote {}", path.display());
    Ok(path)
}
