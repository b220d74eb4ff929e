//! blogroll-opml - turn a blogroll page into an OPML subscription list
//!
//! The crate fetches one page, keeps its absolute links, collapses them to one
//! link per host and renders the survivors as OPML.
//!
//! # Architecture
//!
//! ```text
//! URL ──▶ PageFetcher ──▶ LinkExtractor ──▶ deduplicate ──▶ OpmlDocument
//!             │                                                  │
//!             ▼                                                  ▼
//!         HTML body                                     "<host> blogroll.ompl"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use blogroll_opml::{run, write_blogroll, FetchConfig};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let blogroll = run("https://blog.example.com/links", &FetchConfig::default()).await?;
//!     let path = write_blogroll(&blogroll, Path::new(".")).await?;
//!
//!     println!("Wrote {} feeds to {}", blogroll.links.len(), path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dedup;
pub mod error;
pub mod extraction;
pub mod netloc;
pub mod opml;
pub mod pipeline;

// Re-exports for convenience
pub use dedup::deduplicate;
pub use error::{Error, FetchError, FileWriteError, ParseError, Result};
pub use extraction::{FetchConfig, Link, LinkExtractor, PageFetcher};
pub use opml::{generate_opml, OpmlDocument};
pub use pipeline::{derive_title, run, write_blogroll, Blogroll};
