//! Blogroll scraper
//!
//! Fetches a page and writes its outbound links as `<host> blogroll.ompl`.

use anyhow::Context;
use blogroll_opml::{run, write_blogroll, FetchConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Scrape blogroll links and generate an OPML file.
#[derive(Parser, Debug)]
#[command(name = "blogroll")]
#[command(version)]
#[command(about = "Scrape blogroll links and generate an OPML file")]
struct Args {
    /// The URL to scrape for blog links
    #[arg(value_name = "URL")]
    url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Directory to write the OPML file into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = FetchConfig::default();
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let blogroll = run(&args.url, &config)
        .await
        .with_context(|| format!("failed to build blogroll for {}", args.url))?;

    write_blogroll(&blogroll, &args.output_dir)
        .await
        .with_context(|| format!("failed to write {}", blogroll.file_name()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_required() {
        assert!(Args::try_parse_from(["blogroll"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Args::try_parse_from(["blogroll", "--timeout", "0", "http://x.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["blogroll", "http://x.com"]).unwrap();
        assert_eq!(args.url, "http://x.com");
        assert_eq!(args.timeout, None);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.verbose);
    }

    #[test]
    fn test_timeout_flag() {
        let args = Args::try_parse_from(["blogroll", "--timeout", "30", "http://x.com"]).unwrap();
        assert_eq!(args.timeout, Some(30));
    }
}
