use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use radiorus::feed::rss::to_channel;
use radiorus::{Patterns, ReqwestClient, RetryPolicy, build_feed_with_retry, listing_url, write_feed};

/// Generate a podcast feed from a Radio Rossii programme page
#[derive(Parser, Debug)]
#[command(name = "radiorus")]
#[command(about = "Generate a podcast feed from a Radio Rossii programme page")]
#[command(version)]
struct Args {
    /// Directory to put the resulting RSS file in
    #[arg(short, long, env = "RADIORUS_PATH", default_value = "./")]
    path: PathBuf,

    /// Programme (brand) number, defaults to Aerostat
    #[arg(short, long, env = "RADIORUS_BRAND", default_value = "57083")]
    brand: String,

    /// Read the programme from smotrim.ru directly
    #[arg(long, env = "RADIORUS_SMOTRIM")]
    smotrim: bool,

    /// Extra attempts when the listing page is caught mid-update
    #[arg(long, env = "RADIORUS_RETRIES", default_value = "0")]
    retries: u32,

    /// Seconds to wait before each extra attempt
    #[arg(long, env = "RADIORUS_RETRY_DELAY", default_value = "60")]
    retry_delay: u64,

    /// Quiet mode - no summary on stdout
    #[arg(short, long, env = "RADIORUS_QUIET")]
    quiet: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(tfmt::time::UtcTime::rfc_3339())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    debug!(?args, "Parsed CLI arguments");

    let url = listing_url(&args.brand, args.smotrim);
    let policy = RetryPolicy {
        retries: args.retries,
        delay: Duration::from_secs(args.retry_delay),
    };
    info!(%url, brand = %args.brand, "Building feed");

    let client = ReqwestClient::new();
    let feed = build_feed_with_retry(&client, &url, Patterns::global(), &policy)
        .await
        .with_context(|| format!("Failed to build feed from {url}"))?;

    let channel = to_channel(&feed);
    let output = write_feed(&channel, &args.path, &args.brand)
        .context("Failed to write feed")?;

    if !args.quiet {
        println!(
            "{} {} ({} episodes) -> {}",
            "Feed written:".bold().green(),
            feed.title.bold(),
            feed.items.len().to_string().cyan(),
            output.display().to_string().cyan()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["radiorus"]);
        assert_eq!(args.path, PathBuf::from("./"));
        assert_eq!(args.brand, "57083");
        assert!(!args.smotrim);
        assert_eq!(args.retries, 0);
        assert_eq!(args.retry_delay, 60);
    }

    #[test]
    fn args_short_flags() {
        let args = Args::parse_from(["radiorus", "-p", "/tmp/feeds", "-b", "58500", "--smotrim", "-q"]);
        assert_eq!(args.path, PathBuf::from("/tmp/feeds"));
        assert_eq!(args.brand, "58500");
        assert!(args.smotrim);
        assert!(args.quiet);
    }

    #[test]
    fn every_flag_reads_environment() {
        use clap::CommandFactory;

        let command = Args::command();
        let missing: Vec<_> = command
            .get_arguments()
            .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
            .filter(|arg| arg.get_env().is_none())
            .map(|arg| arg.get_id().to_string())
            .collect();
        assert!(missing.is_empty(), "flags without env var: {missing:?}");
    }
}
