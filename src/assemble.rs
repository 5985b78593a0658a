// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::date;
use crate::describe::describe;
use crate::error::{FeedError, ParseError};
use crate::feed::{Feed, fetch_page};
use crate::http::HttpClient;
use crate::patterns::Patterns;
use crate::programme::populate;
use crate::site::Site;

/// How often to rebuild a feed whose listing page was caught mid-update
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub retries: u32,
    /// Pause before each extra attempt
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 0,
            delay: Duration::from_secs(60),
        }
    }
}

/// Build a complete feed from a programme listing URL
///
/// This is the main entry point for the library. It:
/// 1. Fetches and normalizes the listing page
/// 2. Parses the programme and its episodes
/// 3. Fetches all descriptions concurrently
/// 4. Stamps the feed with the assembly time
///
/// No partial feed is returned: a fetch failure of the listing page, a page
/// without a title or a malformed episode block fail the whole call.
#[instrument(level = "info", skip(client, patterns))]
pub async fn build_feed<C: HttpClient>(
    client: &C,
    url: &str,
    patterns: &Patterns,
) -> Result<Feed, FeedError> {
    let page = fetch_page(client, url).await?;
    let mut feed = Feed::new(page.url.as_str());

    populate(&mut feed, &page.text, patterns).map_err(|source| FeedError::Parse {
        url: page.url.clone(),
        source,
    })?;

    let site = Site::detect(&feed.link);
    describe(client, patterns, &mut feed, site).await;

    feed.created = date::now();
    info!(
        title = %feed.title,
        items = feed.items.len(),
        "Assembled feed"
    );
    Ok(feed)
}

/// [`build_feed`], starting over while the listing page has bad episode blocks
pub async fn build_feed_with_retry<C: HttpClient>(
    client: &C,
    url: &str,
    patterns: &Patterns,
    policy: &RetryPolicy,
) -> Result<Feed, FeedError> {
    let mut attempt = 0;
    loop {
        match build_feed(client, url, patterns).await {
            Err(e) if e.kind() == Some(ParseError::BadEpisode) && attempt < policy.retries => {
                attempt += 1;
                warn!(
                    %url,
                    attempt,
                    retries = policy.retries,
                    delay_secs = policy.delay.as_secs(),
                    "Listing page is being updated; retrying"
                );
                tokio::time::sleep(policy.delay).await;
            }
            result => return result,
        }
    }
}
