// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Second pass over a parsed feed: long descriptions from the about page and
//! from every episode page, fetched concurrently.
//!
//! Every task owns the one field set it writes (the feed description, or a
//! single episode) through an exclusive borrow, so tasks never share mutable
//! state. A failing task only logs; it cannot affect the others.

use chrono::{DateTime, FixedOffset};
use futures::future::{join, join_all};
use scraper::Html;
use tracing::{debug, info, instrument, warn};

use crate::date::{is_sentinel, parse_localized_date};
use crate::error::ParseError;
use crate::extract::extract_single;
use crate::feed::{Episode, Feed, about_url, fetch_page};
use crate::grammar::select_text;
use crate::http::HttpClient;
use crate::patterns::Patterns;
use crate::site::Site;
use crate::text::strip_tags;

/// Separator between the regions of an episode description
const PARAGRAPH: &str = "\n\n";

/// What an episode page has to say about its episode
#[derive(Debug)]
pub struct EpisodeDetails {
    pub description: Result<String, ParseError>,
    pub published: Option<DateTime<FixedOffset>>,
}

/// Fill in feed and episode descriptions, waiting for every fetch to finish.
///
/// The about page is only read when the listing page had no description.
/// Item order is never touched.
#[instrument(level = "info", skip_all, fields(link = %feed.link, episodes = feed.items.len()))]
pub async fn describe<C: HttpClient>(client: &C, patterns: &Patterns, feed: &mut Feed, site: Site) {
    let Feed {
        link,
        description,
        items,
        ..
    } = feed;
    let link = link.as_str();

    let about = async {
        if description.is_empty()
            && let Some(text) = describe_feed(client, patterns, link).await
        {
            *description = text;
        }
    };
    let episodes = join_all(
        items
            .iter_mut()
            .map(|episode| describe_episode(client, patterns, episode, site)),
    );

    let ((), described) = join(about, episodes).await;
    info!(
        described = described.into_iter().filter(|ok| *ok).count(),
        "Fetched descriptions"
    );
}

/// Read the programme description from its about page
async fn describe_feed<C: HttpClient>(client: &C, patterns: &Patterns, link: &str) -> Option<String> {
    let url = about_url(link);
    let page = match fetch_page(client, &url).await {
        Ok(page) => page,
        Err(e) => {
            warn!(%url, error = %e, "could not fetch programme description page");
            return None;
        }
    };

    match process_feed_desc(&page.text, patterns) {
        Ok(text) => {
            debug!(%url, bytes = text.len(), "Found programme description");
            Some(text)
        }
        Err(e) => {
            warn!(%url, error = %e, "could not find programme description on page");
            None
        }
    }
}

/// Extract the description block of an about page as plain text
pub fn process_feed_desc(page: &str, patterns: &Patterns) -> Result<String, ParseError> {
    let block = extract_single(page, &patterns.programme_about)?;
    let text = strip_tags(block, patterns);
    if text.is_empty() {
        return Err(ParseError::CantParse);
    }
    Ok(text)
}

/// Fill one episode from its page. Returns whether a description was found.
async fn describe_episode<C: HttpClient>(
    client: &C,
    patterns: &Patterns,
    episode: &mut Episode,
    site: Site,
) -> bool {
    let page = match fetch_page(client, &episode.link).await {
        Ok(page) => page,
        Err(e) => {
            warn!(url = %episode.link, error = %e, "could not fetch episode page");
            return false;
        }
    };

    let want_date = site == Site::Redesigned && is_sentinel(&episode.created);
    let details = process_episode_page(&page.text, patterns, want_date);

    if let Some(published) = details.published {
        episode.created = published;
    }
    match details.description {
        Ok(text) => {
            episode.description = text;
            true
        }
        Err(e) => {
            warn!(url = %episode.link, error = %e, "could not find episode description on page");
            false
        }
    }
}

/// Read the description regions, and optionally the date, of an episode page
pub fn process_episode_page(page: &str, patterns: &Patterns, want_date: bool) -> EpisodeDetails {
    let html = Html::parse_document(page);

    let regions: Vec<String> = [
        &patterns.episode_head,
        &patterns.episode_body,
        &patterns.video_body,
    ]
    .into_iter()
    .filter_map(|selector| select_text(&html, selector).ok())
    .collect();

    let description = if regions.is_empty() {
        Err(ParseError::CantParse)
    } else {
        Ok(regions.join(PARAGRAPH))
    };

    let published = if want_date {
        select_text(&html, &patterns.video_date)
            .ok()
            .and_then(|s| parse_localized_date(&s))
    } else {
        None
    };

    EpisodeDetails {
        description,
        published,
    }
}
