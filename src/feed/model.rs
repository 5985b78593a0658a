// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, FixedOffset};

use crate::date;

/// Audio download service shared by both site variants
const AUDIO_DOWNLOAD_URL: &str = "https://audio.vgtrk.com/download?id=";

/// A programme feed assembled from listing and detail pages
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    /// Canonical programme URL, after redirects
    pub link: String,
    pub description: String,
    pub image: Option<Image>,
    /// Episodes in the order they appear on the listing page
    pub items: Vec<Episode>,
    pub created: DateTime<FixedOffset>,
}

/// Programme cover image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub link: String,
    pub url: String,
    pub title: String,
}

/// A single broadcast
#[derive(Debug, Clone)]
pub struct Episode {
    /// Link with the scheme canonicalized to `http://`
    pub id: String,
    pub link: String,
    pub title: String,
    pub description: String,
    /// Missing when the page had no audio identifier
    pub enclosure: Option<Enclosure>,
    /// [`date::sentinel`] while unknown
    pub created: DateTime<FixedOffset>,
}

/// The audio file attached to an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    pub length: u64,
    pub mime_type: String,
}

impl Feed {
    /// An empty feed for the programme at `link`
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            link: link.into(),
            description: String::new(),
            image: None,
            items: Vec::new(),
            created: date::sentinel(),
        }
    }

    /// Append an episode unless one with the same id is already present.
    /// Returns whether it was added.
    pub fn add(&mut self, episode: Episode) -> bool {
        if self.items.iter().any(|e| e.id == episode.id) {
            return false;
        }
        self.items.push(episode);
        true
    }
}

impl Episode {
    /// An episode known only by its link; id is derived from it
    pub fn new(link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            id: episode_id(&link),
            link,
            title: String::new(),
            description: String::new(),
            enclosure: None,
            created: date::sentinel(),
        }
    }
}

impl Enclosure {
    /// Enclosure for an audio identifier
    pub fn audio(id: &str) -> Self {
        Self {
            url: format!("{AUDIO_DOWNLOAD_URL}{id}"),
            length: 1024,
            mime_type: "audio/mpeg".to_string(),
        }
    }
}

/// Generate an episode id from its URL.
///
/// `https://` becomes `http://` so ids stay stable for feed readers that saw
/// the episodes before the site switched protocols.
pub fn episode_id(url: &str) -> String {
    match url.strip_prefix("https://") {
        Some(rest) => format!("http://{rest}"),
        None => url.to_string(),
    }
}

/// Common episode URL prefix of a legacy programme page URL
pub fn episode_url_prefix(url: &str) -> String {
    let head = url.split("/brand/").next().unwrap_or_default();
    format!("{head}/brand/")
}
