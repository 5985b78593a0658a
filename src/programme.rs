// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::{debug, info};

use crate::error::ParseError;
use crate::feed::Feed;
use crate::grammar::{self, Legacy, Listing, Redesigned, SiteGrammar};
use crate::patterns::Patterns;
use crate::site::Site;

/// Fill a feed from its normalized listing page.
///
/// Programme fields are read with the redesigned grammar first and the
/// legacy one second, whatever the site; episodes are read with the grammar
/// of the site `feed.link` points to. Only a missing title
/// ([`ParseError::BadProgrammePage`]) or a malformed episode
/// ([`ParseError::BadEpisode`]) fails. An empty description afterwards
/// means the about page still has to be read.
pub fn populate(feed: &mut Feed, page: &str, patterns: &Patterns) -> Result<(), ParseError> {
    let link = feed.link.clone();
    let listing = Listing::parse(&link, page);
    let legacy = Legacy::new(patterns);
    let redesigned = Redesigned::new(patterns);

    feed.title = redesigned
        .title(&listing)
        .or_else(|_| legacy.title(&listing))
        .map_err(|_| ParseError::BadProgrammePage)?;

    feed.description = redesigned.description(&listing).unwrap_or_default();

    feed.image = redesigned
        .image(&listing)
        .or_else(|_| legacy.image(&listing))
        .ok();

    let site = Site::detect(&link);
    let episodes = grammar::select(site, patterns).episodes(&listing)?;
    let found = episodes.len();
    for episode in episodes {
        let id = episode.id.clone();
        if !feed.add(episode) {
            debug!(%id, "Skipping repeated episode");
        }
    }

    info!(
        title = %feed.title,
        %site,
        episodes = feed.items.len(),
        found,
        has_description = !feed.description.is_empty(),
        "Parsed programme page"
    );
    Ok(())
}
