// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::date::{parse_date, sentinel};
use crate::error::ParseError;
use crate::extract::{extract, extract_single};
use crate::feed::{Enclosure, Episode};
use crate::patterns::Patterns;

/// Parse one legacy episode block.
///
/// `url_prefix` is the programme's `<host>/brand/` prefix the relative
/// episode link is appended to. A block without a link, or with more than
/// one (the page was rendered mid-update), is [`ParseError::BadEpisode`].
pub fn parse_block(block: &str, url_prefix: &str, patterns: &Patterns) -> Result<Episode, ParseError> {
    if patterns.episode_url.find_iter(block).count() > 1 {
        return Err(ParseError::BadEpisode);
    }
    let path = extract_single(block, &patterns.episode_url).map_err(|_| ParseError::BadEpisode)?;

    let mut episode = Episode::new(format!("{url_prefix}{path}"));
    episode.title = extract_single(block, &patterns.episode_title)
        .unwrap_or_default()
        .trim()
        .to_string();
    episode.enclosure = extract_single(block, &patterns.episode_audio)
        .ok()
        .filter(|id| !id.is_empty())
        .map(Enclosure::audio);
    episode.created = extract(block, &patterns.episode_date, 5)
        .map(|fragments| parse_date(&fragments))
        .unwrap_or_else(|_| sentinel());

    Ok(episode)
}
