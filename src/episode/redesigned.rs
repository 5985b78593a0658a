// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ParseError;
use crate::feed::{Enclosure, Episode};
use crate::patterns::Patterns;

/// Parse every `.episode-card` of a redesigned brand page, in page order.
///
/// Relative links are resolved against `base`. Dates are not part of the
/// card; they stay at the sentinel until the episode page is read.
pub fn parse_cards(doc: &Html, base: &Url, patterns: &Patterns) -> Result<Vec<Episode>, ParseError> {
    doc.select(&patterns.episode_card)
        .map(|card| parse_card(card, base, patterns))
        .collect()
}

/// Parse a single episode card
pub fn parse_card(card: ElementRef<'_>, base: &Url, patterns: &Patterns) -> Result<Episode, ParseError> {
    let href = card
        .select(&patterns.episode_card_link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .filter(|href| !href.trim().is_empty())
        .ok_or(ParseError::BadEpisode)?;
    let link = base.join(href.trim()).map_err(|_| ParseError::BadEpisode)?;

    let mut episode = Episode::new(link.as_str());
    episode.title = card_title(card, patterns);
    episode.enclosure = link
        .path()
        .strip_prefix("/audio/")
        .map(|id| id.trim_end_matches('/'))
        .filter(|id| !id.is_empty())
        .map(Enclosure::audio);

    Ok(episode)
}

// Card titles repeat the programme name in a nested element; drop it.
fn card_title(card: ElementRef<'_>, patterns: &Patterns) -> String {
    let text = |selector: &Selector| {
        card.select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    };
    let title = text(&patterns.episode_card_title);
    let brand = text(&patterns.episode_card_brand);

    let title = title.trim();
    let brand = brand.trim();
    if brand.is_empty() {
        return title.to_string();
    }
    title.strip_prefix(brand).unwrap_or(title).trim().to_string()
}
