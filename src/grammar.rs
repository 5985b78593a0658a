// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two markup grammars a programme page can be written in.
//!
//! Both are read through [`SiteGrammar`]. [`Legacy`] matches regular
//! expressions against the normalized page text, [`Redesigned`] queries the
//! parsed document with CSS selectors. A missing field is always
//! [`ParseError::CantParse`]; only malformed episode markup is
//! [`ParseError::BadEpisode`].

use scraper::Html;
use url::Url;

use crate::episode::{find_episodes, parse_block, parse_cards};
use crate::error::ParseError;
use crate::extract::{extract, extract_single};
use crate::feed::{Episode, Image, episode_url_prefix};
use crate::patterns::Patterns;
use crate::site::Site;
use crate::text::strip_link;

/// A listing page in both of the forms the grammars need
pub struct Listing<'a> {
    /// Resolved page URL
    pub url: &'a str,
    /// Normalized page text
    pub text: &'a str,
    pub html: Html,
}

impl<'a> Listing<'a> {
    pub fn parse(url: &'a str, text: &'a str) -> Self {
        Self {
            url,
            text,
            html: Html::parse_document(text),
        }
    }
}

/// Field extraction for one site variant
pub trait SiteGrammar {
    fn title(&self, page: &Listing<'_>) -> Result<String, ParseError>;

    fn description(&self, page: &Listing<'_>) -> Result<String, ParseError>;

    fn image(&self, page: &Listing<'_>) -> Result<Image, ParseError>;

    /// All episodes of the page in page order, or the first malformed one's error
    fn episodes(&self, page: &Listing<'_>) -> Result<Vec<Episode>, ParseError>;
}

/// The grammar episodes of `site` are read with
pub fn select(site: Site, patterns: &Patterns) -> Box<dyn SiteGrammar + '_> {
    match site {
        Site::Legacy => Box::new(Legacy::new(patterns)),
        Site::Redesigned => Box::new(Redesigned::new(patterns)),
    }
}

/// radiorus.ru markup
pub struct Legacy<'p> {
    patterns: &'p Patterns,
}

impl<'p> Legacy<'p> {
    pub fn new(patterns: &'p Patterns) -> Self {
        Self { patterns }
    }
}

impl SiteGrammar for Legacy<'_> {
    fn title(&self, page: &Listing<'_>) -> Result<String, ParseError> {
        let raw = extract_single(page.text, &self.patterns.programme_name)?;
        non_empty(strip_link(raw, self.patterns).trim())
    }

    // The legacy listing carries no description, it lives on the about page
    fn description(&self, _page: &Listing<'_>) -> Result<String, ParseError> {
        Err(ParseError::CantParse)
    }

    fn image(&self, page: &Listing<'_>) -> Result<Image, ParseError> {
        let groups = extract(page.text, &self.patterns.programme_image, 4)?;
        Ok(Image {
            link: page.url.to_string(),
            url: non_empty(groups[1])?,
            title: groups[3].to_string(),
        })
    }

    fn episodes(&self, page: &Listing<'_>) -> Result<Vec<Episode>, ParseError> {
        let prefix = episode_url_prefix(page.url);
        find_episodes(page.text, self.patterns)
            .map(|block| parse_block(block, &prefix, self.patterns))
            .collect()
    }
}

/// smotrim.ru markup
pub struct Redesigned<'p> {
    patterns: &'p Patterns,
}

impl<'p> Redesigned<'p> {
    pub fn new(patterns: &'p Patterns) -> Self {
        Self { patterns }
    }
}

impl SiteGrammar for Redesigned<'_> {
    fn title(&self, page: &Listing<'_>) -> Result<String, ParseError> {
        select_text(&page.html, &self.patterns.brand_title)
    }

    fn description(&self, page: &Listing<'_>) -> Result<String, ParseError> {
        select_text(&page.html, &self.patterns.brand_about)
    }

    fn image(&self, page: &Listing<'_>) -> Result<Image, ParseError> {
        let img = page
            .html
            .select(&self.patterns.brand_picture)
            .next()
            .ok_or(ParseError::CantParse)?;
        let src = img.value().attr("src").ok_or(ParseError::CantParse)?;

        Ok(Image {
            link: page.url.to_string(),
            url: non_empty(src)?,
            title: img.value().attr("title").unwrap_or_default().to_string(),
        })
    }

    fn episodes(&self, page: &Listing<'_>) -> Result<Vec<Episode>, ParseError> {
        let base = Url::parse(page.url).map_err(|_| ParseError::CantParse)?;
        parse_cards(&page.html, &base, self.patterns)
    }
}

/// Trimmed text of every element matching `selector`
pub(crate) fn select_text(html: &Html, selector: &scraper::Selector) -> Result<String, ParseError> {
    let text: String = html.select(selector).flat_map(|el| el.text()).collect();
    non_empty(text.trim())
}

fn non_empty(s: &str) -> Result<String, ParseError> {
    if s.is_empty() {
        Err(ParseError::CantParse)
    } else {
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_URL: &str = "https://www.radiorus.ru/brand/57083/episodes";
    const REDESIGNED_URL: &str = "https://smotrim.ru/brand/57083";

    fn patterns() -> &'static Patterns {
        Patterns::global()
    }

    #[test]
    fn legacy_title_strips_anchor() {
        let text = r#"<h2><a href="/brand/57083">"Аэростат"</a></h2>"#;
        let page = Listing::parse(LEGACY_URL, text);
        assert_eq!(Legacy::new(patterns()).title(&page).unwrap(), "\"Аэростат\"");
    }

    #[test]
    fn legacy_empty_title_is_error() {
        let page = Listing::parse(LEGACY_URL, "<h2></h2>");
        assert_eq!(
            Legacy::new(patterns()).title(&page),
            Err(ParseError::CantParse)
        );
    }

    #[test]
    fn legacy_image_uses_second_and_fourth_group() {
        let text = r#"<div class="brand-promo__header">
            <img src="https://cdn.example/a.jpg" class="pic" alt='Аэростат'>"#;
        let page = Listing::parse(LEGACY_URL, text);
        let image = Legacy::new(patterns()).image(&page).unwrap();

        assert_eq!(image.url, "https://cdn.example/a.jpg");
        assert_eq!(image.title, "Аэростат");
        assert_eq!(image.link, LEGACY_URL);
    }

    #[test]
    fn redesigned_reads_selectors() {
        let text = r#"<div class="brand-main-item">
            <h1 class="brand-main-item__title"> Аэростат </h1>
            <div class="brand-main-item__picture"><img src="https://cdn.example/b.jpg" title="Обложка"></div>
            <div class="program-about__text">Программа Бориса Гребенщикова</div>
        </div>"#;
        let page = Listing::parse(REDESIGNED_URL, text);
        let grammar = Redesigned::new(patterns());

        assert_eq!(grammar.title(&page).unwrap(), "Аэростат");
        assert_eq!(
            grammar.description(&page).unwrap(),
            "Программа Бориса Гребенщикова"
        );
        let image = grammar.image(&page).unwrap();
        assert_eq!(image.url, "https://cdn.example/b.jpg");
        assert_eq!(image.title, "Обложка");
    }

    #[test]
    fn redesigned_missing_fields_are_cant_parse() {
        let page = Listing::parse(REDESIGNED_URL, "<html></html>");
        let grammar = Redesigned::new(patterns());

        assert_eq!(grammar.title(&page), Err(ParseError::CantParse));
        assert_eq!(grammar.description(&page), Err(ParseError::CantParse));
        assert_eq!(grammar.image(&page), Err(ParseError::CantParse));
        assert!(grammar.episodes(&page).unwrap().is_empty());
    }

    #[test]
    fn select_dispatches_on_site() {
        let text = r#"<div class="brand__list--wrap--item">
<a href="/brand/57083/episodes/1" class="title brand-menu-link">Один</a>
<div data-type="audio" data-id="11"></div>"#;
        let page = Listing::parse(LEGACY_URL, text);

        let legacy = select(Site::Legacy, patterns()).episodes(&page).unwrap();
        assert_eq!(legacy.len(), 1);
        assert_eq!(legacy[0].link, "https://www.radiorus.ru/brand/57083/episodes/1");

        let redesigned = select(Site::Redesigned, patterns()).episodes(&page).unwrap();
        assert!(redesigned.is_empty());
    }
}
