// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed table of regular expressions and CSS selectors used to read
//! both site variants. Built once and shared read-only by every component.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

static PATTERNS: Lazy<Patterns> = Lazy::new(Patterns::compile);

/// Markup grammar of the legacy and the redesigned site
#[derive(Debug)]
pub struct Patterns {
    // Legacy site, matched against raw markup
    pub programme_name: Regex,
    pub programme_about: Regex,
    pub programme_image: Regex,
    pub episode_block: Regex,
    pub episode_url: Regex,
    pub episode_title: Regex,
    pub episode_audio: Regex,
    pub episode_date: Regex,
    pub anchor_tag: Regex,
    pub any_tag: Regex,

    // Redesigned site, matched against the parsed document
    pub brand_title: Selector,
    pub brand_about: Selector,
    pub brand_picture: Selector,
    pub episode_card: Selector,
    pub episode_card_link: Selector,
    pub episode_card_title: Selector,
    pub episode_card_brand: Selector,
    pub video_date: Selector,

    // Episode detail page regions, in output order
    pub episode_head: Selector,
    pub episode_body: Selector,
    pub video_body: Selector,
}

impl Patterns {
    /// The process-wide table
    pub fn global() -> &'static Patterns {
        &PATTERNS
    }

    fn compile() -> Self {
        Self {
            programme_name: regex(r"<h2>(.+?)?</h2>"),
            programme_about: regex(r#"(?s)<div class="brand__content_text__anons">(.+?)?</div>"#),
            programme_image: regex(
                r#"(?s)<div class="brand-promo__header">(.+?)?<img src="(.+?)?"(.+?)?alt='(.+?)?'>"#,
            ),
            episode_block: regex(
                r#"(?s)<div class="brand__list--wrap--item">(.+?)?data-id="(.+?)"></div>"#,
            ),
            episode_url: regex(r#"<a href="/brand/(.+?)?" class="title"#),
            episode_title: regex(r#"title brand-menu-link">(.+?)?</a>"#),
            episode_audio: regex(r#"data-type="audio"\s+data-id="(.+?)?">"#),
            episode_date: regex(
                r#"brand-time brand-menu-link">(.+?)?\.(.+?)?\.(.+?)? в (.+?)?:(.+?)?</a>"#,
            ),
            anchor_tag: regex(r"</?a.*?>"),
            any_tag: regex(r"<(.+?)?>"),

            brand_title: selector(".brand-main-item__title"),
            brand_about: selector(".program-about__text"),
            brand_picture: selector(".brand-main-item__picture img"),
            episode_card: selector(".episode-card"),
            episode_card_link: selector(".episode-card__link"),
            episode_card_title: selector(".episode-card__title"),
            episode_card_brand: selector(".episode-card__title__brand"),
            video_date: selector(".video__date"),

            episode_head: selector(".brand-episode__head .anons"),
            episode_body: selector(".brand-episode__body .body"),
            video_body: selector(".video__body"),
        }
    }
}

// The table is made of literals; a failure here is a programming error.
fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern}: {e}"))
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_compiles() {
        let patterns = Patterns::global();
        assert_eq!(patterns.programme_image.captures_len(), 5);
        assert_eq!(patterns.episode_date.captures_len(), 6);
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(Patterns::global(), Patterns::global()));
    }
}
