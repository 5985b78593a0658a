// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use url::Url;

const REDESIGNED_HOSTS: [&str; 2] = ["smotrim.ru", "www.smotrim.ru"];

/// Which front-end served a programme page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// radiorus.ru, read with regular expressions over raw markup
    Legacy,
    /// smotrim.ru, read with CSS selectors
    Redesigned,
}

impl Site {
    /// Pick the site variant from a resolved page URL; unknown hosts are legacy
    pub fn detect(link: &str) -> Self {
        match hostname(link) {
            Some(host) if REDESIGNED_HOSTS.contains(&host.as_str()) => Site::Redesigned,
            _ => Site::Legacy,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Legacy => write!(f, "legacy"),
            Site::Redesigned => write!(f, "redesigned"),
        }
    }
}

/// Host name of a URL, if it parses and has one
pub fn hostname(link: &str) -> Option<String> {
    Url::parse(link).ok()?.host_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_redesigned_site() {
        assert_eq!(Site::detect("https://smotrim.ru/brand/57083"), Site::Redesigned);
        assert_eq!(Site::detect("https://www.smotrim.ru/brand/57083"), Site::Redesigned);
    }

    #[test]
    fn detects_legacy_site() {
        assert_eq!(
            Site::detect("https://www.radiorus.ru/brand/57083/episodes"),
            Site::Legacy
        );
    }

    #[test]
    fn unknown_and_broken_urls_are_legacy() {
        assert_eq!(Site::detect("https://example.com/brand/1"), Site::Legacy);
        assert_eq!(Site::detect("not a url"), Site::Legacy);
        assert_eq!(Site::detect(""), Site::Legacy);
    }

    #[test]
    fn hostname_extracts_host() {
        assert_eq!(
            hostname("http://www.radiorus.ru/brand/57083/episodes").as_deref(),
            Some("www.radiorus.ru")
        );
        assert_eq!(hostname("/brand/57083"), None);
    }
}
