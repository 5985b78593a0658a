// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::patterns::Patterns;

/// Entities that have to be literal characters to show up properly in the feed.
/// No replacement produces the start of another pattern.
const SUBSTITUTES: [(&str, &str); 2] = [("&quot;", "\""), ("&ndash;", "–")];

/// Decode a page body and replace HTML-encoded symbols with proper UTF-8
pub fn clean_text(raw: &[u8]) -> String {
    normalize(&String::from_utf8_lossy(raw))
}

/// Apply the entity substitutions to already decoded text
pub fn normalize(text: &str) -> String {
    SUBSTITUTES
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to))
}

/// Strip a string of `<a>` tags
pub fn strip_link(s: &str, patterns: &Patterns) -> String {
    patterns.anchor_tag.replace_all(s, "").into_owned()
}

/// Strip all tags, decode whatever entities are left and trim
pub fn strip_tags(s: &str, patterns: &Patterns) -> String {
    let bare = patterns.any_tag.replace_all(s, "");
    html_escape::decode_html_entities(&bare).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_replaces_entities() {
        let raw = "&quot;Аэростат&quot; &ndash; программа".as_bytes();
        assert_eq!(clean_text(raw), "\"Аэростат\" – программа");
    }

    #[test]
    fn clean_text_is_idempotent() {
        let once = clean_text(b"a &quot;b&quot; &ndash; &amp;quot; c");
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn clean_text_leaves_other_entities() {
        assert_eq!(clean_text(b"&laquo;x&raquo;"), "&laquo;x&raquo;");
    }

    #[test]
    fn strip_link_removes_anchor() {
        let patterns = Patterns::global();
        assert_eq!(
            strip_link(r#"<a href="/brand/57083">"Title"</a>"#, patterns),
            r#""Title""#
        );
    }

    #[test]
    fn strip_link_keeps_plain_text() {
        assert_eq!(strip_link("Аэростат", Patterns::global()), "Аэростат");
    }

    #[test]
    fn strip_tags_flattens_markup() {
        let patterns = Patterns::global();
        assert_eq!(
            strip_tags("\n<p>Борис <b>Гребенщиков</b> &amp; друзья</p>\n", patterns),
            "Борис Гребенщиков & друзья"
        );
    }
}
