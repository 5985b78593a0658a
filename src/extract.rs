// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-arity capture extraction. Every regex field lookup goes through
//! here so that absent or partially matched markup always surfaces as
//! [`ParseError::CantParse`].

use regex::Regex;

use crate::error::ParseError;

/// Apply `re` once and return exactly `groups` captures.
///
/// Fails when nothing matches or when the pattern does not have `groups`
/// capture groups. Optional groups that did not participate come back empty.
pub fn extract<'t>(text: &'t str, re: &Regex, groups: usize) -> Result<Vec<&'t str>, ParseError> {
    if re.captures_len() != groups + 1 {
        return Err(ParseError::CantParse);
    }
    let captures = re.captures(text).ok_or(ParseError::CantParse)?;

    Ok((1..=groups)
        .map(|i| captures.get(i).map_or("", |m| m.as_str()))
        .collect())
}

/// One-group specialization of [`extract`]
pub fn extract_single<'t>(text: &'t str, re: &Regex) -> Result<&'t str, ParseError> {
    extract(text, re, 1).map(|mut groups| groups.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(p: &str) -> Regex {
        Regex::new(p).unwrap()
    }

    #[test]
    fn extract_returns_all_groups() {
        let groups = extract("key=value;", &re(r"(\w+)=(\w+);"), 2).unwrap();
        assert_eq!(groups, vec!["key", "value"]);
    }

    #[test]
    fn extract_fails_without_match() {
        let result = extract("nothing here", &re(r"(\w+)=(\w+);"), 2);
        assert_eq!(result, Err(ParseError::CantParse));
    }

    #[test]
    fn extract_fails_on_arity_mismatch() {
        let result = extract("key=value;", &re(r"(\w+)=(\w+);"), 3);
        assert_eq!(result, Err(ParseError::CantParse));
    }

    #[test]
    fn extract_empties_non_participating_groups() {
        let groups = extract("<h2></h2>", &re(r"<h2>(.+?)?</h2>"), 1).unwrap();
        assert_eq!(groups, vec![""]);
    }

    #[test]
    fn extract_single_takes_first_match() {
        let title = extract_single(
            "<h2>first</h2><h2>second</h2>",
            &re(r"<h2>(.+?)?</h2>"),
        )
        .unwrap();
        assert_eq!(title, "first");
    }

    #[test]
    fn extract_missing_field_is_uniform_error() {
        let err = extract_single("", &re(r"<h2>(.+?)?</h2>")).unwrap_err();
        assert_eq!(err, ParseError::CantParse);
    }
}
