// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::patterns::Patterns;

/// Split a legacy listing page into candidate episode blocks, in page order.
///
/// Each block runs from its wrapper `<div>` to the first following
/// `data-id` element. Blocks are not validated here.
pub fn find_episodes<'t>(page: &'t str, patterns: &'t Patterns) -> impl Iterator<Item = &'t str> {
    patterns.episode_block.find_iter(page).map(|m| m.as_str())
}
