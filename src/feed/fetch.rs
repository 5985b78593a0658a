// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use crate::error::FetchError;
use crate::http::HttpClient;
use crate::text::clean_text;

/// A fetched page, decoded and normalized for extraction
#[derive(Debug, Clone)]
pub struct Document {
    /// Final URL after redirects
    pub url: String,
    pub text: String,
}

/// Fetch a page and normalize its body
pub async fn fetch_page<C: HttpClient>(client: &C, url: &str) -> Result<Document, FetchError> {
    let page = client.get_page(url).await?;
    debug!(%url, final_url = %page.url, bytes = page.body.len(), "Fetched page");

    Ok(Document {
        text: clean_text(&page.body),
        url: page.url,
    })
}

/// Legacy listing URL or redesigned brand URL for a programme number
pub fn listing_url(brand: &str, smotrim: bool) -> String {
    if smotrim {
        format!("https://smotrim.ru/brand/{brand}")
    } else {
        format!("https://www.radiorus.ru/brand/{brand}/episodes")
    }
}

/// About page of a programme, next to its episode listing
pub fn about_url(link: &str) -> String {
    let base = link.trim_end_matches('/');
    match base.strip_suffix("/episodes") {
        Some(programme) => format!("{programme}/about"),
        None => format!("{base}/about"),
    }
}
