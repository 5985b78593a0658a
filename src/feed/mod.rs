mod fetch;
mod model;
pub mod rss;

pub use fetch::{Document, about_url, fetch_page, listing_url};
pub use model::{Enclosure, Episode, Feed, Image, episode_id, episode_url_prefix};
