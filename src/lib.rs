pub mod assemble;
pub mod date;
pub mod describe;
pub mod episode;
pub mod error;
pub mod extract;
pub mod feed;
pub mod grammar;
pub mod http;
pub mod output;
pub mod patterns;
pub mod programme;
pub mod site;
pub mod text;

// Re-export main types for convenience
pub use assemble::{RetryPolicy, build_feed, build_feed_with_retry};
pub use error::{FeedError, FetchError, OutputError, ParseError};
pub use feed::{Enclosure, Episode, Feed, Image, listing_url};
pub use http::{HttpClient, Page, ReqwestClient};
pub use output::write_feed;
pub use patterns::Patterns;
pub use site::Site;
