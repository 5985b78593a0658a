mod legacy;
mod redesigned;
mod segment;

pub use legacy::parse_block;
pub use redesigned::{parse_card, parse_cards};
pub use segment::find_episodes;
