//! API clients for external services
//!
//! - Feed: the static astronomy picture feed

pub mod feed;

pub use feed::{FeedClient, FetchError, FEED_URL};
