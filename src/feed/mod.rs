mod feed_client;

pub use feed_client::{FeedClient, FeedSource};
