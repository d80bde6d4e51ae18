use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::{
    consts::{DEFAULT_REQUEST_TIMEOUT_SECS, PLATE_BOUNDARIES_URL},
    prelude::*,
    req::HttpClient,
    BoundaryCollection, Error, FeedUrl, QuakeCollection,
};

/// Where earthquake events and plate boundaries come from.
///
/// The two reads are independent and may run concurrently.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_events(&self) -> Result<QuakeCollection>;

    async fn fetch_plate_boundaries(&self) -> Result<BoundaryCollection>;
}

/// Reads both feeds over HTTP.
#[derive(Debug, Clone)]
pub struct FeedClient {
    pub http_client: HttpClient,
    events_url: String,
    boundaries_url: String,
}

impl FeedClient {
    /// Client for the given event window and the default PB2002 boundaries.
    pub fn new(feed: FeedUrl) -> Result<FeedClient> {
        Self::with_options(
            feed,
            PLATE_BOUNDARIES_URL.to_string(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_options(
        feed: FeedUrl,
        boundaries_url: String,
        timeout: Duration,
    ) -> Result<FeedClient> {
        Ok(FeedClient {
            http_client: HttpClient::with_timeout(timeout)?,
            events_url: feed.get_url(),
            boundaries_url,
        })
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    pub fn boundaries_url(&self) -> &str {
        &self.boundaries_url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.http_client.get(url).await?;
        serde_json::from_str(&body).map_err(|e| Error::JsonParse(e.to_string()))
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_events(&self) -> Result<QuakeCollection> {
        let collection: QuakeCollection = self.fetch_json(&self.events_url).await?;
        info!(
            url = %self.events_url,
            count = collection.features.len(),
            "Fetched earthquake feed"
        );
        Ok(collection)
    }

    async fn fetch_plate_boundaries(&self) -> Result<BoundaryCollection> {
        let collection: BoundaryCollection = self.fetch_json(&self.boundaries_url).await?;
        info!(
            url = %self.boundaries_url,
            count = collection.len(),
            "Fetched plate boundaries"
        );
        Ok(collection)
    }
}
