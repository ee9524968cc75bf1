use crate::apis::ClueSource;
use crate::error::{ConverterError, Result};
use crate::types::{RawShow, ShowListing};
use tracing::{debug, instrument};

/// Fetches per-show clue JSON from `{base}/{MM}/{DD}/{YYYY}`
pub struct HttpClueSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClueSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn show_url(&self, listing: &ShowListing) -> String {
        format!(
            "{}/{:02}/{:02}/{}",
            self.base_url.trim_end_matches('/'),
            listing.month(),
            listing.day(),
            listing.year()
        )
    }
}

#[async_trait::async_trait]
impl ClueSource for HttpClueSource {
    #[instrument(skip(self), fields(show = listing.show_number))]
    async fn fetch_show(&self, listing: &ShowListing) -> Result<RawShow> {
        let url = self.show_url(listing);
        debug!("Fetching clues from {}", url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ConverterError::Api {
                message: format!(
                    "clue request for show #{} failed with status: {}",
                    listing.show_number,
                    response.status()
                ),
            });
        }
        let body = response.text().await?;
        parse_show(&body)
    }
}

/// Decode a clue source payload.
pub fn parse_show(body: &str) -> Result<RawShow> {
    Ok(serde_json::from_str(body)?)
}
