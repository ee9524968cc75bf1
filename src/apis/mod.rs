pub mod clue_source;
pub mod show_locator;

pub use clue_source::HttpClueSource;
pub use show_locator::JArchiveShowLocator;

use crate::error::Result;
use crate::types::{RawShow, ShowListing};
use std::time::Duration;

/// Source of the ordered show list for a season
#[async_trait::async_trait]
pub trait ShowLocator: Send + Sync {
    async fn locate_shows(&self, season: u32) -> Result<Vec<ShowListing>>;
}

/// Source of the raw per-round clue data for one show
#[async_trait::async_trait]
pub trait ClueSource: Send + Sync {
    async fn fetch_show(&self, listing: &ShowListing) -> Result<RawShow>;
}

/// HTTP client shared by the archive collaborators. Without a timeout a
/// stalled request stalls the run.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
