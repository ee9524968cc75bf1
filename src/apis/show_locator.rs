use crate::apis::ShowLocator;
use crate::error::{ConverterError, Result};
use crate::types::ShowListing;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// `#8045,9-9-2019` once whitespace is stripped; the live archive also writes
/// `#8045,aired2019-09-09`.
static SHOW_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^#(\d+),(?:aired)?(?:(\d{1,2})-(\d{1,2})-(\d{4})|(\d{4})-(\d{1,2})-(\d{1,2}))$",
    )
    .unwrap()
});

pub struct JArchiveShowLocator {
    client: reqwest::Client,
    listing_url: String,
}

impl JArchiveShowLocator {
    pub fn new(client: reqwest::Client, listing_url: impl Into<String>) -> Self {
        Self {
            client,
            listing_url: listing_url.into(),
        }
    }

    fn season_url(&self, season: u32) -> String {
        format!("{}?season={}", self.listing_url, season)
    }
}

#[async_trait::async_trait]
impl ShowLocator for JArchiveShowLocator {
    #[instrument(skip(self))]
    async fn locate_shows(&self, season: u32) -> Result<Vec<ShowListing>> {
        let url = self.season_url(season);
        debug!("Fetching season listing from {}", url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ConverterError::Api {
                message: format!(
                    "season listing request failed with status: {}",
                    response.status()
                ),
            });
        }
        let body = response.text().await?;
        let shows = parse_show_listing(&body)?;
        info!("Found {} shows for season {}", shows.len(), season);
        Ok(shows)
    }
}

/// Extract `(show number, air date)` pairs from a season listing page, in
/// page order.
pub fn parse_show_listing(html: &str) -> Result<Vec<ShowListing>> {
    let document = Html::parse_document(html);
    let mut shows = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let text: String = anchor
            .text()
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !text.starts_with('#') {
            continue;
        }
        shows.push(parse_show_anchor(&text)?);
    }

    if shows.is_empty() {
        return Err(ConverterError::MalformedListing(
            "no show anchors found on listing page".to_string(),
        ));
    }
    Ok(shows)
}

fn parse_show_anchor(text: &str) -> Result<ShowListing> {
    let malformed = || ConverterError::MalformedListing(format!("unexpected show anchor '{text}'"));
    let caps = SHOW_ANCHOR.captures(text).ok_or_else(malformed)?;

    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let show_number = number(1).ok_or_else(malformed)?;
    let (month, day, year) = match (number(2), number(3), number(4)) {
        (Some(month), Some(day), Some(year)) => (month, day, year),
        _ => (
            number(6).ok_or_else(malformed)?,
            number(7).ok_or_else(malformed)?,
            number(5).ok_or_else(malformed)?,
        ),
    };

    let year = i32::try_from(year).map_err(|_| malformed())?;
    let air_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;
    Ok(ShowListing::new(show_number, air_date))
}
