use crate::aggregate::{SeasonSummary, ShowFailure, ShowOutcome};
use crate::apis::{ClueSource, ShowLocator};
use crate::error::Result;
use crate::storage::write_season;
use crate::transform::transform_show;
use crate::types::{ShowListing, ShowRecord};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Result of a complete season run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub season: u32,
    pub total_shows: usize,
    pub converted_shows: usize,
    pub skipped_shows: usize,
    pub failures: Vec<ShowFailure>,
    pub output_file: String,
}

/// Drives a season through locate, fetch, transform and aggregate, one show
/// at a time.
pub struct SeasonPipeline {
    locator: Box<dyn ShowLocator>,
    source: Box<dyn ClueSource>,
    delay: Duration,
    show_progress: bool,
}

impl SeasonPipeline {
    pub fn new(locator: Box<dyn ShowLocator>, source: Box<dyn ClueSource>) -> Self {
        Self {
            locator,
            source,
            delay: Duration::ZERO,
            show_progress: true,
        }
    }

    /// Pause between consecutive show fetches
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    }

    async fn convert_show(&self, listing: &ShowListing) -> Result<ShowRecord> {
        let raw = self.source.fetch_show(listing).await?;
        transform_show(&raw, listing)
    }

    /// Convert every show of a season. A malformed listing aborts the run;
    /// per-show errors are folded into the summary.
    #[instrument(skip(self))]
    pub async fn convert_season(&self, season: u32) -> Result<SeasonSummary> {
        let shows = self.locator.locate_shows(season).await?;
        info!("Converting {} shows for season {}", shows.len(), season);

        let pb = self.progress_bar(shows.len());
        let mut summary = SeasonSummary::new();
        for (i, listing) in shows.iter().enumerate() {
            pb.set_message(format!("Show #{}", listing.show_number));
            let outcome = ShowOutcome::from_result(self.convert_show(listing).await);
            summary = summary.record(&listing.show_id(), outcome);
            pb.inc(1);

            if !self.delay.is_zero() && i + 1 < shows.len() {
                tokio::time::sleep(self.delay).await;
            }
        }
        pb.finish_with_message(format!("Season {season}"));

        debug!(
            converted = summary.converted(),
            skipped = summary.skipped,
            failed = summary.failed(),
            "Season converted"
        );
        Ok(summary)
    }

    /// Convert a season and write its output file once at the end.
    #[instrument(skip(self, output_dir))]
    pub async fn run(&self, season: u32, output_dir: impl AsRef<Path>) -> Result<PipelineResult> {
        let summary = self.convert_season(season).await?;
        let output_file = write_season(&summary.output, season, output_dir)?;
        info!("💾 Saved season {} to {}", season, output_file.display());

        Ok(PipelineResult {
            season,
            total_shows: summary.processed,
            converted_shows: summary.converted(),
            skipped_shows: summary.skipped,
            failures: summary.failures,
            output_file: output_file.to_string_lossy().to_string(),
        })
    }
}
