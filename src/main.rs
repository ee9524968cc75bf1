use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};

use jarchive_converter::apis::{build_client, HttpClueSource, JArchiveShowLocator};
use jarchive_converter::config::{Config, DEFAULT_CONFIG_PATH};
use jarchive_converter::constants::{MAX_SEASON, MIN_SEASON};
use jarchive_converter::logging;
use jarchive_converter::pipeline::SeasonPipeline;

#[derive(Parser)]
#[command(name = "jarchive_converter")]
#[command(about = "Convert a J! Archive season into category-grouped trivia JSON")]
#[command(version = "0.1.0")]
struct Cli {
    /// Season to convert
    #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_SEASON as i64..=MAX_SEASON as i64))]
    season: u32,

    /// Directory for season_<N>.json (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Hide the per-show progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = logging::init_logging();

    let config = Config::load_from(&cli.config)?;
    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let client = build_client(config.timeout())?;
    let pipeline = SeasonPipeline::new(
        Box::new(JArchiveShowLocator::new(client.clone(), &config.listing_url)),
        Box::new(HttpClueSource::new(client, &config.clue_source_url)),
    )
    .with_delay(config.delay())
    .with_progress(!cli.no_progress);

    println!("🔄 Converting season {}...", cli.season);
    info!(season = cli.season, "Starting season conversion");

    let result = match pipeline.run(cli.season, &output_dir).await {
        Ok(result) => result,
        Err(e) => {
            error!("Season conversion failed: {}", e);
            println!("❌ Season conversion failed: {}", e);
            return Err(e.into());
        }
    };

    println!("\n📊 Results for season {}:", result.season);
    println!("   Total shows: {}", result.total_shows);
    println!("   Converted: {}", result.converted_shows);
    println!("   Skipped (incomplete): {}", result.skipped_shows);
    println!("   Failed: {}", result.failures.len());
    println!("   Output file: {}", result.output_file);

    if !result.failures.is_empty() {
        warn!("{} shows failed during conversion", result.failures.len());
        println!("\n⚠️  Failed shows:");
        for failure in &result.failures {
            println!("   - #{}: {}", failure.show_number, failure.reason);
        }
    }

    Ok(())
}
