/// Round literals as they appear in the converted output
pub const JEOPARDY_ROUND: &str = "Jeopardy!";
pub const DOUBLE_JEOPARDY_ROUND: &str = "Double Jeopardy!";
pub const FINAL_JEOPARDY_ROUND: &str = "Final Jeopardy!";

// Sentinels used by the source archive
pub const DAILY_DOUBLE_SENTINEL: &str = "Daily Double";
pub const UNREVEALED_SENTINEL: &str = "Unrevealed";

/// Board values for the first round, ascending
pub const JEOPARDY_VALUES: [u32; 5] = [200, 400, 600, 800, 1000];
/// Board values for Double Jeopardy!, ascending
pub const DOUBLE_JEOPARDY_VALUES: [u32; 5] = [400, 800, 1200, 1600, 2000];

pub const MIN_SEASON: u32 = 0;
pub const MAX_SEASON: u32 = 37;

// Default endpoints (overridable via config.toml or environment)
pub const DEFAULT_LISTING_URL: &str = "https://j-archive.com/showseason.php";
pub const DEFAULT_CLUE_SOURCE_URL: &str = "https://jarchive-json.glitch.me/game";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Output file name for a season
pub fn season_file_name(season: u32) -> String {
    format!("season_{season}.json")
}
