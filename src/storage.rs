use crate::constants::season_file_name;
use crate::error::Result;
use crate::types::SeasonOutput;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write the season output as pretty JSON to `<output_dir>/season_<N>.json`.
/// Returns the path written.
pub fn write_season(
    output: &SeasonOutput,
    season: u32,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let filepath = output_dir.join(season_file_name(season));
    let json_content = serde_json::to_string_pretty(output)?;
    fs::write(&filepath, json_content)?;

    debug!("Wrote {} shows to {}", output.len(), filepath.display());
    Ok(filepath)
}

/// Read a previously written season file.
pub fn read_season(path: impl AsRef<Path>) -> Result<SeasonOutput> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
