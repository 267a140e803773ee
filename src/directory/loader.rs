//! Ratings CSV loading
//!
//! Rows are read loosely and mapped to `RatedPlayer` in a separate step so
//! the engine only ever sees a name and a rating. Rows that cannot be mapped
//! are skipped with a warning instead of failing the whole load.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info, warn};

use super::PlayerDirectory;
use crate::config::DataSettings;
use crate::error::Result;
use crate::types::RatedPlayer;
use crate::utils::normalize_name;

const RANK_COLUMN: &str = "rank";
const RANKING_DATE_COLUMN: &str = "ranking_date";

/// One ratings row before validation; every field may be absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlayerRecord<'a> {
    pub name: Option<&'a str>,
    pub rating: Option<&'a str>,
    pub rank: Option<&'a str>,
    pub ranking_date: Option<&'a str>,
}

/// Why a row was left out of the directory
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("empty player name")]
    MissingName,

    #[error("missing rating")]
    MissingRating,

    #[error("invalid rating: {value}")]
    InvalidRating { value: String },
}

impl TryFrom<RawPlayerRecord<'_>> for RatedPlayer {
    type Error = SkipReason;

    fn try_from(raw: RawPlayerRecord<'_>) -> std::result::Result<Self, Self::Error> {
        let name = raw
            .name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(SkipReason::MissingName)?;

        let rating_text = raw
            .rating
            .map(str::trim)
            .filter(|rating| !rating.is_empty())
            .ok_or(SkipReason::MissingRating)?;
        let rating = rating_text
            .parse::<f64>()
            .ok()
            .filter(|rating| rating.is_finite())
            .ok_or_else(|| SkipReason::InvalidRating {
                value: rating_text.to_string(),
            })?;

        Ok(RatedPlayer {
            name: name.to_string(),
            rating,
            rank: raw.rank.and_then(parse_rank),
            ranking_date: raw.ranking_date.and_then(parse_ranking_date),
        })
    }
}

/// Ranks sometimes come through as floats ("12.0") from spreadsheet exports
fn parse_rank(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|rank| rank.fract() == 0.0 && *rank >= 0.0 && *rank <= u32::MAX as f64)
            .map(|rank| rank as u32)
    })
}

fn parse_ranking_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .ok()
}

/// Header positions of the columns the loader understands
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    rating: usize,
    rank: Option<usize>,
    ranking_date: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, settings: &DataSettings) -> Result<Self> {
        let position = |column: &str| {
            let wanted = column.trim().to_lowercase();
            headers
                .iter()
                .position(|header| header.trim().to_lowercase() == wanted)
        };

        let name = position(&settings.name_column).ok_or_else(|| {
            anyhow!(
                "Ratings file has no '{}' column (found: {})",
                settings.name_column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;
        let rating = position(&settings.rating_column).ok_or_else(|| {
            anyhow!(
                "Ratings file has no '{}' column (found: {})",
                settings.rating_column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;

        Ok(Self {
            name,
            rating,
            rank: position(RANK_COLUMN),
            ranking_date: position(RANKING_DATE_COLUMN),
        })
    }

    fn raw<'a>(&self, record: &'a StringRecord) -> RawPlayerRecord<'a> {
        RawPlayerRecord {
            name: record.get(self.name),
            rating: record.get(self.rating),
            rank: self.rank.and_then(|index| record.get(index)),
            ranking_date: self.ranking_date.and_then(|index| record.get(index)),
        }
    }
}

impl PlayerDirectory {
    /// Build a directory from CSV text with a header row
    pub fn from_reader<R: io::Read>(reader: R, settings: &DataSettings) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("Failed to read ratings header row")?
            .clone();
        let columns = ColumnMap::from_headers(&headers, settings)?;
        debug!(?columns, "Resolved ratings columns");

        let mut players = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (index, record) in csv_reader.records().enumerate() {
            // header is line 1
            let line = index + 2;
            let record = record.with_context(|| format!("Failed to read ratings line {}", line))?;

            match RatedPlayer::try_from(columns.raw(&record)) {
                Ok(player) => {
                    if !seen.insert(normalize_name(&player.name)) {
                        warn!(
                            line,
                            player = %player.name,
                            "Duplicate player name in ratings; the earlier entry wins"
                        );
                    }
                    players.push(player);
                }
                Err(reason) => {
                    skipped += 1;
                    warn!(line, %reason, "Skipping ratings row");
                }
            }
        }

        info!(loaded = players.len(), skipped, "Player directory loaded");
        Ok(PlayerDirectory::new(players))
    }
}

/// Load the player directory from a ratings CSV file
pub fn load_directory<P: AsRef<Path>>(path: P, settings: &DataSettings) -> Result<PlayerDirectory> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open ratings file: {}", path.display()))?;
    PlayerDirectory::from_reader(file, settings)
        .with_context(|| format!("Failed to load ratings from {}", path.display()))
}
