use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{ContentType, Dataset, TitleRecord, parse_premiere, parse_watchtime};

/// Location of the FlixPatrol export, relative to the working directory.
pub const DATA_PATH: &str = "data/flixpatrol.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: 'Watchtime in Million' value '{raw}' is not a number")]
    Watchtime { row: usize, raw: String },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Raw row as it appears in the file. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
struct RawTitleRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Type")]
    content_type: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Premiere")]
    premiere: String,
    #[serde(rename = "Watchtime in Million")]
    watchtime: String,
}

/// Load the dataset from a CSV file with a header row.
///
/// `Premiere` values that are not numbers become missing. A non-NA
/// `Watchtime in Million` value that cannot be parsed aborts the whole load.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = read_titles(reader)?;

    log::info!(
        "Loaded {} titles ({} genres) from {}",
        dataset.len(),
        dataset.genres.len(),
        path.display()
    );
    let missing = dataset.missing_premiere_count();
    if missing > 0 {
        log::warn!("{missing} titles have no usable Premiere year and will never match a year range");
    }
    Ok(dataset)
}

fn read_titles<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawTitleRow>().enumerate() {
        let raw = result?;
        let watchtime_million =
            parse_watchtime(&raw.watchtime).map_err(|e| LoadError::Watchtime {
                row: row_no + 1,
                raw: e.raw,
            })?;

        records.push(TitleRecord {
            title: raw.title,
            content_type: ContentType::from_label(&raw.content_type),
            genre: raw.genre,
            premiere: parse_premiere(&raw.premiere),
            watchtime_million,
        });
    }

    Ok(Dataset::from_records(records))
}
