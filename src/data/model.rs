use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ContentType – the "Type" column
// ---------------------------------------------------------------------------

/// Kind of title. The UI only ever offers [`ContentType::SELECTABLE`];
/// anything else found in the source is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
    Other(String),
}

impl ContentType {
    /// Choices offered by the type selector, in display order.
    pub const SELECTABLE: [ContentType; 2] = [ContentType::Movie, ContentType::TvShow];

    /// Map a raw cell to a content type. Matching is exact, like the filter.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Movie" => ContentType::Movie,
            "TV Show" => ContentType::TvShow,
            other => ContentType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
            ContentType::Other(s) => s,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// TitleRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single movie or show after column coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    pub title: String,
    pub content_type: ContentType,
    /// Possibly compound, e.g. `"Drama, Sci-Fi"`.
    pub genre: String,
    /// `None` when the source cell was blank or not a number.
    pub premiere: Option<f64>,
    pub watchtime_million: Option<f64>,
}

// ---------------------------------------------------------------------------
// Column coercion
// ---------------------------------------------------------------------------

/// Cell texts read as "no value", on top of a blank cell.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(s: &str) -> bool {
    s.is_empty() || NA_TOKENS.contains(&s)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a watch-time in millions")]
pub struct ParseWatchtimeError {
    pub raw: String,
}

/// Coerce a premiere cell to a year. Failure is not an error: the value
/// simply becomes missing.
pub fn parse_premiere(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Strip the trailing `M` unit and parse the rest as millions.
///
/// A blank or NA cell is missing (`Ok(None)`); any other text that is not
/// a number is an error.
pub fn parse_watchtime(raw: &str) -> Result<Option<f64>, ParseWatchtimeError> {
    let s = raw.trim();
    if is_na(s) {
        return Ok(None);
    }
    let number = s.strip_suffix('M').unwrap_or(s).trim_end();
    let value = number.parse::<f64>().map_err(|_| ParseWatchtimeError {
        raw: raw.to_string(),
    })?;
    Ok(if value.is_nan() { None } else { Some(value) })
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records in source order, plus the genre choices derived from them.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<TitleRecord>,
    /// Distinct non-empty genre strings in order of first appearance.
    pub genres: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut genres = Vec::new();
        for rec in &records {
            if !rec.genre.is_empty() && seen.insert(rec.genre.as_str()) {
                genres.push(rec.genre.clone());
            }
        }
        Dataset { records, genres }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose premiere could not be coerced to a year.
    pub fn missing_premiere_count(&self) -> usize {
        self.records.iter().filter(|r| r.premiere.is_none()).count()
    }
}

#[cfg(test)]
pub(crate) fn record(
    title: &str,
    content_type: &str,
    genre: &str,
    premiere: Option<i32>,
    watchtime: Option<f64>,
) -> TitleRecord {
    TitleRecord {
        title: title.to_string(),
        content_type: ContentType::from_label(content_type),
        genre: genre.to_string(),
        premiere: premiere.map(f64::from),
        watchtime_million: watchtime,
    }
}
