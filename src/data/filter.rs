use std::cmp::Ordering;
use std::fmt;

use super::model::{ContentType, Dataset, TitleRecord};

/// Lowest year the range selector allows.
pub const YEAR_MIN: i32 = 2000;
/// Highest year the range selector allows.
pub const YEAR_MAX: i32 = 2023;
/// Rows shown in the results table.
pub const DISPLAY_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Inclusive premiere-year bounds. `lo > hi` is representable and matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange { lo: 2010, hi: 2020 }
    }
}

impl YearRange {
    /// A missing year is never inside any range.
    pub fn contains(&self, year: Option<f64>) -> bool {
        year.is_some_and(|y| f64::from(self.lo) <= y && y <= f64::from(self.hi))
    }
}

/// Sort order of the ranked view by watch-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPreference {
    #[default]
    MostViewed,
    LeastViewed,
}

impl ViewPreference {
    pub const ALL: [ViewPreference; 2] = [ViewPreference::MostViewed, ViewPreference::LeastViewed];

    pub fn label(self) -> &'static str {
        match self {
            ViewPreference::MostViewed => "Most Viewed",
            ViewPreference::LeastViewed => "Least Viewed",
        }
    }
}

impl fmt::Display for ViewPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's current filter and sort selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub content_type: ContentType,
    /// Case-sensitive substring looked for in each record's genre.
    pub genre: String,
    pub years: YearRange,
    pub preference: ViewPreference,
}

impl FilterCriteria {
    /// Selector defaults: first type, first genre of the dataset.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        FilterCriteria {
            content_type: ContentType::Movie,
            genre: dataset.genres.first().cloned().unwrap_or_default(),
            years: YearRange::default(),
            preference: ViewPreference::default(),
        }
    }

    pub fn matches(&self, record: &TitleRecord) -> bool {
        record.content_type == self.content_type
            && record.genre.contains(self.genre.as_str())
            && self.years.contains(record.premiere)
    }
}

// ---------------------------------------------------------------------------
// Ranked view
// ---------------------------------------------------------------------------

/// Indices into the dataset of the matching records, in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedView {
    pub indices: Vec<usize>,
}

impl RankedView {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The recommendation anchor: first record of the full ranking.
    pub fn top<'a>(&self, dataset: &'a Dataset) -> Option<&'a TitleRecord> {
        self.indices.first().map(|&i| &dataset.records[i])
    }

    /// The first `n` ranked records.
    pub fn head<'a>(&self, dataset: &'a Dataset, n: usize) -> Vec<&'a TitleRecord> {
        self.indices.iter().take(n).map(|&i| &dataset.records[i]).collect()
    }
}

/// Select the records matching `criteria` and rank them by watch-time.
///
/// The sort is stable, so equal watch-times keep dataset order. Records
/// without a watch-time go last regardless of direction.
pub fn filter_and_sort(dataset: &Dataset, criteria: &FilterCriteria) -> RankedView {
    let mut indices: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| {
        compare_watchtime(
            dataset.records[a].watchtime_million,
            dataset.records[b].watchtime_million,
            criteria.preference,
        )
    });

    RankedView { indices }
}

fn compare_watchtime(a: Option<f64>, b: Option<f64>, preference: ViewPreference) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match preference {
            ViewPreference::MostViewed => y.total_cmp(&x),
            ViewPreference::LeastViewed => x.total_cmp(&y),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn scenario_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Stranger Things", "TV Show", "Drama, Sci-Fi", Some(2016), Some(140.0)),
            record("Bird Box", "Movie", "Thriller", Some(2018), Some(282.0)),
            record("Old Film", "Movie", "Drama", Some(1995), Some(10.0)),
        ])
    }

    fn criteria(content_type: ContentType, genre: &str, lo: i32, hi: i32) -> FilterCriteria {
        FilterCriteria {
            content_type,
            genre: genre.to_string(),
            years: YearRange { lo, hi },
            preference: ViewPreference::MostViewed,
        }
    }

    fn titles<'a>(view: &RankedView, ds: &'a Dataset) -> Vec<&'a str> {
        view.head(ds, usize::MAX).into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_no_match_scenario() {
        let ds = scenario_dataset();
        let c = criteria(ContentType::Movie, "Drama", 2000, 2023);

        let view = filter_and_sort(&ds, &c);
        assert!(view.is_empty());
        assert!(view.top(&ds).is_none());
    }

    #[test]
    fn test_single_match_scenario() {
        let ds = scenario_dataset();
        let c = criteria(ContentType::Movie, "Thriller", 2000, 2023);

        let view = filter_and_sort(&ds, &c);
        assert_eq!(titles(&view, &ds), vec!["Bird Box"]);
        assert_eq!(view.top(&ds).map(|r| r.title.as_str()), Some("Bird Box"));
    }

    #[test]
    fn test_genre_is_case_sensitive_substring() {
        let ds = scenario_dataset();

        let view = filter_and_sort(&ds, &criteria(ContentType::TvShow, "Sci-Fi", 2000, 2023));
        assert_eq!(titles(&view, &ds), vec!["Stranger Things"]);

        let view = filter_and_sort(&ds, &criteria(ContentType::TvShow, "drama", 2000, 2023));
        assert!(view.is_empty());
    }

    #[test]
    fn test_year_bounds_inclusive() {
        let ds = scenario_dataset();

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "", 2018, 2018));
        assert_eq!(titles(&view, &ds), vec!["Bird Box"]);

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "", 1995, 2018));
        assert_eq!(titles(&view, &ds), vec!["Bird Box", "Old Film"]);

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "", 2019, 2018));
        assert!(view.is_empty());
    }

    #[test]
    fn test_fractional_premiere_compared_as_number() {
        let mut midyear = record("Midyear", "Movie", "Drama", None, Some(3.0));
        midyear.premiere = Some(2016.5);
        let ds = Dataset::from_records(vec![midyear]);

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "Drama", 2010, 2020));
        assert_eq!(titles(&view, &ds), vec!["Midyear"]);

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "Drama", 2017, 2020));
        assert!(view.is_empty());

        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "Drama", 2000, 2016));
        assert!(view.is_empty());
    }

    #[test]
    fn test_missing_premiere_never_matches() {
        let ds = Dataset::from_records(vec![
            record("Undated", "Movie", "Drama", None, Some(500.0)),
            record("Dated", "Movie", "Drama", Some(2015), Some(1.0)),
        ]);

        for (lo, hi) in [(YEAR_MIN, YEAR_MAX), (i32::MIN, i32::MAX), (0, 0)] {
            let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "Drama", lo, hi));
            assert!(!titles(&view, &ds).contains(&"Undated"));
        }
    }

    #[test]
    fn test_every_match_returned_and_only_matches() {
        let ds = Dataset::from_records(vec![
            record("A", "Movie", "Comedy", Some(2012), Some(5.0)),
            record("B", "TV Show", "Comedy", Some(2012), Some(6.0)),
            record("C", "Movie", "Romantic Comedy", Some(2020), Some(7.0)),
            record("D", "Movie", "Comedy", Some(2021), Some(8.0)),
            record("E", "Movie", "Horror", Some(2015), Some(9.0)),
        ]);
        let c = criteria(ContentType::Movie, "Comedy", 2010, 2020);

        let view = filter_and_sort(&ds, &c);
        for &i in &view.indices {
            assert!(c.matches(&ds.records[i]));
        }
        let expected = ds.records.iter().filter(|r| c.matches(r)).count();
        assert_eq!(view.len(), expected);
        assert_eq!(titles(&view, &ds), vec!["C", "A"]);
    }

    #[test]
    fn test_sort_direction_and_stability() {
        let ds = Dataset::from_records(vec![
            record("first", "Movie", "Drama", Some(2015), Some(50.0)),
            record("low", "Movie", "Drama", Some(2015), Some(10.0)),
            record("second", "Movie", "Drama", Some(2015), Some(50.0)),
            record("high", "Movie", "Drama", Some(2015), Some(90.0)),
            record("third", "Movie", "Drama", Some(2015), Some(50.0)),
        ]);
        let mut c = criteria(ContentType::Movie, "Drama", 2010, 2020);

        let view = filter_and_sort(&ds, &c);
        assert_eq!(
            titles(&view, &ds),
            vec!["high", "first", "second", "third", "low"]
        );

        c.preference = ViewPreference::LeastViewed;
        let view = filter_and_sort(&ds, &c);
        assert_eq!(
            titles(&view, &ds),
            vec!["low", "first", "second", "third", "high"]
        );
    }

    #[test]
    fn test_missing_watchtime_sorts_last() {
        let ds = Dataset::from_records(vec![
            record("unknown", "Movie", "Drama", Some(2015), None),
            record("small", "Movie", "Drama", Some(2015), Some(1.0)),
            record("big", "Movie", "Drama", Some(2015), Some(100.0)),
        ]);
        let mut c = criteria(ContentType::Movie, "Drama", 2010, 2020);

        let view = filter_and_sort(&ds, &c);
        assert_eq!(titles(&view, &ds), vec!["big", "small", "unknown"]);

        c.preference = ViewPreference::LeastViewed;
        let view = filter_and_sort(&ds, &c);
        assert_eq!(titles(&view, &ds), vec!["small", "big", "unknown"]);
    }

    #[test]
    fn test_head_truncates_to_display_rows() {
        let records = (0..25)
            .map(|i| record(&format!("T{i}"), "Movie", "Drama", Some(2015), Some(i as f64)))
            .collect();
        let ds = Dataset::from_records(records);
        let view = filter_and_sort(&ds, &criteria(ContentType::Movie, "Drama", 2010, 2020));

        assert_eq!(view.len(), 25);
        let shown = view.head(&ds, DISPLAY_ROWS);
        assert_eq!(shown.len(), DISPLAY_ROWS);
        assert_eq!(shown[0].title, "T24");
        assert_eq!(view.top(&ds).map(|r| &r.title), Some(&shown[0].title));
    }

    #[test]
    fn test_default_criteria_for_dataset() {
        let ds = scenario_dataset();
        let c = FilterCriteria::for_dataset(&ds);

        assert_eq!(c.content_type, ContentType::Movie);
        assert_eq!(c.genre, "Drama, Sci-Fi");
        assert_eq!(c.years, YearRange { lo: 2010, hi: 2020 });
        assert_eq!(c.preference, ViewPreference::MostViewed);
    }
}
