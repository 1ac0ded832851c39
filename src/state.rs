use crate::analysis::{AnalysisMode, DisplayPayload, present};
use crate::color::ColorMap;
use crate::data::filter::{FilterCriteria, RankedView, filter_and_sort};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated afterwards.
    pub dataset: Dataset,

    /// Current selector values.
    pub criteria: FilterCriteria,

    /// Which analysis section is shown under the table.
    pub mode: AnalysisMode,

    /// Records passing `criteria`, in ranked order.
    pub view: RankedView,

    /// Genre label colours.
    pub genre_colors: ColorMap,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let criteria = FilterCriteria::for_dataset(&dataset);
        let genre_colors = ColorMap::new(&dataset.genres);
        let mut state = AppState {
            dataset,
            criteria,
            mode: AnalysisMode::default(),
            view: RankedView::default(),
            genre_colors,
        };
        state.refilter();
        state
    }

    /// Recompute the ranked view after a criteria change.
    pub fn refilter(&mut self) {
        self.view = filter_and_sort(&self.dataset, &self.criteria);
        log::debug!(
            "{} / {:?} / {}..={} / {}: {} matching",
            self.criteria.content_type,
            self.criteria.genre,
            self.criteria.years.lo,
            self.criteria.years.hi,
            self.criteria.preference,
            self.view.len()
        );
    }

    /// Analysis section for the current mode and ranking.
    pub fn payload(&self) -> DisplayPayload {
        present(self.mode, &self.dataset, &self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PayloadBody;
    use crate::data::filter::ViewPreference;
    use crate::data::model::{ContentType, record};

    fn state() -> AppState {
        AppState::new(Dataset::from_records(vec![
            record("Bird Box", "Movie", "Thriller", Some(2018), Some(282.0)),
            record("Extraction", "Movie", "Action, Thriller", Some(2020), Some(231.0)),
            record("Mindhunter", "TV Show", "Thriller", Some(2017), Some(90.0)),
            record("Old Thriller", "Movie", "Thriller", Some(1999), Some(500.0)),
        ]))
    }

    #[test]
    fn test_initial_view_uses_defaults() {
        let s = state();
        assert_eq!(s.criteria.genre, "Thriller");
        assert_eq!(s.mode, AnalysisMode::NetflixInsights);
        assert_eq!(s.view.indices, vec![0, 1]);
    }

    #[test]
    fn test_refilter_after_change() {
        let mut s = state();
        s.criteria.preference = ViewPreference::LeastViewed;
        s.refilter();
        assert_eq!(s.view.indices, vec![1, 0]);

        s.criteria.content_type = ContentType::TvShow;
        s.refilter();
        assert_eq!(s.view.indices, vec![2]);
    }

    #[test]
    fn test_payload_follows_mode_and_view() {
        let mut s = state();
        s.mode = AnalysisMode::PurchaseRecommendation;
        assert!(matches!(
            s.payload().body,
            PayloadBody::Recommendation(ref text) if text.contains("'Bird Box'")
        ));

        s.criteria.genre = "Comedy".to_string();
        s.refilter();
        assert_eq!(s.payload().body, PayloadBody::NoRecommendation);
    }
}
