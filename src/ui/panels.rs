use eframe::egui::{self, ComboBox, RichText, ScrollArea, Slider, Ui};

use crate::analysis::AnalysisMode;
use crate::data::filter::{ViewPreference, YEAR_MAX, YEAR_MIN};
use crate::data::model::ContentType;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel. Any filter change recomputes the view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Type ----
            ui.strong("Select Type:");
            ComboBox::from_id_salt("content_type")
                .selected_text(state.criteria.content_type.label().to_owned())
                .show_ui(ui, |ui: &mut Ui| {
                    for ct in ContentType::SELECTABLE {
                        let selected = state.criteria.content_type == ct;
                        if ui.selectable_label(selected, ct.label()).clicked() && !selected {
                            state.criteria.content_type = ct;
                            changed = true;
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Genre ----
            ui.strong("Select Genre:");
            ComboBox::from_id_salt("genre")
                .selected_text(state.criteria.genre.clone())
                .width(ui.available_width() - 8.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for genre in &state.dataset.genres {
                        let selected = state.criteria.genre == *genre;
                        let text = RichText::new(genre).color(state.genre_colors.color_for(genre));
                        if ui.selectable_label(selected, text).clicked() && !selected {
                            state.criteria.genre = genre.clone();
                            changed = true;
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Year range ----
            ui.strong("Select Year Range:");
            let years = &mut state.criteria.years;
            if ui
                .add(Slider::new(&mut years.lo, YEAR_MIN..=YEAR_MAX).text("From"))
                .changed()
            {
                years.hi = years.hi.max(years.lo);
                changed = true;
            }
            if ui
                .add(Slider::new(&mut years.hi, YEAR_MIN..=YEAR_MAX).text("To"))
                .changed()
            {
                years.lo = years.lo.min(years.hi);
                changed = true;
            }
            ui.add_space(6.0);

            // ---- Viewing preference ----
            ui.strong("Select Viewing Preference:");
            for pref in ViewPreference::ALL {
                if ui
                    .radio_value(&mut state.criteria.preference, pref, pref.label())
                    .changed()
                {
                    changed = true;
                }
            }
            ui.separator();

            // ---- Analysis ----
            ui.strong("Select Analysis Type:");
            ComboBox::from_id_salt("analysis_mode")
                .selected_text(state.mode.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in AnalysisMode::ALL {
                        ui.selectable_value(&mut state.mode, mode, mode.label());
                    }
                });
        });

    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Netflix Movie Recommendation System").strong());
        ui.separator();
        ui.label(format!(
            "{} titles loaded, {} matching",
            state.dataset.len(),
            state.view.len()
        ));
    });
}
