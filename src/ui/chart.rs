use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::data::filter::DISPLAY_ROWS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Watch-time bar chart (central panel)
// ---------------------------------------------------------------------------

/// One bar per displayed row, in table order, coloured by genre.
pub fn watchtime_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .view
        .head(&state.dataset, DISPLAY_ROWS)
        .into_iter()
        .enumerate()
        .filter_map(|(i, rec)| {
            let value = rec.watchtime_million?;
            Some(
                Bar::new(i as f64, value)
                    .name(&rec.title)
                    .fill(state.genre_colors.color_for(&rec.genre))
                    .width(0.7),
            )
        })
        .collect();

    if bars.is_empty() {
        return;
    }

    Plot::new("watchtime_chart")
        .height(220.0)
        .x_axis_label("Row")
        .y_axis_label("Watchtime (million)")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Watchtime in Million"));
        });
}
