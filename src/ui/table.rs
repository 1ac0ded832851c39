use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::DISPLAY_ROWS;
use crate::state::AppState;

const HEADERS: [&str; 5] = ["", "Title", "Genre", "Premiere", "Watchtime in Million"];

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the first [`DISPLAY_ROWS`] ranked titles.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Filtered Data Table (Sorted by Watchtime)");

    if state.view.is_empty() {
        ui.label(RichText::new("No titles match the current filters.").italics());
        return;
    }
    let rows = state.view.head(&state.dataset, DISPLAY_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(24.0))
        .column(Column::initial(260.0).at_least(120.0))
        .column(Column::initial(180.0).at_least(80.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for name in HEADERS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for (i, rec) in rows.iter().enumerate() {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(i.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&rec.title);
                    });
                    row.col(|ui| {
                        let color = state.genre_colors.color_for(&rec.genre);
                        ui.label(RichText::new(&rec.genre).color(color));
                    });
                    row.col(|ui| {
                        ui.label(format_premiere(rec.premiere));
                    });
                    row.col(|ui| {
                        ui.label(format_watchtime(rec.watchtime_million));
                    });
                });
            }
        });
}

/// Missing values render as an empty cell.
fn format_premiere(year: Option<f64>) -> String {
    match year {
        Some(y) if y.fract() == 0.0 => format!("{y:.0}"),
        Some(y) => y.to_string(),
        None => String::new(),
    }
}

fn format_watchtime(value: Option<f64>) -> String {
    value.map(|v| format!("{v:?}")).unwrap_or_default()
}
