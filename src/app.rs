use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{chart, panels, report, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FlixDashboardApp {
    pub state: AppState,
}

impl FlixDashboardApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for FlixDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selections ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, chart, analysis ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    table::results_table(ui, &self.state);
                    ui.add_space(8.0);
                    chart::watchtime_chart(ui, &self.state);
                    ui.separator();
                    report::analysis_section(ui, &self.state.payload());
                });
        });
    }
}
