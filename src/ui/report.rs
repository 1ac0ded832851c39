use eframe::egui::{RichText, Ui};

use crate::analysis::{DisplayPayload, PayloadBody};

/// Render the analysis section below the table.
pub fn analysis_section(ui: &mut Ui, payload: &DisplayPayload) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(payload.heading);
        if ui.small_button("Copy").on_hover_text("Copy as Markdown").clicked() {
            ui.ctx().copy_text(payload.to_markdown());
        }
    });

    match &payload.body {
        PayloadBody::Bullets { title, items } => {
            ui.label(RichText::new(*title).strong().size(16.0));
            for item in items.iter() {
                ui.label(format!("•  {item}"));
            }
        }
        PayloadBody::Recommendation(text) => {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.strong("Recommendation:");
                ui.label(text);
            });
        }
        PayloadBody::NoRecommendation => {
            for line in payload.body_lines() {
                ui.label(line);
            }
        }
    }
}
