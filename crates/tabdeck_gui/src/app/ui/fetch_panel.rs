//! Async Request panel: one button, one simulated fetch.

use super::super::*;
use super::{display_timestamp, field_row};
use crate::backend::SimCmd;
use eframe::egui;

impl TabdeckApp {
    pub(crate) fn render_fetch_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Fetch(panel) = &mut self.panel else {
            return;
        };

        ui.heading("Async Request");
        ui.label(
            egui::RichText::new("Triggers a simulated fetch with a fixed two second delay.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        let trigger = ui.add_enabled(!panel.is_pending(), egui::Button::new("Fetch Data"));
        if trigger.clicked() && panel.begin() {
            let _ = self.sim.cmd_tx.send(SimCmd::FetchData { mount });
        }

        if panel.is_pending() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Fetching data asynchronously...");
            });
        }

        if let Some(record) = panel.record() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(&record.message)
                        .strong()
                        .color(COLOR_OK),
                );
                ui.add_space(4.0);
                field_row(ui, "Timestamp:", &display_timestamp(record.timestamp));
                field_row(ui, "Request ID:", &record.id);
            });
        }
    }
}
