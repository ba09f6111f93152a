//! React 19 Support panel: deferred load plus an auto-resetting quick form.

use super::super::*;
use super::{display_timestamp, field_row};
use crate::backend::SimCmd;
use eframe::egui;

impl TabdeckApp {
    pub(crate) fn render_transition_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Transition(panel) = &mut self.panel else {
            return;
        };

        ui.heading("React 19 Support");
        ui.label(
            egui::RichText::new("A deferred data load and a quick form whose banner auto-clears.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        let trigger = ui.add_enabled(!panel.is_load_pending(), egui::Button::new("Load Data"));
        if trigger.clicked() && panel.begin_load() {
            let _ = self.sim.cmd_tx.send(SimCmd::LoadTransition { mount });
        }

        if panel.is_load_pending() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading data with use() hook...");
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
                field_row(ui, "Version:", record.version);
                field_row(ui, "Features:", &record.features.join(", "));
                field_row(ui, "Timestamp:", &display_timestamp(record.timestamp));
            });
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Quick Form").strong());
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut panel.name_draft);
        });
        ui.horizontal(|ui| {
            ui.label("Email:");
            ui.text_edit_singleline(&mut panel.email_draft);
        });

        let submit = ui.add_enabled(!panel.is_form_pending(), egui::Button::new("Submit"));
        if submit.clicked() {
            if let Some(submission) = panel.begin_quick_form() {
                let _ = self
                    .sim
                    .cmd_tx
                    .send(SimCmd::SubmitQuickForm { mount, submission });
            }
        }

        if panel.is_form_pending() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Submitting...");
            });
        }

        if let Some(submitted) = panel.submitted() {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "Thanks {}! We'll reach out at {}.",
                        submitted.name, submitted.email
                    ))
                    .color(COLOR_OK),
                );
            });
        }
    }
}
