//! Next Form panel: validated contact form with a submissions list.

use super::super::*;
use super::{display_timestamp, field_row};
use crate::backend::SimCmd;
use eframe::egui;

impl TabdeckApp {
    pub(crate) fn render_contact_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Contact(panel) = &mut self.panel else {
            return;
        };

        ui.heading("Next Form");
        ui.label(
            egui::RichText::new("Validated contact form; accepted entries list newest first.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut panel.draft.name);
        });
        if let Some(error) = panel.errors().name {
            ui.label(egui::RichText::new(error).small().color(COLOR_ERROR));
        }

        ui.horizontal(|ui| {
            ui.label("Email:");
            ui.text_edit_singleline(&mut panel.draft.email);
        });
        if let Some(error) = panel.errors().email {
            ui.label(egui::RichText::new(error).small().color(COLOR_ERROR));
        }

        ui.label("Message:");
        ui.text_edit_multiline(&mut panel.draft.message);

        ui.add_space(6.0);
        let submit = ui.add_enabled(!panel.is_submitting(), egui::Button::new("Send Message"));
        if submit.clicked() {
            if let Some(input) = panel.submit_draft() {
                let _ = self.sim.cmd_tx.send(SimCmd::SubmitContact { mount, input });
            }
        }

        if panel.is_submitting() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Sending...");
            });
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Submissions ({})", panel.submissions().len()))
                    .strong(),
            );
            if !panel.submissions().is_empty() && ui.button("Clear All").clicked() {
                panel.clear_submissions();
            }
        });

        if panel.submissions().is_empty() {
            ui.label(
                egui::RichText::new("No submissions yet.")
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
        }

        for submission in panel.submissions() {
            ui.add_space(6.0);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&submission.name).strong());
                    ui.label(
                        egui::RichText::new(&submission.email)
                            .small()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                });
                if !submission.message.is_empty() {
                    ui.label(&submission.message);
                }
                field_row(ui, "Received:", &display_timestamp(submission.timestamp));
            });
        }
    }
}
