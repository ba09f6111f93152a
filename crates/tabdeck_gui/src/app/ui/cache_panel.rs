//! Cache Semantics panel: one fetch per cache strategy.

use super::super::*;
use super::{display_timestamp, field_row};
use crate::backend::SimCmd;
use eframe::egui;
use tabdeck_core::CacheStrategy;

fn button_label(strategy: CacheStrategy) -> &'static str {
    match strategy {
        CacheStrategy::Default => "Default Cache",
        CacheStrategy::NoCache => "No Cache",
        CacheStrategy::ForceCache => "Force Cache",
    }
}

impl TabdeckApp {
    pub(crate) fn render_cache_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Cache(panel) = &mut self.panel else {
            return;
        };

        ui.heading("Cache Semantics");
        ui.label(
            egui::RichText::new("Each strategy maps to a different Cache-Control response header.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        let pending = panel.is_pending();
        ui.horizontal(|ui| {
            for strategy in CacheStrategy::ALL {
                let trigger =
                    ui.add_enabled(!pending, egui::Button::new(button_label(strategy)));
                if trigger.clicked() && panel.begin(strategy) {
                    let _ = self.sim.cmd_tx.send(SimCmd::CacheFetch { mount, strategy });
                }
            }
        });

        if let Some(strategy) = panel.pending_strategy() {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Fetching with {} strategy...", strategy.as_str()));
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
                field_row(ui, "Strategy:", record.strategy.as_str());
                field_row(ui, "Timestamp:", &display_timestamp(record.timestamp));
                field_row(ui, "Request ID:", &record.request_id);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Cached:").strong());
                    if record.cached {
                        ui.label(egui::RichText::new("Yes").color(COLOR_OK));
                    } else {
                        ui.label(egui::RichText::new("No").color(COLOR_ERROR));
                    }
                });
            });
        }
    }
}
