//! Bottom status bar rendering for the embedded API address.

use super::super::*;
use eframe::egui;

impl TabdeckApp {
    /// Renders the bottom status bar with API metadata.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Tab: {}", self.selector.current().label()))
                            .small()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let api_label = if self.server_used_fallback {
                            format!("API: http://{}/api/cache-demo (auto)", self.server_addr)
                        } else {
                            format!("API: http://{}/api/cache-demo", self.server_addr)
                        };
                        ui.label(
                            egui::RichText::new(api_label)
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                    });
                });
            });
    }
}
