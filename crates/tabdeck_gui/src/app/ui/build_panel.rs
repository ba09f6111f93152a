//! Turbopack panel: side-by-side simulated build timings.

use super::super::*;
use crate::backend::SimCmd;
use eframe::egui;
use tabdeck_core::panels::{format_seconds, BuildKind};

impl TabdeckApp {
    pub(crate) fn render_build_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Build(panel) = &mut self.panel else {
            return;
        };

        ui.heading("Turbopack");
        ui.label(
            egui::RichText::new("Simulated build timings: Webpack takes 15s, Turbopack 3s.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        let running = panel.is_running();
        ui.horizontal(|ui| {
            for kind in [BuildKind::Webpack, BuildKind::Turbopack] {
                let label = format!(
                    "Build with {} ({})",
                    kind.label(),
                    format_seconds(kind.duration_ms())
                );
                let trigger = ui.add_enabled(!running, egui::Button::new(label));
                if trigger.clicked() && panel.start(kind) {
                    let _ = self.sim.cmd_tx.send(SimCmd::StartBuild { mount, kind });
                }
            }
        });

        if let Some(run) = panel.run() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new(run.kind.label()).strong());
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(run.progress())
                        .show_percentage()
                        .fill(COLOR_ACCENT),
                );
                ui.add_space(4.0);
                if run.is_finished() {
                    ui.label(
                        egui::RichText::new(format!(
                            "Build finished in {}",
                            format_seconds(run.elapsed_ms)
                        ))
                        .color(COLOR_OK),
                    );
                } else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(format!(
                            "Building... {} / {}",
                            format_seconds(run.elapsed_ms),
                            format_seconds(run.kind.duration_ms())
                        ));
                    });
                }
            });
        }
    }
}
