//! Top tab bar rendering.

use super::super::*;
use eframe::egui;
use tabdeck_core::TABS;

impl TabdeckApp {
    /// Renders the tab bar; clicking a tab remounts the matching panel.
    pub(crate) fn render_tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tabs")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Tabdeck")
                            .heading()
                            .color(COLOR_ACCENT),
                    );
                    ui.add_space(12.0);
                    let active = self.selector.current();
                    let mut clicked = None;
                    for descriptor in TABS {
                        let selected = descriptor.id == active;
                        if ui
                            .selectable_label(selected, descriptor.label)
                            .clicked()
                            && !selected
                        {
                            clicked = Some(descriptor.id);
                        }
                    }
                    if let Some(tab) = clicked {
                        self.select_tab(tab);
                    }
                });
                ui.add_space(6.0);
            });
    }
}
