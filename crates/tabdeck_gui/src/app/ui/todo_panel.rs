//! Server Action panel: todo list plus a profile form.

use super::super::*;
use crate::backend::SimCmd;
use eframe::egui;

impl TabdeckApp {
    pub(crate) fn render_todo_panel(&mut self, ui: &mut egui::Ui) {
        let mount = self.mount;
        let ActivePanel::Todos(panel) = &mut self.panel else {
            return;
        };

        ui.heading("Server Action");
        ui.label(
            egui::RichText::new("Todo mutations and a profile update, each behind its own delay.")
                .color(COLOR_TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut panel.todo_draft);
            let add = ui.add_enabled(!panel.is_adding(), egui::Button::new("Add Todo"));
            if add.clicked() {
                if let Some(text) = panel.begin_add() {
                    let _ = self.sim.cmd_tx.send(SimCmd::AddTodo { mount, text });
                }
            }
            if panel.is_adding() {
                ui.spinner();
            }
        });

        ui.add_space(8.0);
        for todo in panel.todos() {
            ui.horizontal(|ui| {
                let mark = if todo.completed { "☑" } else { "☐" };
                if ui.button(mark).clicked() {
                    let _ = self
                        .sim
                        .cmd_tx
                        .send(SimCmd::ToggleTodo { mount, id: todo.id });
                }
                if todo.completed {
                    ui.label(
                        egui::RichText::new(&todo.text)
                            .strikethrough()
                            .color(COLOR_TEXT_MUTED),
                    );
                } else {
                    ui.label(&todo.text);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        let _ = self
                            .sim
                            .cmd_tx
                            .send(SimCmd::DeleteTodo { mount, id: todo.id });
                    }
                });
            });
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Profile").strong());
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut panel.profile_draft.name);
        });
        ui.horizontal(|ui| {
            ui.label("Email:");
            ui.text_edit_singleline(&mut panel.profile_draft.email);
        });
        ui.label("Bio:");
        ui.text_edit_multiline(&mut panel.profile_draft.bio);

        ui.add_space(6.0);
        let update = ui.add_enabled(
            !panel.is_profile_updating(),
            egui::Button::new("Update Profile"),
        );
        if update.clicked() {
            if let Some(input) = panel.begin_profile_update() {
                let _ = self.sim.cmd_tx.send(SimCmd::UpdateProfile { mount, input });
            }
        }

        if panel.is_profile_updating() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Updating profile...");
            });
        }

        if let Some(profile) = panel.profile() {
            ui.add_space(8.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("Saved profile").color(COLOR_OK));
                ui.label(format!("{} <{}>", profile.name, profile.email));
                if !profile.bio.is_empty() {
                    ui.label(&profile.bio);
                }
            });
        }
    }
}
