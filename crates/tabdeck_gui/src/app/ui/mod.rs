//! UI panel modules extracted from the main app update loop.

/// Turbopack build comparison panel.
pub(super) mod build_panel;
/// Cache Semantics panel.
pub(super) mod cache_panel;
/// Next Form panel.
pub(super) mod contact_panel;
/// Async Request panel.
pub(super) mod fetch_panel;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Top tab bar.
pub(super) mod tab_bar;
/// Server Action panel.
pub(super) mod todo_panel;
/// React 19 Support panel.
pub(super) mod transition_panel;

use chrono::{DateTime, SecondsFormat, Utc};
use eframe::egui;

/// Render one `label: value` row of a result card.
pub(super) fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(egui::RichText::new(value).monospace());
    });
}

/// Format a record timestamp the way result cards display it.
pub(super) fn display_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
