use eframe::egui;

use crate::egui_app::server_log::LogLevel;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Server Log").strong());
        ui.label(format!("({} entries)", state.log.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                state.log.clear();
            }
        });
    });

    styles::field_frame(palette).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("server_log")
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in state.log.entries() {
                    let color = match entry.level {
                        LogLevel::Error => palette.error,
                        LogLevel::Warn => palette.warning,
                        LogLevel::Info => palette.text,
                    };
                    ui.colored_label(color, egui::RichText::new(entry.to_string()).monospace());
                }
            });
    });
}
