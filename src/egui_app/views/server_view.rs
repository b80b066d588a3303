use eframe::egui;

use crate::egui_app::qr::{QR_BORDER, QR_BOX_SIZE};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles, ThemeName};

pub fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("LocalFetch Server").size(18.0).strong());
        ui.separator();

        // Port comes from configuration and cannot be edited here
        ui.label("Port:");
        let mut port = state.port().to_string();
        ui.add_enabled(
            false,
            egui::TextEdit::singleline(&mut port).desired_width(60.0),
        );

        let running = state.is_running();
        if ui.add_enabled(!running, egui::Button::new("Start Server")).clicked() {
            state.start_server();
        }
        if ui.add_enabled(running, egui::Button::new("Stop Server")).clicked() {
            state.stop_server();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = state.theme;
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for theme in ThemeName::ALL {
                        ui.selectable_value(&mut selected, theme, theme.display_name());
                    }
                });
            ui.label("Theme:");
            if selected != state.theme {
                state.set_theme(selected);
                styles::apply_theme(ui.ctx(), selected);
            }
        });
    });

    ui.add_space(4.0);
    ui.colored_label(
        styles::status_color(palette, &state.status),
        egui::RichText::new(&state.status_detail).strong(),
    );
}

pub fn render_addresses(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.horizontal(|ui| {
        ui.label("Server IP:");
        ui.label(egui::RichText::new(state.addresses.preferred.to_string()).monospace().strong());

        if ui.button("Copy Addr").clicked() {
            if let Some(address) = state.copy_address() {
                ui.ctx().copy_text(address);
            }
        }
        if ui.button("Refresh IPs").clicked() {
            state.refresh_addresses();
            state.log.info("Refreshed local IP addresses.");
        }
    });

    let others = state.addresses.others();
    let others = if others.is_empty() {
        "None".to_string()
    } else {
        others.iter().map(|ip| ip.to_string()).collect::<Vec<_>>().join(", ")
    };
    ui.colored_label(palette.muted_text, format!("Other IPs: {}", others));
}

pub fn render_qr(ui: &mut egui::Ui, state: &AppState) {
    let palette = state.theme.palette();

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Scan to connect").strong());
        ui.add_space(6.0);

        let Some(qr) = &state.qr else {
            ui.colored_label(palette.muted_text, "Start the server\nto show a QR code.");
            return;
        };

        let side = qr.side_points();
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, colors::QR_LIGHT);

        let module = egui::vec2(QR_BOX_SIZE, QR_BOX_SIZE);
        for (x, y) in qr.dark_modules() {
            let min = rect.min
                + egui::vec2(
                    (x + QR_BORDER) as f32 * QR_BOX_SIZE,
                    (y + QR_BORDER) as f32 * QR_BOX_SIZE,
                );
            painter.rect_filled(egui::Rect::from_min_size(min, module), 0.0, colors::QR_DARK);
        }

        ui.add_space(6.0);
        ui.label(egui::RichText::new(qr.data()).monospace());
    });
}
