use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

pub mod server_view;
pub mod text_view;
pub mod log_view;
pub mod dialogs;

/// Server controls, status and theme selector
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let palette = state.theme.palette();

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::section_frame(palette))
        .show(ctx, |ui| server_view::render_controls(ui, state));
}

/// QR code on the right, address, shared text and log in the middle
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let palette = state.theme.palette();

    egui::SidePanel::right("qr_panel")
        .resizable(false)
        .frame(styles::section_frame(palette))
        .show(ctx, |ui| server_view::render_qr(ui, state));

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(palette.panel_bg).inner_margin(egui::Margin::same(8)))
        .show(ctx, |ui| {
            styles::section_frame(palette).show(ui, |ui| server_view::render_addresses(ui, state));
            ui.add_space(6.0);
            styles::section_frame(palette).show(ui, |ui| text_view::render(ui, state));
            ui.add_space(6.0);
            styles::section_frame(palette).show(ui, |ui| log_view::render(ui, state));
        });
}
