use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

/// "Server Error" alert shown after a failed start
pub fn render_error_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.error_dialog.clone() else {
        return;
    };
    let palette = state.theme.palette();

    egui::Window::new("Server Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame(palette))
        .show(ctx, |ui| {
            ui.colored_label(palette.error, message);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Retry").clicked() {
                    state.error_dialog = None;
                    state.start_server();
                }
                if ui.button("OK").clicked() {
                    state.error_dialog = None;
                }
            });
        });
}

/// Quit confirmation while the server is running
pub fn render_quit_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.confirm_quit {
        return;
    }
    let palette = state.theme.palette();

    egui::Window::new("Quit")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame(palette))
        .show(ctx, |ui| {
            ui.label("Server is running. Stop server and quit?");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    state.quit_confirmed();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui.button("No").clicked() {
                    state.confirm_quit = false;
                }
            });
        });
}
