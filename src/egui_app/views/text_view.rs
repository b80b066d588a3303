use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::styles;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.label(egui::RichText::new("Current Shared Text").strong());
    styles::field_frame(palette).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("shared_text")
            .max_height(80.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                // Read-only: edits go through the input below
                ui.add(
                    egui::TextEdit::multiline(&mut state.shared_text_display.as_str())
                        .desired_width(f32::INFINITY)
                        .desired_rows(3)
                        .frame(false),
                );
            });
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let input_width = (ui.available_width() - 170.0).max(120.0);
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.text_input)
                .hint_text("New shared text")
                .desired_width(input_width),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Update Text (from GUI)").clicked() || submitted {
            state.update_text_from_gui();
        }
    });
}
