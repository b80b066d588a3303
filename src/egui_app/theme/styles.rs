//! Theme Styling Functions
//!
//! This module provides helper functions for applying the selected palette
//! consistently across all UI components.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::{Palette, ThemeName};
use crate::shared::ServerLifecycleState;

/// Apply the selected theme to the egui context
pub fn apply_theme(ctx: &egui::Context, theme: ThemeName) {
    let palette = theme.palette();
    let mut visuals = if palette.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    // Window styling
    visuals.window_fill = palette.panel_bg;
    visuals.window_stroke = Stroke::new(1.0, palette.border);

    // Panel styling
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.field_bg;
    visuals.override_text_color = Some(palette.text);

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = palette.panel_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);

    visuals.widgets.inactive.bg_fill = palette.accent;
    visuals.widgets.inactive.weak_bg_fill = palette.accent;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.on_accent);

    visuals.widgets.hovered.bg_fill = palette.accent_hover;
    visuals.widgets.hovered.weak_bg_fill = palette.accent_hover;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.on_accent);

    visuals.widgets.active.bg_fill = palette.accent_hover;
    visuals.widgets.active.weak_bg_fill = palette.accent_hover;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.on_accent);

    // Selection color
    visuals.selection.bg_fill = palette.accent;
    visuals.selection.stroke = Stroke::new(1.0, palette.on_accent);

    // Visuals are stored per theme; select the slot they belong to
    ctx.set_theme(if palette.dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    ctx.set_visuals(visuals);
}

/// Color of the status line for a lifecycle state
pub fn status_color(palette: &Palette, state: &ServerLifecycleState) -> Color32 {
    match state {
        ServerLifecycleState::Running => palette.success,
        ServerLifecycleState::Starting => palette.warning,
        ServerLifecycleState::Stopped | ServerLifecycleState::Failed(_) => palette.error,
    }
}

/// Frame around one section of the window (controls, text, log)
pub fn section_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.panel_bg)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the read-only text and log areas
pub fn field_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.field_bg)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::same(6))
}

/// Create a frame for modal dialogs
pub fn modal_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.panel_bg)
        .stroke(Stroke::new(2.0, palette.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}
