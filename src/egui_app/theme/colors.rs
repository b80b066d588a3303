//! Color Palettes
//!
//! One palette per selectable theme. The brown palette keeps the warm
//! brown/tan scheme; light and dark are neutral.

use eframe::egui::Color32;

/// Colors used by the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window and panel background
    pub panel_bg: Color32,
    /// Background of the text and log areas
    pub field_bg: Color32,
    /// Regular text
    pub text: Color32,
    /// Secondary text, e.g. the "Other IPs" line
    pub muted_text: Color32,
    /// Buttons and selection
    pub accent: Color32,
    /// Buttons on hover
    pub accent_hover: Color32,
    /// Text drawn on top of `accent`
    pub on_accent: Color32,
    /// Frame borders
    pub border: Color32,
    /// Server running
    pub success: Color32,
    /// Server starting
    pub warning: Color32,
    /// Server stopped or failed
    pub error: Color32,
    /// Whether egui's dark visuals should be the base
    pub dark: bool,
}

pub const LIGHT: Palette = Palette {
    panel_bg: Color32::from_rgb(0xF4, 0xF4, 0xF4),
    field_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    text: Color32::from_rgb(0x21, 0x21, 0x21),
    muted_text: Color32::from_rgb(0x75, 0x75, 0x75),
    accent: Color32::from_rgb(0x1E, 0x88, 0xE5),
    accent_hover: Color32::from_rgb(0x42, 0x9B, 0xEC),
    on_accent: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    border: Color32::from_rgb(0xBD, 0xBD, 0xBD),
    success: Color32::from_rgb(0x2E, 0x7D, 0x32),
    warning: Color32::from_rgb(0xEF, 0x6C, 0x00),
    error: Color32::from_rgb(0xC6, 0x28, 0x28),
    dark: false,
};

pub const DARK: Palette = Palette {
    panel_bg: Color32::from_rgb(0x1E, 0x1E, 0x1E),
    field_bg: Color32::from_rgb(0x12, 0x12, 0x12),
    text: Color32::from_rgb(0xE0, 0xE0, 0xE0),
    muted_text: Color32::from_rgb(0x9E, 0x9E, 0x9E),
    accent: Color32::from_rgb(0x3A, 0x6E, 0xA5),
    accent_hover: Color32::from_rgb(0x4A, 0x82, 0xBD),
    on_accent: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    border: Color32::from_rgb(0x3C, 0x3C, 0x3C),
    success: Color32::from_rgb(0x4C, 0xAF, 0x50),
    warning: Color32::from_rgb(0xFF, 0xA7, 0x26),
    error: Color32::from_rgb(0xE5, 0x73, 0x73),
    dark: true,
};

pub const BROWN: Palette = Palette {
    panel_bg: Color32::from_rgb(0x3A, 0x27, 0x21),
    field_bg: Color32::from_rgb(0x2F, 0x1E, 0x1A),
    text: Color32::from_rgb(0xF0, 0xE0, 0xD6),
    muted_text: Color32::from_rgb(0xC6, 0xB2, 0x9E),
    accent: Color32::from_rgb(0x5C, 0x3A, 0x2C),
    accent_hover: Color32::from_rgb(0x6D, 0x4B, 0x3D),
    on_accent: Color32::from_rgb(0xF0, 0xE0, 0xD6),
    border: Color32::from_rgb(0xC7, 0xB2, 0x9A),
    success: Color32::from_rgb(0x4C, 0xAF, 0x50),
    warning: Color32::from_rgb(0xFF, 0xA7, 0x26),
    error: Color32::from_rgb(0xE5, 0x73, 0x73),
    dark: true,
};

/// QR modules are always black on white so phone cameras can read them
pub const QR_DARK: Color32 = Color32::BLACK;
pub const QR_LIGHT: Color32 = Color32::WHITE;
