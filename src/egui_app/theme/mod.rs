//! Theme Module
//!
//! This module provides the selectable color themes of the control panel:
//!
//! - **`colors`** - one `Palette` per theme
//! - **`styles`** - applying a palette to the egui context, frame builders
//!
//! # Usage
//!
//! ```rust,no_run
//! use localfetch::egui_app::theme::{styles, ThemeName};
//!
//! # fn example(ctx: &eframe::egui::Context) {
//! let theme: ThemeName = "dark".parse().unwrap_or_default();
//! styles::apply_theme(ctx, theme);
//! # }
//! ```

pub mod colors;
pub mod styles;

use std::fmt;
use std::str::FromStr;

pub use colors::Palette;

/// Selectable theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Brown,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Light, ThemeName::Dark, ThemeName::Brown];

    /// Name stored in the preference file
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::Brown => "brown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::Brown => "Brown",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            ThemeName::Light => &colors::LIGHT,
            ThemeName::Dark => &colors::DARK,
            ThemeName::Brown => &colors::BROWN,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(wanted.to_string()))
    }
}
