//! QR Code Generation
//!
//! Encodes the server's `ip:port` into a module grid that the server view
//! paints directly with egui shapes.

use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

/// Quiet zone around the code, in modules
pub const QR_BORDER: usize = 2;
/// Side of one module on screen, in points
pub const QR_BOX_SIZE: f32 = 4.0;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR generation failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Square grid of dark/light modules, without the quiet zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    data: String,
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode `data` at the lowest error-correction level
    pub fn encode(data: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Ok(Self {
            data: data.to_string(),
            width,
            modules,
        })
    }

    /// The encoded string
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Modules per side including the quiet zone on both edges
    pub fn width_with_border(&self) -> usize {
        self.width + 2 * QR_BORDER
    }

    /// On-screen side length in points
    pub fn side_points(&self) -> f32 {
        self.width_with_border() as f32 * QR_BOX_SIZE
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Coordinates of all dark modules, row by row
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }
}
