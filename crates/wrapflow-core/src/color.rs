//! Swatch colors.

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.231, 0.188);
    pub const GRAY: Self = Self::rgb(0.557, 0.557, 0.576);
    pub const GREEN: Self = Self::rgb(0.204, 0.780, 0.349);
    pub const YELLOW: Self = Self::rgb(1.0, 0.8, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.584, 0.0);
    pub const PURPLE: Self = Self::rgb(0.686, 0.322, 0.871);
    pub const BLUE: Self = Self::rgb(0.0, 0.478, 1.0);
    pub const PINK: Self = Self::rgb(1.0, 0.176, 0.333);
    pub const TRANSPARENT: Self = Self::BLACK.with_alpha(0.0);

    /// Opaque color. Channels are taken as given.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Fully transparent colors paint nothing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
