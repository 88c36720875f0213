//! Stock items: solid swatches and single-line labels.

use serde::{Deserialize, Serialize};
use wrapflow_core::{Canvas, Color, Constraints, Item, Point, Rect, Size};

/// A solid block of color with a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    /// Fill color
    pub color: Color,
    /// Intrinsic size
    pub size: Size,
}

impl Swatch {
    /// Create a swatch of `width` by `height`.
    #[must_use]
    pub const fn new(color: Color, width: f32, height: f32) -> Self {
        Self {
            color,
            size: Size::new(width, height),
        }
    }
}

impl Item for Swatch {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size)
    }

    fn paint(&self, frame: Rect, canvas: &mut dyn Canvas) {
        if self.color.is_visible() {
            canvas.fill_rect(frame, self.color);
        }
    }
}

/// A single line of text measured with fixed-advance metrics.
///
/// Every character advances half the font size; the line box is 1.25 times
/// the font size tall with the baseline at one font size from the top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    text: String,
    font_size: f32,
    color: Color,
}

impl Label {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;

    /// Create a label in the default font size.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            color: Color::BLACK,
        }
    }

    /// Set the font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The label's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Item for Label {
    fn measure(&self, constraints: Constraints) -> Size {
        let advance = self.font_size * 0.5;
        let width = self.text.chars().count() as f32 * advance;
        constraints.constrain(Size::new(width, self.font_size * 1.25))
    }

    fn baseline(&self, size: Size) -> f32 {
        self.font_size.min(size.height)
    }

    fn paint(&self, frame: Rect, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            &self.text,
            Point::new(frame.x, frame.y),
            self.font_size,
            self.color,
        );
    }
}
