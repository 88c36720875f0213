//! The `Item` capability and the paint seam.
//!
//! # Item Lifecycle
//!
//! An item takes part in a layout cycle in two phases:
//!
//! 1. **Measure**: report an intrinsic size for the given constraints
//! 2. **Paint**: draw itself into the frame the layout assigned
//!
//! Items are read-only during a cycle; the layout only decides placement.

use crate::color::Color;
use crate::constraints::Constraints;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A renderable unit with an intrinsic size.
pub trait Item: fmt::Debug + Send + Sync {
    /// Compute the item's size under the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Distance from the item's top edge to its baseline, for a measured `size`.
    ///
    /// Items without text have no baseline and sit on their bottom edge.
    fn baseline(&self, size: Size) -> f32 {
        size.height
    }

    /// Draw the item into `frame`.
    fn paint(&self, frame: Rect, canvas: &mut dyn Canvas);
}

impl<T: Item + ?Sized> Item for &T {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }

    fn baseline(&self, size: Size) -> f32 {
        (**self).baseline(size)
    }

    fn paint(&self, frame: Rect, canvas: &mut dyn Canvas) {
        (**self).paint(frame, canvas);
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }

    fn baseline(&self, size: Size) -> f32 {
        (**self).baseline(size)
    }

    fn paint(&self, frame: Rect, canvas: &mut dyn Canvas) {
        (**self).paint(frame, canvas);
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the host's rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a single line of text with its top-left at `position`.
    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Text run
    Text {
        /// Content
        text: String,
        /// Top-left position
        position: Point,
        /// Font size
        size: f32,
        /// Text color
        color: Color,
    },
    /// Clip push
    PushClip(Rect),
    /// Clip pop
    PopClip,
}

/// Canvas that records what a render pass painted.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Bounds of every filled rectangle, in paint order.
    #[must_use]
    pub fn rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}
