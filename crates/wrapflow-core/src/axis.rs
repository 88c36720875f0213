//! Flow axes and alignment enums.
//!
//! Layout code is written once against a *primary* axis (the direction items
//! flow and wrap along) and a *secondary* axis (the direction lanes stack).
//! [`Axis`] projects physical sizes and points onto that frame and back.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Primary flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Items flow left to right and wrap into rows stacked top to bottom.
    #[default]
    Horizontal,
    /// Items flow top to bottom and wrap into columns stacked left to right.
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub const fn main(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[must_use]
    pub const fn across(self, size: Size) -> f32 {
        self.cross().main(size)
    }

    /// Build a physical size from main and cross extents.
    #[must_use]
    pub const fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build a physical point from main and cross offsets.
    #[must_use]
    pub const fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Returns true for [`Axis::Horizontal`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// How an item sits within its lane's thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlignment {
    /// Top of a row, left of a column.
    Leading,
    /// Centered in the lane.
    #[default]
    Center,
    /// Bottom of a row, right of a column.
    Trailing,
    /// Align item baselines (rows only; columns fall back to `Leading`).
    Baseline,
}

impl CrossAlignment {
    /// Offset of an item of `extent` inside a lane of `thickness`.
    ///
    /// `ascent` is the lane's largest baseline and `baseline` the item's own;
    /// both are only read for [`CrossAlignment::Baseline`].
    #[must_use]
    pub fn offset(self, thickness: f32, extent: f32, ascent: f32, baseline: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => ((thickness - extent) / 2.0).max(0.0),
            Self::Trailing => (thickness - extent).max(0.0),
            Self::Baseline => (ascent - baseline).max(0.0),
        }
    }
}

/// How a lane's content sits along the primary axis of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneAlignment {
    /// Packed against the start of the lane.
    #[default]
    Leading,
    /// Centered in the lane.
    Center,
    /// Packed against the end of the lane.
    Trailing,
}

impl LaneAlignment {
    /// Offset of `content` inside a lane of length `span`.
    #[must_use]
    pub fn offset(self, span: f32, content: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => ((span - content) / 2.0).max(0.0),
            Self::Trailing => (span - content).max(0.0),
        }
    }
}

/// Alignment along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Left edge.
    Leading,
    /// Horizontal center.
    #[default]
    Center,
    /// Right edge.
    Trailing,
}

/// Alignment along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// Top edge.
    Top,
    /// Vertical center.
    #[default]
    Center,
    /// Bottom edge.
    Bottom,
    /// Text baseline.
    Baseline,
}

/// Alignment across both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Alignment {
    /// Horizontal component.
    pub horizontal: HorizontalAlignment,
    /// Vertical component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Create an alignment from explicit components.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Top-leading corner.
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    /// Center on both axes.
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    /// Bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self =
        Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    /// Split into `(cross, lane)` alignments for a flow along `axis`.
    ///
    /// Rows align items vertically and lanes horizontally; columns the reverse.
    #[must_use]
    pub const fn split(self, axis: Axis) -> (CrossAlignment, LaneAlignment) {
        match axis {
            Axis::Horizontal => (self.vertical.as_cross(), self.horizontal.as_lane()),
            Axis::Vertical => (self.horizontal.as_cross(), self.vertical.as_lane()),
        }
    }
}

impl HorizontalAlignment {
    /// Use as the item alignment inside a column.
    #[must_use]
    pub const fn as_cross(self) -> CrossAlignment {
        match self {
            Self::Leading => CrossAlignment::Leading,
            Self::Center => CrossAlignment::Center,
            Self::Trailing => CrossAlignment::Trailing,
        }
    }

    /// Use as the lane alignment of a row.
    #[must_use]
    pub const fn as_lane(self) -> LaneAlignment {
        match self {
            Self::Leading => LaneAlignment::Leading,
            Self::Center => LaneAlignment::Center,
            Self::Trailing => LaneAlignment::Trailing,
        }
    }
}

impl VerticalAlignment {
    /// Use as the item alignment inside a row.
    #[must_use]
    pub const fn as_cross(self) -> CrossAlignment {
        match self {
            Self::Top => CrossAlignment::Leading,
            Self::Center => CrossAlignment::Center,
            Self::Bottom => CrossAlignment::Trailing,
            Self::Baseline => CrossAlignment::Baseline,
        }
    }

    /// Use as the lane alignment of a column.
    ///
    /// A column has no baseline, so `Baseline` packs to the top.
    #[must_use]
    pub const fn as_lane(self) -> LaneAlignment {
        match self {
            Self::Top | Self::Baseline => LaneAlignment::Leading,
            Self::Center => LaneAlignment::Center,
            Self::Bottom => LaneAlignment::Trailing,
        }
    }
}
