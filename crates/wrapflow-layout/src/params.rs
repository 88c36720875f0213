//! Layout parameters shared by every wrap container.

use serde::{Deserialize, Serialize};
use wrapflow_core::{check_length, Axis, CrossAlignment, LaneAlignment, LayoutError};

/// How inter-item spacing counts toward the wrap threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingMode {
    /// Count exactly the spacing that will be rendered: one gap between each
    /// pair of neighbours, none after the last item.
    #[default]
    Exact,
    /// Reproduce the legacy wrapping decisions: the gap in front of the
    /// candidate item is not counted, so a lane may overrun the available
    /// length by at most one spacing.
    Compat,
}

/// Parameters of a wrap layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Direction items flow and wrap along.
    pub axis: Axis,
    /// Gap between neighbouring items in a lane.
    pub spacing: f32,
    /// Gap between lanes; falls back to `spacing` when unset.
    pub lane_spacing: Option<f32>,
    /// Placement of items within a lane's thickness.
    pub cross_alignment: CrossAlignment,
    /// Placement of a lane's content along the primary axis.
    pub lane_alignment: LaneAlignment,
    /// Wrap threshold accounting.
    pub spacing_mode: SpacingMode,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: 0.0,
            lane_spacing: None,
            cross_alignment: CrossAlignment::Center,
            lane_alignment: LaneAlignment::Leading,
            spacing_mode: SpacingMode::Exact,
        }
    }
}

impl LayoutParams {
    /// Create default parameters flowing along `axis`.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Set the item spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the lane spacing.
    #[must_use]
    pub const fn lane_spacing(mut self, lane_spacing: Option<f32>) -> Self {
        self.lane_spacing = lane_spacing;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub const fn cross_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Set the lane alignment.
    #[must_use]
    pub const fn lane_alignment(mut self, alignment: LaneAlignment) -> Self {
        self.lane_alignment = alignment;
        self
    }

    /// Set the spacing mode.
    #[must_use]
    pub const fn spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Gap actually used between lanes.
    #[must_use]
    pub fn effective_lane_spacing(&self) -> f32 {
        self.lane_spacing.unwrap_or(self.spacing)
    }

    /// Check that every length is finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_length("spacing", self.spacing)?;
        if let Some(lane_spacing) = self.lane_spacing {
            check_length("lane_spacing", lane_spacing)?;
        }
        Ok(())
    }
}
