//! The wrap container: measure, partition, place.

use crate::params::LayoutParams;
use crate::partition::{lanes, partition_sizes, sanitize, Lane};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wrapflow_core::{Axis, Canvas, Constraints, CrossAlignment, Item, LayoutError, Rect, Size};

/// Intrinsic size of one item plus its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    /// Intrinsic size.
    pub size: Size,
    /// Distance from the top edge to the baseline.
    pub baseline: f32,
}

impl Measurement {
    /// Create a measurement with the baseline on the bottom edge.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            baseline: size.height,
        }
    }

    /// Set the baseline.
    #[must_use]
    pub const fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Clamp negative and NaN lengths to zero, and the baseline into the item.
    fn sanitized(self) -> Self {
        let size = Size::new(sanitize(self.size.width), sanitize(self.size.height));
        Self {
            size,
            baseline: sanitize(self.baseline).min(size.height),
        }
    }
}

/// Final frame of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the item in the input order.
    pub index: usize,
    /// Frame in container coordinates.
    pub frame: Rect,
}

/// One rendered lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneNode {
    /// Items in the lane.
    pub lane: Lane,
    /// The lane's span: full primary length by lane thickness.
    pub frame: Rect,
    /// Item frames, in input order.
    pub placements: Vec<Placement>,
}

/// Output of a render pass: lanes stacked along the secondary axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderTree {
    /// Primary flow axis.
    pub axis: Axis,
    /// Bounds of the whole stack.
    pub frame: Rect,
    /// Rendered lanes, in stacking order.
    pub lanes: Vec<LaneNode>,
    /// Aggregate bounding box reported to the parent.
    pub size: Size,
}

impl RenderTree {
    /// Start index of every lane.
    #[must_use]
    pub fn boundaries(&self) -> Vec<usize> {
        self.lanes.iter().map(|node| node.lane.lower).collect()
    }

    /// Number of lanes.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// True when nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Frame assigned to item `index`.
    #[must_use]
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.placements()
            .find(|placement| placement.index == index)
            .map(|placement| placement.frame)
    }

    /// Every placement, lane by lane.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.lanes.iter().flat_map(|node| node.placements.iter())
    }

    /// Paint `items` into their frames, lane by lane, in input order.
    ///
    /// Placements whose index is out of range for `items` are skipped.
    pub fn paint<I: Item>(&self, items: &[I], canvas: &mut dyn Canvas) {
        canvas.push_clip(self.frame);
        for placement in self.placements() {
            if let Some(item) = items.get(placement.index) {
                item.paint(placement.frame, canvas);
            }
        }
        canvas.pop_clip();
    }
}

/// Result of one measure, render, and feedback cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPass {
    /// The rendered stack.
    pub tree: RenderTree,
    /// Reported size.
    pub size: Size,
    /// True when the reported size differs from the previous pass.
    pub changed: bool,
    /// Primary-axis length the pass was run with.
    pub available: f32,
}

#[derive(Debug, Clone, Copy)]
struct LaneMetrics {
    extent: f32,
    thickness: f32,
    ascent: f32,
}

/// Orientation-agnostic wrap container.
///
/// Holds the layout parameters and the last size it reported. Everything else
/// is recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapLayout {
    params: LayoutParams,
    last_reported: Option<Size>,
}

impl WrapLayout {
    /// Create a container after validating `params`.
    pub fn new(params: LayoutParams) -> Result<Self, LayoutError> {
        params.validate()?;
        Ok(Self {
            params,
            last_reported: None,
        })
    }

    /// The layout parameters.
    #[must_use]
    pub const fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The size reported by the last [`WrapLayout::layout`] call.
    #[must_use]
    pub const fn last_reported(&self) -> Option<Size> {
        self.last_reported
    }

    /// Forget the last reported size so the next pass reports again.
    pub fn reset(&mut self) {
        self.last_reported = None;
    }

    /// Measure pass: intrinsic size of every item, unconstrained.
    #[must_use]
    pub fn measure<I: Item>(&self, items: &[I]) -> Vec<Measurement> {
        items
            .iter()
            .map(|item| {
                let size = item.measure(Constraints::unbounded());
                Measurement::new(size)
                    .with_baseline(item.baseline(size))
                    .sanitized()
            })
            .collect()
    }

    /// Measure and arrange `items` in one call.
    #[must_use]
    pub fn render<I: Item>(&self, items: &[I], available: f32) -> RenderTree {
        self.arrange(&self.measure(items), available)
    }

    /// Partition and render pass over already measured items.
    #[must_use]
    pub fn arrange(&self, measurements: &[Measurement], available: f32) -> RenderTree {
        let params = &self.params;
        let axis = params.axis;
        let available = sanitize(available);
        let spacing = sanitize(params.spacing);
        let lane_spacing = sanitize(params.effective_lane_spacing());
        let cross_alignment = match (axis, params.cross_alignment) {
            (Axis::Vertical, CrossAlignment::Baseline) => CrossAlignment::Leading,
            (_, alignment) => alignment,
        };

        let measurements: Vec<Measurement> = measurements.iter().map(|m| m.sanitized()).collect();
        let sizes: Vec<Size> = measurements.iter().map(|m| m.size).collect();
        let boundaries = partition_sizes(&sizes, axis, available, spacing, params.spacing_mode);
        let lanes = lanes(&boundaries, measurements.len());
        if lanes.is_empty() {
            return RenderTree {
                axis,
                ..RenderTree::default()
            };
        }

        let metrics: Vec<LaneMetrics> = lanes
            .iter()
            .map(|lane| self.lane_metrics(&measurements[lane.range()], cross_alignment))
            .collect();
        let widest = metrics.iter().fold(0.0_f32, |acc, m| acc.max(m.extent));
        let span = if available.is_finite() && available >= widest {
            available
        } else {
            widest
        };

        let mut nodes = Vec::with_capacity(lanes.len());
        let mut cross_cursor = 0.0;
        for (lane, metric) in lanes.iter().zip(&metrics) {
            let mut main_cursor = params.lane_alignment.offset(span, metric.extent);
            let mut placements = Vec::with_capacity(lane.len());
            for index in lane.range() {
                let measurement = measurements[index];
                let cross_offset = cross_alignment.offset(
                    metric.thickness,
                    axis.across(measurement.size),
                    metric.ascent,
                    measurement.baseline,
                );
                let origin = axis.point(main_cursor, cross_cursor + cross_offset);
                placements.push(Placement {
                    index,
                    frame: Rect::from_origin_size(origin, measurement.size),
                });
                main_cursor += axis.main(measurement.size) + spacing;
            }

            nodes.push(LaneNode {
                lane: *lane,
                frame: Rect::from_origin_size(
                    axis.point(0.0, cross_cursor),
                    axis.size(span, metric.thickness),
                ),
                placements,
            });
            cross_cursor += metric.thickness + lane_spacing;
        }

        let thickness: f32 = metrics.iter().map(|m| m.thickness).sum();
        let gaps = lane_spacing * (lanes.len() - 1) as f32;
        let size = axis.size(span, thickness + gaps);

        RenderTree {
            axis,
            frame: Rect::from_size(size),
            lanes: nodes,
            size,
        }
    }

    /// Run one measure, render, and feedback cycle.
    ///
    /// `None` means the parent has not measured the primary axis yet; it is
    /// treated as a zero length.
    pub fn layout<I: Item>(&mut self, items: &[I], available: Option<f32>) -> LayoutPass {
        let available = available.map_or(0.0, sanitize);
        let tree = self.render(items, available);
        let size = tree.size;
        let changed = self.last_reported != Some(size);
        self.last_reported = Some(size);

        debug!(
            items = items.len(),
            available,
            lanes = tree.lane_count(),
            width = size.width,
            height = size.height,
            changed,
            "layout pass"
        );

        LayoutPass {
            tree,
            size,
            changed,
            available,
        }
    }

    fn lane_metrics(&self, items: &[Measurement], alignment: CrossAlignment) -> LaneMetrics {
        let axis = self.params.axis;
        let gaps = sanitize(self.params.spacing) * items.len().saturating_sub(1) as f32;
        let extent = items.iter().map(|m| axis.main(m.size)).sum::<f32>() + gaps;

        if alignment == CrossAlignment::Baseline {
            let ascent = items.iter().fold(0.0_f32, |acc, m| acc.max(m.baseline));
            let descent = items
                .iter()
                .fold(0.0_f32, |acc, m| acc.max(m.size.height - m.baseline));
            LaneMetrics {
                extent,
                thickness: ascent + descent,
                ascent,
            }
        } else {
            let thickness = items
                .iter()
                .fold(0.0_f32, |acc, m| acc.max(axis.across(m.size)));
            LaneMetrics {
                extent,
                thickness,
                ascent: 0.0,
            }
        }
    }
}
