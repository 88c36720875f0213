//! Wrapping stacks: rows (`WHStack`), columns (`WVStack`), and `WrapStack`.
//!
//! The stacks only hold defaults and forward them to a [`WrapLayout`]; all
//! wrapping happens in `wrapflow-layout`.

use crate::item_list::ItemList;
use serde::{Deserialize, Serialize};
use wrapflow_core::{
    check_length, Alignment, Axis, Canvas, HorizontalAlignment, LayoutError, Size,
    VerticalAlignment,
};
use wrapflow_layout::{
    negotiate, Host, LayoutParams, LayoutPass, Negotiation, RenderTree, SpacingMode, WrapLayout,
};

/// Rows that fill the available width and wrap downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WHStack {
    /// Vertical alignment of items within a row.
    pub alignment: VerticalAlignment,
    /// Horizontal alignment of each row's content.
    pub row_alignment: HorizontalAlignment,
    /// Gap between items in a row.
    pub spacing: f32,
    /// Gap between rows; `None` uses `spacing`.
    pub row_spacing: Option<f32>,
    /// Wrap threshold accounting.
    pub spacing_mode: SpacingMode,
}

impl Default for WHStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WHStack {
    /// Create a row stack: items centered vertically, rows packed left.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alignment: VerticalAlignment::Center,
            row_alignment: HorizontalAlignment::Leading,
            spacing: 0.0,
            row_spacing: None,
            spacing_mode: SpacingMode::Exact,
        }
    }

    /// Set the item alignment within a row.
    #[must_use]
    pub fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the alignment of each row.
    #[must_use]
    pub fn row_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.row_alignment = alignment;
        self
    }

    /// Set the gap between items.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the gap between rows.
    #[must_use]
    pub fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = Some(spacing);
        self
    }

    /// Set the spacing mode.
    #[must_use]
    pub fn spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Layout parameters for this stack.
    #[must_use]
    pub fn params(&self) -> LayoutParams {
        LayoutParams::new(Axis::Horizontal)
            .spacing(self.spacing)
            .lane_spacing(self.row_spacing)
            .cross_alignment(self.alignment.as_cross())
            .lane_alignment(self.row_alignment.as_lane())
            .spacing_mode(self.spacing_mode)
    }

    /// Validate the parameters and attach `items`.
    pub fn build(self, items: ItemList) -> Result<WrapView, LayoutError> {
        WrapView::new(self.params(), items)
    }
}

/// Columns that fill the available height and wrap rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WVStack {
    /// Horizontal alignment of items within a column.
    pub alignment: HorizontalAlignment,
    /// Vertical alignment of each column's content.
    pub column_alignment: VerticalAlignment,
    /// Gap between items in a column.
    pub spacing: f32,
    /// Gap between columns; `None` uses `spacing`.
    pub column_spacing: Option<f32>,
    /// Wrap threshold accounting.
    pub spacing_mode: SpacingMode,
}

impl Default for WVStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WVStack {
    /// Create a column stack: items centered horizontally, columns packed top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alignment: HorizontalAlignment::Center,
            column_alignment: VerticalAlignment::Top,
            spacing: 0.0,
            column_spacing: None,
            spacing_mode: SpacingMode::Exact,
        }
    }

    /// Set the item alignment within a column.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the alignment of each column.
    #[must_use]
    pub fn column_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.column_alignment = alignment;
        self
    }

    /// Set the gap between items.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the gap between columns.
    #[must_use]
    pub fn column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = Some(spacing);
        self
    }

    /// Set the spacing mode.
    #[must_use]
    pub fn spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Layout parameters for this stack.
    #[must_use]
    pub fn params(&self) -> LayoutParams {
        LayoutParams::new(Axis::Vertical)
            .spacing(self.spacing)
            .lane_spacing(self.column_spacing)
            .cross_alignment(self.alignment.as_cross())
            .lane_alignment(self.column_alignment.as_lane())
            .spacing_mode(self.spacing_mode)
    }

    /// Validate the parameters and attach `items`.
    pub fn build(self, items: ItemList) -> Result<WrapView, LayoutError> {
        WrapView::new(self.params(), items)
    }
}

/// A wrapping stack along either axis with a single two-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WrapStack {
    /// Flow axis.
    pub axis: Axis,
    /// Alignment, split into item and lane alignment by axis.
    pub alignment: Alignment,
    /// Gap between items.
    pub spacing: f32,
    /// Gap between lanes; `None` uses `spacing`.
    pub lane_spacing: Option<f32>,
    /// How spacing counts toward the wrap threshold.
    pub spacing_mode: SpacingMode,
}

impl WrapStack {
    /// Create a stack flowing along `axis`, centered on both axes.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            alignment: Alignment::CENTER,
            spacing: 0.0,
            lane_spacing: None,
            spacing_mode: SpacingMode::Exact,
        }
    }

    /// Set the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the gap between items.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the gap between lanes.
    #[must_use]
    pub fn lane_spacing(mut self, spacing: f32) -> Self {
        self.lane_spacing = Some(spacing);
        self
    }

    /// Set the spacing mode.
    #[must_use]
    pub fn spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Layout parameters for this stack.
    #[must_use]
    pub fn params(&self) -> LayoutParams {
        let (cross, lane) = self.alignment.split(self.axis);
        LayoutParams::new(self.axis)
            .spacing(self.spacing)
            .lane_spacing(self.lane_spacing)
            .cross_alignment(cross)
            .lane_alignment(lane)
            .spacing_mode(self.spacing_mode)
    }

    /// Validate the parameters and attach `items`.
    pub fn build(self, items: ItemList) -> Result<WrapView, LayoutError> {
        WrapView::new(self.params(), items)
    }
}

/// A built stack: validated layout plus its items.
#[derive(Debug)]
pub struct WrapView {
    layout: WrapLayout,
    items: ItemList,
}

impl WrapView {
    /// Validate `params` and attach `items`.
    pub fn new(params: LayoutParams, items: ItemList) -> Result<Self, LayoutError> {
        Ok(Self {
            layout: WrapLayout::new(params)?,
            items,
        })
    }

    /// The items, in layout order.
    #[must_use]
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// The layout parameters.
    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        self.layout.params()
    }

    /// Size reported by the last layout pass.
    #[must_use]
    pub fn reported_size(&self) -> Option<Size> {
        self.layout.last_reported()
    }

    /// Run one layout cycle with the parent's primary length.
    ///
    /// `None` means the parent has not measured yet.
    pub fn layout(&mut self, available: Option<f32>) -> Result<LayoutPass, LayoutError> {
        let available = available
            .map(|length| check_length("available", length))
            .transpose()?;
        Ok(self.layout.layout(self.items.as_slice(), available))
    }

    /// Lay out without touching the reported size.
    #[must_use]
    pub fn render(&self, available: f32) -> RenderTree {
        self.layout.render(self.items.as_slice(), available)
    }

    /// Negotiate with `host` until the reported size settles.
    pub fn negotiate<H: Host + ?Sized>(&mut self, host: &mut H, max_passes: usize) -> Negotiation {
        negotiate(&mut self.layout, self.items.as_slice(), host, max_passes)
    }

    /// Paint the items into the frames of `tree`.
    pub fn paint(&self, tree: &RenderTree, canvas: &mut dyn Canvas) {
        tree.paint(self.items.as_slice(), canvas);
    }
}
