//! Core types for the wrapflow layout engine.
//!
//! This crate provides the foundational types shared by the layout and façade
//! crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Measurement constraints: [`Constraints`]
//! - Flow axes and alignments: [`Axis`], [`CrossAlignment`], [`LaneAlignment`]
//! - The [`Item`] capability and the [`Canvas`] paint seam

mod axis;
mod color;
mod constraints;
mod error;
mod geometry;
pub mod item;

pub use axis::{
    Alignment, Axis, CrossAlignment, HorizontalAlignment, LaneAlignment, VerticalAlignment,
};
pub use color::Color;
pub use constraints::Constraints;
pub use error::{check_length, LayoutError};
pub use geometry::{Point, Rect, Size};
pub use item::{Canvas, DrawCommand, Item, RecordingCanvas};
