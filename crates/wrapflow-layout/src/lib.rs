#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Wrap-flow layout for wrapflow.
//!
//! Items flow along a primary axis and wrap into lanes whenever the next item
//! would overrun the available length. Lanes stack along the secondary axis.
//!
//! # Passes
//!
//! - **Measure**: every item reports its intrinsic size ([`WrapLayout::measure`])
//! - **Partition**: a single greedy pass splits items into lanes ([`partition`])
//! - **Render**: lanes and items get frames ([`WrapLayout::arrange`])
//! - **Feedback**: the aggregate size goes back to the parent, which may
//!   hand out a new length ([`negotiate`], [`LayoutEngine`])

mod cache;
mod engine;
mod feedback;
mod params;
mod partition;
mod wrap;

pub use cache::{ContainerId, ReportCache, ReportOutcome};
pub use engine::LayoutEngine;
pub use feedback::{
    negotiate, FixedHost, Host, Negotiation, RecordingReporter, SizeReporter, DEFAULT_MAX_PASSES,
};
pub use params::{LayoutParams, SpacingMode};
pub use partition::{lanes, partition, partition_sizes, partition_with, Lane, Partition};
pub use wrap::{LaneNode, LayoutPass, Measurement, Placement, RenderTree, WrapLayout};
