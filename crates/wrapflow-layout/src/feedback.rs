//! Size feedback between a wrap container and its parent.
//!
//! # Negotiation
//!
//! A wrap container cannot know its secondary extent until the parent has
//! fixed its primary length, and the parent may change that length once it
//! sees the reported size (a scroll bar appearing is the usual case). The
//! exchange is run as a fixed-point iteration:
//!
//! 1. read the available length from the [`Host`]
//! 2. measure, partition, and render
//! 3. hand the reported size back to the host if it changed
//!
//! It stops once a pass reports nothing new and the host's length is the one
//! the pass used, or after a bounded number of passes.

use crate::cache::ContainerId;
use crate::partition::sanitize;
use crate::wrap::{LayoutPass, WrapLayout};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wrapflow_core::{Axis, Item, Size};

/// Default cap on negotiation passes.
pub const DEFAULT_MAX_PASSES: usize = 8;

/// The parent side of the size negotiation.
pub trait Host {
    /// Length the container may use along `axis`, or `None` before the
    /// parent's geometry exists.
    fn available_length(&self, axis: Axis) -> Option<f32>;

    /// Reallocate space for a newly reported size.
    fn allocate(&mut self, reported: Size);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn available_length(&self, axis: Axis) -> Option<f32> {
        (**self).available_length(axis)
    }

    fn allocate(&mut self, reported: Size) {
        (**self).allocate(reported);
    }
}

/// Receives sizes reported by containers.
pub trait SizeReporter {
    /// Container `id` now needs `size`.
    fn report(&mut self, id: ContainerId, size: Size);
}

impl<F: FnMut(ContainerId, Size)> SizeReporter for F {
    fn report(&mut self, id: ContainerId, size: Size) {
        self(id, size);
    }
}

/// A reporter that keeps every report, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingReporter {
    reports: Vec<(ContainerId, Size)>,
}

impl RecordingReporter {
    /// Create an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far.
    #[must_use]
    pub fn reports(&self) -> &[(ContainerId, Size)] {
        &self.reports
    }

    /// Most recent report for `id`.
    #[must_use]
    pub fn last_for(&self, id: ContainerId) -> Option<Size> {
        self.reports
            .iter()
            .rev()
            .find(|(reported, _)| *reported == id)
            .map(|(_, size)| *size)
    }
}

impl SizeReporter for RecordingReporter {
    fn report(&mut self, id: ContainerId, size: Size) {
        self.reports.push((id, size));
    }
}

/// A host with a fixed primary length that records what it was asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedHost {
    length: Option<f32>,
    allocated: Option<Size>,
    allocations: usize,
}

impl FixedHost {
    /// Host offering `length` on the primary axis.
    #[must_use]
    pub const fn new(length: f32) -> Self {
        Self {
            length: Some(length),
            allocated: None,
            allocations: 0,
        }
    }

    /// Host whose geometry does not exist yet.
    #[must_use]
    pub const fn unmeasured() -> Self {
        Self {
            length: None,
            allocated: None,
            allocations: 0,
        }
    }

    /// Last size allocated.
    #[must_use]
    pub const fn allocated(&self) -> Option<Size> {
        self.allocated
    }

    /// Number of allocations performed.
    #[must_use]
    pub const fn allocations(&self) -> usize {
        self.allocations
    }
}

impl Host for FixedHost {
    fn available_length(&self, _axis: Axis) -> Option<f32> {
        self.length
    }

    fn allocate(&mut self, reported: Size) {
        self.allocated = Some(reported);
        self.allocations += 1;
    }
}

/// Outcome of [`negotiate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Negotiation {
    /// The last pass run.
    pub pass: LayoutPass,
    /// Number of passes run.
    pub passes: usize,
    /// False when the pass cap was hit before the sizes settled.
    pub converged: bool,
}

/// Run layout passes against `host` until the sizes settle.
///
/// At least one pass always runs, whatever `max_passes` says.
pub fn negotiate<I, H>(
    layout: &mut WrapLayout,
    items: &[I],
    host: &mut H,
    max_passes: usize,
) -> Negotiation
where
    I: Item,
    H: Host + ?Sized,
{
    let axis = layout.params().axis;
    let max_passes = max_passes.max(1);
    let mut passes = 0;

    loop {
        let available = host.available_length(axis);
        let pass = layout.layout(items, available);
        passes += 1;

        if pass.changed {
            host.allocate(pass.size);
        }

        // Compare lengths as the layout used them, so NaN settles like zero.
        let offered = host.available_length(axis).map_or(0.0, sanitize);
        let settled = !pass.changed && offered == pass.available;
        if settled {
            debug!(passes, "size negotiation converged");
            return Negotiation {
                pass,
                passes,
                converged: true,
            };
        }
        if passes >= max_passes {
            warn!(
                passes,
                width = pass.size.width,
                height = pass.size.height,
                "size negotiation did not converge"
            );
            return Negotiation {
                pass,
                passes,
                converged: false,
            };
        }
    }
}
