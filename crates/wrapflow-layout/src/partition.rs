//! Greedy lane partitioning.
//!
//! Items are visited once, in order. Each item either joins the current lane
//! or, when it would push the lane past the available length, opens a new one.
//! An item that is longer than the available length on its own still gets a
//! lane of its own; items are never split.

use crate::params::SpacingMode;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::trace;
use wrapflow_core::{Axis, Size};

/// A contiguous run of items laid out together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lane {
    /// Zero-based position of the lane along the secondary axis.
    pub rank: usize,
    /// Index of the first item in the lane.
    pub lower: usize,
    /// One past the index of the last item in the lane.
    pub upper: usize,
}

impl Lane {
    /// Item indices covered by this lane.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }

    /// Number of items in the lane.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.upper - self.lower
    }

    /// True when the lane holds no items. Never true for a partitioner lane.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.upper == self.lower
    }
}

pub(crate) fn sanitize(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Split `extents` into lanes no longer than `available`.
///
/// Returns the index of the first item of every lane. An empty input yields no
/// lanes. Spacing is counted exactly as it will be rendered.
#[must_use]
pub fn partition(extents: &[f32], available: f32, spacing: f32) -> Vec<usize> {
    partition_with(extents, available, spacing, SpacingMode::Exact)
}

/// [`partition`] with an explicit spacing mode.
#[must_use]
pub fn partition_with(
    extents: &[f32],
    available: f32,
    spacing: f32,
    mode: SpacingMode,
) -> Vec<usize> {
    let Some((&first, rest)) = extents.split_first() else {
        return Vec::new();
    };

    let available = sanitize(available);
    let spacing = sanitize(spacing);
    let mut boundaries = vec![0];
    let mut running = sanitize(first);

    for (offset, &raw) in rest.iter().enumerate() {
        let index = offset + 1;
        let extent = sanitize(raw);
        let needed = match mode {
            SpacingMode::Exact => running + spacing + extent,
            SpacingMode::Compat => running + extent,
        };

        if needed > available {
            trace!(index, running, extent, available, "lane break");
            boundaries.push(index);
            running = extent;
        } else {
            running += extent + spacing;
        }
    }

    boundaries
}

/// Partition measured sizes along `axis`.
#[must_use]
pub fn partition_sizes(
    sizes: &[Size],
    axis: Axis,
    available: f32,
    spacing: f32,
    mode: SpacingMode,
) -> Vec<usize> {
    let extents: Vec<f32> = sizes.iter().map(|size| axis.main(*size)).collect();
    partition_with(&extents, available, spacing, mode)
}

/// Expand lane start indices into ranked half-open ranges.
#[must_use]
pub fn lanes(boundaries: &[usize], item_count: usize) -> Vec<Lane> {
    boundaries
        .iter()
        .enumerate()
        .map(|(rank, &lower)| Lane {
            rank,
            lower,
            upper: boundaries.get(rank + 1).copied().unwrap_or(item_count),
        })
        .collect()
}

/// Lane boundaries together with the number of items they partition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Partition {
    boundaries: Vec<usize>,
    item_count: usize,
}

impl Partition {
    /// Partition `extents` with the given parameters.
    #[must_use]
    pub fn compute(extents: &[f32], available: f32, spacing: f32, mode: SpacingMode) -> Self {
        Self {
            boundaries: partition_with(extents, available, spacing, mode),
            item_count: extents.len(),
        }
    }

    /// Wrap boundaries produced elsewhere.
    #[must_use]
    pub const fn from_boundaries(boundaries: Vec<usize>, item_count: usize) -> Self {
        Self {
            boundaries,
            item_count,
        }
    }

    /// Lane start indices.
    #[must_use]
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Number of items partitioned.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of lanes.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.boundaries.len()
    }

    /// The lanes as ranges.
    #[must_use]
    pub fn lanes(&self) -> Vec<Lane> {
        lanes(&self.boundaries, self.item_count)
    }

    /// Rank of the lane holding item `index`.
    #[must_use]
    pub fn lane_of(&self, index: usize) -> Option<usize> {
        if index >= self.item_count {
            return None;
        }
        match self.boundaries.binary_search(&index) {
            Ok(rank) => Some(rank),
            Err(insert) => insert.checked_sub(1),
        }
    }

    /// Check that the lanes cover every item exactly once, in order.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.item_count == 0 {
            return self.boundaries.is_empty();
        }
        self.boundaries.first() == Some(&0)
            && self.boundaries.windows(2).all(|pair| pair[0] < pair[1])
            && self
                .boundaries
                .last()
                .is_some_and(|&last| last < self.item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lane_extent(extents: &[f32], lane: &Lane, spacing: f32) -> f32 {
        let sum: f32 = extents[lane.range()].iter().sum();
        sum + spacing * lane.len().saturating_sub(1) as f32
    }

    // =========================================================================
    // Scenario Tests
    // =========================================================================

    #[test]
    fn test_wraps_after_third_item() {
        let extents = [100.0, 80.0, 150.0, 150.0, 50.0];
        let boundaries = partition(&extents, 350.0, 0.0);
        assert_eq!(boundaries, vec![0, 3]);

        let lanes = lanes(&boundaries, extents.len());
        assert_eq!(lanes[0].range(), 0..3);
        assert_eq!(lanes[1].range(), 3..5);
        assert_eq!(lanes[1].rank, 1);
    }

    #[test]
    fn test_oversized_single_item() {
        let boundaries = partition(&[500.0], 350.0, 0.0);
        assert_eq!(boundaries, vec![0]);
        assert_eq!(lanes(&boundaries, 1)[0].range(), 0..1);
    }

    #[test]
    fn test_empty_input_has_no_lanes() {
        assert!(partition(&[], 350.0, 10.0).is_empty());
        assert!(lanes(&[], 0).is_empty());

        let partition = Partition::compute(&[], 350.0, 0.0, SpacingMode::Exact);
        assert_eq!(partition.lane_count(), 0);
        assert!(partition.is_complete());
    }

    #[test]
    fn test_unmeasured_length_gives_one_item_per_lane() {
        let boundaries = partition(&[10.0, 20.0, 30.0], 0.0, 0.0);
        assert_eq!(boundaries, vec![0, 1, 2]);
    }

    #[test]
    fn test_exact_fit_stays_in_lane() {
        assert_eq!(partition(&[100.0, 250.0], 350.0, 0.0), vec![0]);
        assert_eq!(partition(&[100.0, 240.0], 350.0, 10.0), vec![0]);
        assert_eq!(partition(&[100.0, 241.0], 350.0, 10.0), vec![0, 1]);
    }

    #[test]
    fn test_oversized_item_in_middle_is_isolated() {
        let boundaries = partition(&[50.0, 400.0, 50.0], 350.0, 0.0);
        assert_eq!(boundaries, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_extent_items_stay_in_lane() {
        assert_eq!(partition(&[0.0, 0.0, 0.0], 0.0, 0.0), vec![0]);
        assert_eq!(partition(&[100.0, 0.0], 100.0, 0.0), vec![0]);
    }

    #[test]
    fn test_invalid_inputs_are_clamped() {
        assert_eq!(partition(&[f32::NAN, -5.0, 10.0], 10.0, -1.0), vec![0]);
        assert_eq!(partition(&[10.0, 10.0], f32::NAN, 0.0), vec![0, 1]);
    }

    #[test]
    fn test_partition_sizes_uses_axis() {
        let sizes = [Size::new(100.0, 10.0), Size::new(100.0, 10.0)];
        let rows = partition_sizes(&sizes, Axis::Horizontal, 150.0, 0.0, SpacingMode::Exact);
        let columns = partition_sizes(&sizes, Axis::Vertical, 150.0, 0.0, SpacingMode::Exact);
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(columns, vec![0]);
    }

    // =========================================================================
    // Spacing Mode Tests
    // =========================================================================

    #[test]
    fn test_exact_counts_gap_before_candidate() {
        let extents = [100.0, 100.0, 100.0];
        assert_eq!(
            partition_with(&extents, 315.0, 10.0, SpacingMode::Exact),
            vec![0, 2]
        );
    }

    #[test]
    fn test_compat_may_overrun_by_one_spacing() {
        let extents = [100.0, 100.0, 100.0];
        let boundaries = partition_with(&extents, 315.0, 10.0, SpacingMode::Compat);
        assert_eq!(boundaries, vec![0]);

        let lane = lanes(&boundaries, 3)[0];
        let extent = lane_extent(&extents, &lane, 10.0);
        assert_eq!(extent, 320.0);
        assert!(extent <= 315.0 + 10.0);
    }

    #[test]
    fn test_modes_agree_without_spacing() {
        let extents = [30.0, 70.0, 20.0, 90.0, 10.0, 60.0];
        assert_eq!(
            partition_with(&extents, 100.0, 0.0, SpacingMode::Exact),
            partition_with(&extents, 100.0, 0.0, SpacingMode::Compat)
        );
    }

    // =========================================================================
    // Partition Tests
    // =========================================================================

    #[test]
    fn test_lane_of() {
        let partition = Partition::compute(
            &[100.0, 80.0, 150.0, 150.0, 50.0],
            350.0,
            0.0,
            SpacingMode::Exact,
        );
        assert_eq!(partition.lane_of(0), Some(0));
        assert_eq!(partition.lane_of(2), Some(0));
        assert_eq!(partition.lane_of(3), Some(1));
        assert_eq!(partition.lane_of(4), Some(1));
        assert_eq!(partition.lane_of(5), None);
    }

    #[test]
    fn test_is_complete_rejects_gaps() {
        assert!(Partition::from_boundaries(vec![0, 2], 4).is_complete());
        assert!(!Partition::from_boundaries(vec![1, 2], 4).is_complete());
        assert!(!Partition::from_boundaries(vec![0, 2, 2], 4).is_complete());
        assert!(!Partition::from_boundaries(vec![0, 4], 4).is_complete());
        assert!(!Partition::from_boundaries(vec![], 4).is_complete());
    }

    #[test]
    fn test_lane_len() {
        let lane = Lane {
            rank: 0,
            lower: 2,
            upper: 5,
        };
        assert_eq!(lane.len(), 3);
        assert!(!lane.is_empty());
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    fn extents_strategy() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec((0u16..200).prop_map(f32::from), 0..40)
    }

    proptest! {
        #[test]
        fn prop_lanes_cover_every_item_once(
            extents in extents_strategy(),
            available in 0u16..600,
            spacing in 0u16..20,
        ) {
            let partition = Partition::compute(
                &extents,
                f32::from(available),
                f32::from(spacing),
                SpacingMode::Exact,
            );
            prop_assert!(partition.is_complete());

            let mut next = 0;
            for lane in partition.lanes() {
                prop_assert_eq!(lane.lower, next);
                prop_assert!(!lane.is_empty());
                next = lane.upper;
            }
            prop_assert_eq!(next, extents.len());
        }

        #[test]
        fn prop_multi_item_lanes_fit(
            extents in extents_strategy(),
            available in 0u16..600,
            spacing in 0u16..20,
        ) {
            let (available, spacing) = (f32::from(available), f32::from(spacing));
            let boundaries = partition(&extents, available, spacing);
            for lane in lanes(&boundaries, extents.len()) {
                if lane.len() > 1 {
                    prop_assert!(lane_extent(&extents, &lane, spacing) <= available);
                }
            }
        }

        #[test]
        fn prop_compat_overrun_is_bounded(
            extents in extents_strategy(),
            available in 0u16..600,
            spacing in 0u16..20,
        ) {
            let (available, spacing) = (f32::from(available), f32::from(spacing));
            let boundaries = partition_with(&extents, available, spacing, SpacingMode::Compat);
            for lane in lanes(&boundaries, extents.len()) {
                if lane.len() > 1 {
                    prop_assert!(lane_extent(&extents, &lane, spacing) <= available + spacing);
                }
            }
        }

        #[test]
        fn prop_oversized_items_are_alone(
            extents in extents_strategy(),
            available in 0u16..300,
            spacing in 0u16..20,
        ) {
            let available = f32::from(available);
            let boundaries = partition(&extents, available, f32::from(spacing));
            let partition = Partition::from_boundaries(boundaries, extents.len());
            let lanes = partition.lanes();
            for (index, &extent) in extents.iter().enumerate() {
                if extent > available {
                    let rank = partition.lane_of(index).unwrap();
                    prop_assert_eq!(lanes[rank].len(), 1);
                }
            }
        }

        #[test]
        fn prop_breaks_are_forced(
            extents in extents_strategy(),
            available in 0u16..600,
            spacing in 0u16..20,
        ) {
            let (available, spacing) = (f32::from(available), f32::from(spacing));
            let boundaries = partition(&extents, available, spacing);
            for lane in lanes(&boundaries, extents.len()) {
                if lane.upper < extents.len() {
                    let grown = Lane { upper: lane.upper + 1, ..lane };
                    prop_assert!(lane_extent(&extents, &grown, spacing) > available);
                }
            }
        }

        #[test]
        fn prop_deterministic(
            extents in extents_strategy(),
            available in 0u16..600,
            spacing in 0u16..20,
        ) {
            let (available, spacing) = (f32::from(available), f32::from(spacing));
            prop_assert_eq!(
                partition(&extents, available, spacing),
                partition(&extents, available, spacing)
            );
        }

        #[test]
        fn prop_lane_count_monotonic(
            extents in extents_strategy(),
            narrow in 0u16..600,
            extra in 0u16..600,
            spacing in 0u16..20,
        ) {
            let spacing = f32::from(spacing);
            let narrow_count = partition(&extents, f32::from(narrow), spacing).len();
            let wide = f32::from(narrow) + f32::from(extra);
            let wide_count = partition(&extents, wide, spacing).len();
            prop_assert!(wide_count <= narrow_count);
        }
    }
}
