//! Layout engine driving many wrap containers.

use tracing::debug;
use wrapflow_core::{Item, Size};

use crate::cache::{ContainerId, ReportCache};
use crate::feedback::SizeReporter;
use crate::partition::sanitize;
use crate::wrap::{LayoutPass, WrapLayout};

/// Lays out wrap containers by id and forwards changed sizes to a reporter.
///
/// The engine owns the last-reported size of every container, so the
/// containers themselves can be shared immutably.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    cache: ReportCache,
}

impl LayoutEngine {
    /// Create a new layout engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out container `id` and report its size if it is new or changed.
    pub fn layout<I, R>(
        &mut self,
        id: ContainerId,
        layout: &WrapLayout,
        items: &[I],
        available: Option<f32>,
        reporter: &mut R,
    ) -> LayoutPass
    where
        I: Item,
        R: SizeReporter + ?Sized,
    {
        let available = available.map_or(0.0, sanitize);
        let tree = layout.render(items, available);
        let size = tree.size;
        let outcome = self.cache.record(id, size);

        if outcome.is_changed() {
            debug!(%id, width = size.width, height = size.height, ?outcome, "reporting size");
            reporter.report(id, size);
        }

        LayoutPass {
            tree,
            size,
            changed: outcome.is_changed(),
            available,
        }
    }

    /// Last size reported for `id`.
    #[must_use]
    pub fn last_reported(&self, id: ContainerId) -> Option<Size> {
        self.cache.get(id)
    }

    /// Drop `id` so its next layout reports again.
    pub fn forget(&mut self, id: ContainerId) {
        self.cache.remove(id);
    }

    /// Advance to the next frame, evicting containers not laid out recently.
    pub fn advance_frame(&mut self) {
        self.cache.advance_frame();
    }

    /// The report cache.
    #[must_use]
    pub const fn cache(&self) -> &ReportCache {
        &self.cache
    }

    /// Clear every cached report.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingReporter;
    use crate::params::LayoutParams;
    use wrapflow_core::{Axis, Canvas, Constraints, Rect};

    #[derive(Debug)]
    struct Block(Size);

    impl Item for Block {
        fn measure(&self, _constraints: Constraints) -> Size {
            self.0
        }

        fn paint(&self, _frame: Rect, _canvas: &mut dyn Canvas) {}
    }

    fn blocks(count: usize) -> Vec<Block> {
        (0..count).map(|_| Block(Size::new(100.0, 20.0))).collect()
    }

    #[test]
    fn test_layout_engine_new() {
        let engine = LayoutEngine::new();
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_reports_only_changes() {
        let mut engine = LayoutEngine::new();
        let mut reporter = RecordingReporter::new();
        let layout = WrapLayout::default();
        let items = blocks(3);
        let id = ContainerId(1);

        let first = engine.layout(id, &layout, &items, Some(250.0), &mut reporter);
        let second = engine.layout(id, &layout, &items, Some(250.0), &mut reporter);
        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(reporter.reports().len(), 1);

        engine.layout(id, &layout, &items, Some(100.0), &mut reporter);
        assert_eq!(reporter.reports().len(), 2);
        assert_eq!(reporter.last_for(id), Some(Size::new(100.0, 60.0)));
        assert_eq!(engine.cache().hits(), 1);
        assert_eq!(engine.cache().misses(), 2);
    }

    #[test]
    fn test_containers_are_independent() {
        let mut engine = LayoutEngine::new();
        let mut reporter = RecordingReporter::new();
        let rows = WrapLayout::default();
        let columns = WrapLayout::new(LayoutParams::new(Axis::Vertical)).unwrap();
        let items = blocks(2);

        engine.layout(ContainerId(1), &rows, &items, Some(300.0), &mut reporter);
        engine.layout(ContainerId(2), &columns, &items, Some(300.0), &mut reporter);

        assert_eq!(engine.last_reported(ContainerId(1)), Some(Size::new(300.0, 20.0)));
        assert_eq!(engine.last_reported(ContainerId(2)), Some(Size::new(100.0, 300.0)));
    }

    #[test]
    fn test_advance_frame_evicts_idle_containers() {
        let mut engine = LayoutEngine::new();
        let mut reporter = RecordingReporter::new();
        let layout = WrapLayout::default();
        let items = blocks(1);

        engine.layout(ContainerId(1), &layout, &items, Some(100.0), &mut reporter);
        for _ in 0..3 {
            engine.advance_frame();
        }
        assert_eq!(engine.last_reported(ContainerId(1)), None);

        engine.layout(ContainerId(1), &layout, &items, Some(100.0), &mut reporter);
        assert_eq!(reporter.reports().len(), 2);
    }

    #[test]
    fn test_forget_reports_again() {
        let mut engine = LayoutEngine::new();
        let mut count = 0;
        let mut reporter = |_: ContainerId, _: Size| count += 1;
        let layout = WrapLayout::default();
        let items = blocks(1);

        engine.layout(ContainerId(4), &layout, &items, None, &mut reporter);
        engine.forget(ContainerId(4));
        engine.layout(ContainerId(4), &layout, &items, None, &mut reporter);
        assert_eq!(count, 2);
    }
}
