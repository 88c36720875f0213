//! JSON reports printed by the CLI.

use serde::Serialize;
use wrapflow::layout::Measurement;
use wrapflow::{Axis, LayoutError, LayoutParams, Negotiation, RenderTree, Size, WrapLayout};

/// Arrangement of one set of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LayoutReport {
    /// Scenario name, for previews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    pub(crate) axis: Axis,
    /// Primary-axis length used; zero when unmeasured.
    pub(crate) available: f32,
    /// Index of the first item of every lane.
    pub(crate) boundaries: Vec<usize>,
    /// Size reported to the host.
    pub(crate) size: Size,
    /// Negotiation passes, when a host was simulated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) passes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) converged: Option<bool>,
    pub(crate) tree: RenderTree,
}

impl LayoutReport {
    /// Arrange pre-measured items in a single pass.
    pub(crate) fn arrange(
        params: LayoutParams,
        measurements: &[Measurement],
        available: Option<f32>,
    ) -> Result<Self, LayoutError> {
        let available = available.unwrap_or(0.0);
        let tree = WrapLayout::new(params)?.arrange(measurements, available);
        Ok(Self {
            name: None,
            axis: params.axis,
            available,
            boundaries: tree.boundaries(),
            size: tree.size,
            passes: None,
            converged: None,
            tree,
        })
    }

    /// Report the outcome of a negotiated layout.
    pub(crate) fn negotiated(name: impl Into<String>, outcome: Negotiation) -> Self {
        let Negotiation {
            pass,
            passes,
            converged,
        } = outcome;
        Self {
            name: Some(name.into()),
            axis: pass.tree.axis,
            available: pass.available,
            boundaries: pass.tree.boundaries(),
            size: pass.size,
            passes: Some(passes),
            converged: Some(converged),
            tree: pass.tree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapflow::{FixedHost, WHStack, DEFAULT_MAX_PASSES};

    fn tiles(sizes: &[(f32, f32)]) -> Vec<Measurement> {
        sizes
            .iter()
            .map(|&(w, h)| Measurement::new(Size::new(w, h)))
            .collect()
    }

    #[test]
    fn test_arrange_report() {
        let params = LayoutParams::new(Axis::Horizontal).spacing(10.0);
        let report = LayoutReport::arrange(
            params,
            &tiles(&[(100.0, 50.0), (80.0, 50.0), (150.0, 30.0), (150.0, 70.0)]),
            Some(350.0),
        )
        .unwrap();
        assert_eq!(report.boundaries, vec![0, 3]);
        assert_eq!(report.size, Size::new(350.0, 130.0));
        assert_eq!(report.passes, None);
    }

    #[test]
    fn test_unmeasured_report() {
        let report = LayoutReport::arrange(
            LayoutParams::default(),
            &tiles(&[(10.0, 10.0), (10.0, 10.0)]),
            None,
        )
        .unwrap();
        assert_eq!(report.available, 0.0);
        assert_eq!(report.boundaries, vec![0, 1]);
    }

    #[test]
    fn test_json_skips_absent_fields() {
        let report = LayoutReport::arrange(LayoutParams::default(), &[], Some(100.0)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("passes").is_none());
        assert_eq!(json["boundaries"], serde_json::json!([]));
        assert_eq!(json["axis"], "horizontal");
    }

    #[test]
    fn test_negotiated_report() {
        let mut view = WHStack::new()
            .build(wrapflow::preview::sample_items(4))
            .unwrap();
        let outcome = view.negotiate(&mut FixedHost::new(350.0), DEFAULT_MAX_PASSES);
        let report = LayoutReport::negotiated("items-4", outcome);

        assert_eq!(report.name.as_deref(), Some("items-4"));
        assert_eq!(report.converged, Some(true));
        assert_eq!(report.passes, Some(2));
        assert_eq!(report.boundaries, vec![0, 3]);
    }
}
