//! Stock preview scenarios.
//!
//! Rows and columns are built from the same ten swatches, added one at a time,
//! followed by a spaced variant with end alignment and a text variant.

use crate::item_list::ItemList;
use crate::items::{Label, Swatch};
use crate::stack::{WHStack, WVStack, WrapView};
use wrapflow_core::{Axis, Color, HorizontalAlignment, LayoutError, VerticalAlignment};

/// Primary length the previews are framed to.
pub const PREVIEW_LENGTH: f32 = 350.0;

const SAMPLE: [(Color, f32, f32); 10] = [
    (Color::RED, 100.0, 50.0),
    (Color::GRAY, 80.0, 50.0),
    (Color::GREEN, 150.0, 30.0),
    (Color::YELLOW, 150.0, 70.0),
    (Color::ORANGE, 50.0, 50.0),
    (Color::PURPLE, 50.0, 50.0),
    (Color::BLUE, 50.0, 50.0),
    (Color::BLACK, 50.0, 50.0),
    (Color::PINK, 50.0, 50.0),
    (Color::WHITE, 50.0, 50.0),
];

/// A named stack ready to lay out.
#[derive(Debug)]
pub struct Preview {
    /// Scenario name.
    pub name: String,
    /// The built stack.
    pub view: WrapView,
}

/// The first `count` sample swatches (at most ten).
#[must_use]
pub fn sample_items(count: usize) -> ItemList {
    SAMPLE
        .iter()
        .take(count)
        .fold(ItemList::new(), |list, &(color, width, height)| {
            list.with(Swatch::new(color, width, height))
        })
}

fn labels() -> ItemList {
    ItemList::new()
        .with(Label::new("Header").font_size(24.0))
        .with(Label::new("wrapping"))
        .with(Label::new("text runs").font_size(12.0))
        .with(Label::new("share a baseline").font_size(20.0))
        .with(Label::new("Footer"))
}

/// Every preview scenario for a flow along `axis`.
pub fn previews(axis: Axis) -> Result<Vec<Preview>, LayoutError> {
    let mut out = Vec::with_capacity(SAMPLE.len() + 4);
    let mut add = |name: String, view: WrapView| out.push(Preview { name, view });

    let single = ItemList::new().with(Swatch::new(Color::PURPLE, 50.0, 50.0));
    match axis {
        Axis::Horizontal => {
            add("empty".into(), WHStack::new().build(ItemList::new())?);
            add("single".into(), WHStack::new().build(single)?);
            for count in 1..=SAMPLE.len() {
                add(format!("items-{count}"), WHStack::new().build(sample_items(count))?);
            }
            add(
                "spaced".into(),
                WHStack::new()
                    .alignment(VerticalAlignment::Bottom)
                    .spacing(10.0)
                    .build(sample_items(SAMPLE.len()))?,
            );
            add(
                "labels".into(),
                WHStack::new()
                    .alignment(VerticalAlignment::Baseline)
                    .spacing(8.0)
                    .build(labels())?,
            );
        }
        Axis::Vertical => {
            add("empty".into(), WVStack::new().build(ItemList::new())?);
            add("single".into(), WVStack::new().build(single)?);
            for count in 1..=SAMPLE.len() {
                add(format!("items-{count}"), WVStack::new().build(sample_items(count))?);
            }
            add(
                "spaced".into(),
                WVStack::new()
                    .alignment(HorizontalAlignment::Trailing)
                    .spacing(10.0)
                    .build(sample_items(SAMPLE.len()))?,
            );
            add(
                "labels".into(),
                WVStack::new()
                    .alignment(HorizontalAlignment::Leading)
                    .spacing(8.0)
                    .build(labels())?,
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapflow_core::Size;

    #[test]
    fn test_sample_items_count() {
        assert_eq!(sample_items(0).len(), 0);
        assert_eq!(sample_items(4).len(), 4);
        assert_eq!(sample_items(99).len(), 10);
    }

    #[test]
    fn test_preview_names() {
        let previews = previews(Axis::Horizontal).unwrap();
        let names: Vec<&str> = previews.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "empty");
        assert_eq!(names[2], "items-1");
        assert_eq!(names[12], "spaced");
        assert_eq!(names[13], "labels");
    }

    #[test]
    fn test_empty_preview_reports_zero() {
        let mut previews = previews(Axis::Vertical).unwrap();
        let pass = previews[0].view.layout(Some(PREVIEW_LENGTH)).unwrap();
        assert_eq!(pass.size, Size::ZERO);
    }

    #[test]
    fn test_spaced_rows() {
        let mut previews = previews(Axis::Horizontal).unwrap();
        let spaced = &mut previews[12].view;
        let pass = spaced.layout(Some(PREVIEW_LENGTH)).unwrap();

        // 100+10+80+10+150 fills the first row exactly; the second row holds
        // 150+10+50+10+50+10+50 = 330 and one more 50 would need 390.
        assert_eq!(pass.tree.boundaries(), vec![0, 3, 7]);
        // Bottom alignment: the 30 tall swatch sits on the row's bottom edge.
        assert_eq!(pass.tree.frame_of(2).map(|f| f.y), Some(20.0));
    }
}
