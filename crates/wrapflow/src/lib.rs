#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]
//! wrapflow: wrapping row and column stacks.
//!
//! ```
//! use wrapflow::{Color, ItemList, Swatch, WHStack};
//!
//! let items = ItemList::new()
//!     .with(Swatch::new(Color::RED, 100.0, 50.0))
//!     .with(Swatch::new(Color::GRAY, 80.0, 50.0))
//!     .with(Swatch::new(Color::GREEN, 150.0, 30.0))
//!     .with(Swatch::new(Color::YELLOW, 150.0, 70.0));
//!
//! let mut stack = WHStack::new().spacing(10.0).build(items).unwrap();
//! let pass = stack.layout(Some(350.0)).unwrap();
//! assert_eq!(pass.tree.lane_count(), 2);
//! ```

mod item_list;
mod items;
mod logging;
pub mod preview;
mod stack;

pub use item_list::ItemList;
pub use items::{Label, Swatch};
pub use logging::{init_logging, init_logging_with, DEFAULT_DIRECTIVE};
pub use stack::{WHStack, WVStack, WrapStack, WrapView};

pub use wrapflow_core::*;
pub use wrapflow_layout as layout;
pub use wrapflow_layout::{
    negotiate, ContainerId, FixedHost, Host, LayoutEngine, LayoutParams, LayoutPass, Negotiation,
    RenderTree, SizeReporter, SpacingMode, WrapLayout, DEFAULT_MAX_PASSES,
};
