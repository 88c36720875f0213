//! Ordered, heterogeneous item collection.

use std::ops::Index;
use wrapflow_core::Item;

/// An ordered list of boxed items.
///
/// Order is layout order: lanes are filled front to back.
#[derive(Debug, Default)]
pub struct ItemList {
    items: Vec<Box<dyn Item>>,
}

impl ItemList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn push(&mut self, item: impl Item + 'static) {
        self.items.push(Box::new(item));
    }

    /// Append an item, builder style.
    #[must_use]
    pub fn with(mut self, item: impl Item + 'static) -> Self {
        self.push(item);
        self
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Item> {
        self.items.get(index).map(AsRef::as_ref)
    }

    /// The items as a slice, for passing to layout functions.
    #[must_use]
    pub fn as_slice(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Item> {
        self.items.iter().map(AsRef::as_ref)
    }
}

impl Index<usize> for ItemList {
    type Output = dyn Item;

    fn index(&self, index: usize) -> &Self::Output {
        self.items[index].as_ref()
    }
}

impl FromIterator<Box<dyn Item>> for ItemList {
    fn from_iter<T: IntoIterator<Item = Box<dyn Item>>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Item>> for ItemList {
    fn extend<T: IntoIterator<Item = Box<dyn Item>>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl From<Vec<Box<dyn Item>>> for ItemList {
    fn from(items: Vec<Box<dyn Item>>) -> Self {
        Self { items }
    }
}

impl IntoIterator for ItemList {
    type Item = Box<dyn Item>;
    type IntoIter = std::vec::IntoIter<Box<dyn Item>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
