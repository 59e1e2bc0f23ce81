use crate::{Pivot, Vec2};

/// Capability set the engine needs from an item record.
///
/// The engine never depends on a concrete item type: any payload the host
/// defines participates by exposing its index, size and position. Sizes
/// and positions are owned by the [`crate::ListModel`]; implementations
/// just store what the model writes back.
pub trait ScrollItem {
    fn index(&self) -> usize;
    fn set_index(&mut self, index: usize);

    /// Extent of the item: `x` is the horizontal size, `y` the vertical
    /// one, regardless of orientation.
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);

    /// Offset from the list origin, top-left anchored.
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn pivot(&self) -> Pivot {
        Pivot::TOP_LEFT
    }
}

/// The concrete item record shipped with the crate.
///
/// Hosts with richer payloads implement [`ScrollItem`] on their own type
/// instead (or embed a `ListItem` and delegate).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    index: usize,
    size: Vec2,
    position: Vec2,
    pivot: Pivot,
}

impl ListItem {
    pub fn new(size: Vec2) -> Self {
        Self {
            index: 0,
            size,
            position: Vec2::ZERO,
            pivot: Pivot::TOP_LEFT,
        }
    }
}

impl ScrollItem for ListItem {
    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn pivot(&self) -> Pivot {
        self.pivot
    }
}

/// Change descriptor returned by [`crate::ListModel::set_item_size`].
///
/// Resizing an item invalidates the position of every later item; the
/// caller forwards this descriptor to
/// [`crate::RangeProvider::apply_size_change`] to run the reposition
/// cascade. Keeping the hand-off explicit (instead of an internal
/// subscription) makes the cascade observable from the outside.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeChange {
    pub index: usize,
    pub old_size: Vec2,
    pub new_size: Vec2,
}
