use crate::item::ScrollItem;
use crate::{ListModel, Orientation, Vec2};

/// Offset → index lookup over the monotonic primary-axis positions.
///
/// Stateless; borrows the model per call. A miss (`None`) is a normal
/// signal — the list is empty or the offset lies outside the content
/// range — and callers treat it as "nothing to window yet".
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionIndex;

impl PositionIndex {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a content-local position (the host's content translation)
    /// to the item whose span contains it. Vertical lists read the `y`
    /// component as the scrolled distance; horizontal ones read `-x`,
    /// since content slides leftward as the user scrolls.
    pub fn by_position<T: ScrollItem>(&self, model: &ListModel<T>, position: Vec2) -> Option<usize> {
        let offset = match model.orientation() {
            Orientation::Vertical => position.y,
            Orientation::Horizontal => -position.x,
        };
        self.by_offset(model, offset)
    }

    /// Binary search for the item whose span `[start, next)` contains the
    /// scrolled distance `offset`. The next boundary is the following
    /// item's stored position, or — for the last item — synthesized from
    /// its extent plus spacing (plus the leading padding instead when the
    /// last item is also the first).
    pub fn by_offset<T: ScrollItem>(&self, model: &ListModel<T>, offset: f32) -> Option<usize> {
        let items = model.items();
        if items.is_empty() {
            return None;
        }

        let mut left = 0isize;
        let mut right = items.len() as isize - 1;

        while left <= right {
            let mid = left + (right - left) / 2;
            let i = mid as usize;

            let start = item_start(model, i);
            let next = next_boundary(model, i);

            if offset >= start && offset < next {
                dtrace!(offset, index = i, "PositionIndex hit");
                return Some(i);
            }

            if start < offset {
                left = mid + 1;
            } else {
                right = mid - 1;
            }
        }

        dtrace!(offset, "PositionIndex miss");
        None
    }
}

/// Scrolled distance at which item `i` begins.
fn item_start<T: ScrollItem>(model: &ListModel<T>, i: usize) -> f32 {
    let position = model.items()[i].position();
    match model.orientation() {
        Orientation::Vertical => -position.y,
        Orientation::Horizontal => position.x,
    }
}

/// Scrolled distance at which item `i` ends (exclusive).
fn next_boundary<T: ScrollItem>(model: &ListModel<T>, i: usize) -> f32 {
    let items = model.items();
    if i + 1 < items.len() {
        return item_start(model, i + 1);
    }

    let item = &items[i];
    let extent = model.orientation().primary(item.size());
    let gap = if item.index() == 0 {
        model.padding().leading(model.orientation())
    } else {
        model.spacing()
    };
    item_start(model, i) + extent + gap
}
