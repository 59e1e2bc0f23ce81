use crate::item::{ScrollItem, SizeChange};
use crate::{Error, ListModel, PositionIndex, Result, Vec2};

/// Query/mutation façade over [`ListModel`]: slice lookups by index or by
/// content position, item creation, and the reposition cascade that keeps
/// positions consistent after a resize.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeProvider {
    finder: PositionIndex,
}

impl RangeProvider {
    pub fn new() -> Self {
        Self {
            finder: PositionIndex::new(),
        }
    }

    /// Appends a new item at the end of the list, with its position
    /// computed from the current tail.
    pub fn create_item<'a, T: ScrollItem + Default>(
        &self,
        model: &'a mut ListModel<T>,
        size: Vec2,
    ) -> Result<&'a T> {
        let position = model.calculate_item_position(model.len())?;
        model.create_item(size, position)
    }

    /// A window-sized slice starting at `index`. A window overflowing the
    /// tail slides back to end exactly at the last item, so the rendered
    /// window stays full whenever enough data exists. An empty model
    /// yields an empty slice.
    pub fn get_range<'a, T: ScrollItem>(
        &self,
        model: &'a ListModel<T>,
        index: usize,
        count: usize,
    ) -> Result<&'a [T]> {
        if model.is_empty() {
            return Ok(&[]);
        }
        if index.checked_add(count).is_none_or(|end| end > model.len()) {
            let start = model.len().checked_sub(count).ok_or(Error::InvalidRange {
                start: index,
                count,
                len: model.len(),
            })?;
            return model.get_range(start, count);
        }
        model.get_range(index, count)
    }

    /// Like [`Self::get_range`], anchored at the item containing the
    /// host's content position. A lookup miss yields an empty slice.
    pub fn get_range_at<'a, T: ScrollItem>(
        &self,
        model: &'a ListModel<T>,
        content_pos: Vec2,
        count: usize,
    ) -> Result<&'a [T]> {
        match self.finder.by_position(model, content_pos) {
            Some(index) => self.get_range(model, index, count),
            None => Ok(&[]),
        }
    }

    /// Recomputes and writes back the position of every item from `index`
    /// to the end — the cascade required after any earlier item changes
    /// size. Idempotent.
    pub fn update_positions_from_index<T: ScrollItem>(
        &self,
        model: &mut ListModel<T>,
        index: usize,
    ) -> Result<()> {
        dtrace!(index, len = model.len(), "update_positions_from_index");
        for i in index..model.len() {
            let position = model.calculate_item_position(i)?;
            model.update_item_position(i, position)?;
        }
        Ok(())
    }

    /// Runs the reposition cascade for a size change reported by
    /// [`ListModel::set_item_size`]: everything after the resized item
    /// moves, the item itself stays put.
    pub fn apply_size_change<T: ScrollItem>(
        &self,
        model: &mut ListModel<T>,
        change: SizeChange,
    ) -> Result<()> {
        self.update_positions_from_index(model, change.index + 1)
    }

    /// Bulk-replaces the item collection and lays every item out from
    /// scratch.
    pub fn set_items<T: ScrollItem>(&self, model: &mut ListModel<T>, items: Vec<T>) -> Result<()> {
        model.set_items(items)?;
        self.update_positions_from_index(model, 0)
    }
}
