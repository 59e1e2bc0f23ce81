use crate::item::{ScrollItem, SizeChange};
use crate::{Error, LayoutOptions, ListItem, Orientation, Padding, Result, Vec2};

/// The canonical item store plus the geometry parameters that position it.
///
/// This is the per-list context object: it owns the ordered item sequence
/// (insertion order = index order) and the layout scalars, and every other
/// component ([`crate::PositionIndex`], [`crate::WindowCalculator`],
/// [`crate::RangeProvider`]) borrows it per call. Two lists never share
/// state, even when parameterized over the same item type.
///
/// Positioning is top-left anchored. Primary-axis positions accumulate
/// negatively for vertical lists (items grow downward) and positively for
/// horizontal ones; the leading default padding takes the place of the
/// first inter-item spacing.
#[derive(Clone, Debug)]
pub struct ListModel<T = ListItem> {
    orientation: Orientation,
    padding: Padding,
    spacing: f32,
    view_length: Vec2,
    content_size: Vec2,
    preload: bool,
    always_refresh: bool,
    items: Vec<T>,
}

impl<T: ScrollItem> ListModel<T> {
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        ddebug!(
            orientation = ?options.orientation,
            spacing = options.spacing,
            preload = options.preload,
            "ListModel::new"
        );
        let mut model = Self {
            orientation: options.orientation,
            padding: options.padding,
            spacing: options.spacing,
            view_length: options.view_length,
            content_size: Vec2::ZERO,
            preload: options.preload,
            always_refresh: options.always_refresh,
            items: Vec::new(),
        };
        model.set_content_size(options.content_size);
        Ok(model)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        if !padding.is_non_negative() {
            return Err(Error::NegativePadding);
        }
        self.padding = padding;
        Ok(())
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) -> Result<()> {
        if spacing < 0.0 {
            return Err(Error::NegativeSpacing);
        }
        self.spacing = spacing;
        Ok(())
    }

    /// Viewport extent along the primary axis.
    pub fn view_length(&self) -> f32 {
        self.orientation.primary(self.view_length)
    }

    pub fn set_view_length(&mut self, view_length: Vec2) -> Result<()> {
        if view_length.x <= 0.0 || view_length.y <= 0.0 {
            return Err(Error::InvalidViewLength);
        }
        self.view_length = view_length;
        Ok(())
    }

    /// Cross-axis content extent. The primary component is always zero;
    /// the full primary length lives with the items and is computed by
    /// [`Self::content_length`].
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    pub fn set_content_size(&mut self, content_size: Vec2) {
        self.content_size = match self.orientation {
            Orientation::Vertical => Vec2::new(content_size.x, 0.0),
            Orientation::Horizontal => Vec2::new(0.0, content_size.y),
        };
    }

    pub fn preload(&self) -> bool {
        self.preload
    }

    pub fn always_refresh(&self) -> bool {
        self.always_refresh
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Computes where the item at `index` belongs, from its predecessor's
    /// position and extent. Index 0 sits at the origin. The predecessor's
    /// trailing gap is the leading default padding when it sits at the
    /// origin, the inter-item spacing otherwise (and nothing at all for
    /// index 1, where the padding already covers it).
    pub fn calculate_item_position(&self, index: usize) -> Result<Vec2> {
        if index == 0 {
            return Ok(Vec2::ZERO);
        }
        let prev = self.item(index - 1)?;
        let prev_pos = prev.position();
        let prev_size = prev.size();
        let top_pad = if prev_pos.y == 0.0 { self.padding.top } else { 0.0 };
        let left_pad = if prev_pos.x == 0.0 { self.padding.left } else { 0.0 };
        let spacing = if index == 1 { 0.0 } else { self.spacing };

        Ok(Vec2::new(
            prev_pos.x + left_pad + prev_size.x + spacing,
            prev_pos.y - prev_size.y - spacing - top_pad,
        ))
    }

    /// A contiguous, order-preserving slice of `count` items starting at
    /// `start`.
    pub fn get_range(&self, start: usize, count: usize) -> Result<&[T]> {
        let len = self.items.len();
        let end = start.checked_add(count).filter(|&e| e <= len).ok_or(
            Error::InvalidRange {
                start,
                count,
                len,
            },
        )?;
        Ok(&self.items[start..end])
    }

    /// Minimum primary-axis extent across all items; the worst case used
    /// to bound the window size.
    pub fn item_min_length(&self) -> Result<f32> {
        if self.items.is_empty() {
            return Err(Error::EmptyItems);
        }
        Ok(self
            .items
            .iter()
            .map(|i| self.orientation.primary(i.size()))
            .fold(f32::INFINITY, f32::min))
    }

    /// Primary-axis length of `count` items starting at `index`: the item
    /// extents plus `count - 1` spacings (for a slice anchored at the list
    /// head) or `count` spacings (elsewhere, since the predecessor's
    /// trailing spacing is not part of the slice), plus the leading
    /// default padding when `index == 0`.
    ///
    /// With `count == 0` at the head this is `leading - spacing`, which is
    /// negative for spacious layouts; the consumers that surface it as a
    /// spacer clamp at zero.
    pub fn content_length(&self, count: usize, index: usize) -> Result<f32> {
        let slice = self.get_range(index, count)?;
        let mut length: f32 = slice
            .iter()
            .map(|i| self.orientation.primary(i.size()))
            .sum();

        length += if index == 0 {
            (slice.len() as f32 - 1.0) * self.spacing
        } else {
            slice.len() as f32 * self.spacing
        };

        if index == 0 {
            length += self.padding.leading(self.orientation);
        }

        Ok(length)
    }

    /// Full primary-axis extent of the list.
    pub fn total_length(&self) -> f32 {
        // Covers the empty model too: an empty slice at the head yields
        // the (possibly negative) leading-minus-spacing remainder.
        self.content_length(self.items.len(), 0)
            .unwrap_or(self.padding.leading(self.orientation))
    }

    /// Direct position write-back, used by the reposition cascade.
    pub fn update_item_position(&mut self, index: usize, position: Vec2) -> Result<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        item.set_position(position);
        Ok(())
    }

    /// The cost of crossing one item while rolling the window: its
    /// primary extent plus the leading padding (index 0) or the spacing
    /// (any other index).
    pub fn item_size(&self, index: usize) -> Result<f32> {
        let item = self.item(index)?;
        let primary = self.orientation.primary(item.size());
        Ok(if index == 0 {
            primary + self.padding.leading(self.orientation)
        } else {
            primary + self.spacing
        })
    }

    /// Runtime resize of a single item. Later items keep their now-stale
    /// positions until the returned descriptor is fed to
    /// [`crate::RangeProvider::apply_size_change`].
    pub fn set_item_size(&mut self, index: usize, size: Vec2) -> Result<SizeChange> {
        if size.x < 0.0 || size.y < 0.0 {
            return Err(Error::NegativeSize);
        }
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let old_size = item.size();
        item.set_size(size);
        dtrace!(index, "ListModel::set_item_size");
        Ok(SizeChange {
            index,
            old_size,
            new_size: size,
        })
    }

    /// Bulk-replaces the collection. Indices are reassigned 0..n-1; run
    /// [`crate::RangeProvider::update_positions_from_index`] from 0 (or
    /// use [`crate::RangeProvider::set_items`]) to lay the items out.
    pub fn set_items(&mut self, mut items: Vec<T>) -> Result<()> {
        if items.is_empty() {
            return Err(Error::EmptyItems);
        }
        for item in &items {
            let size = item.size();
            if size.x < 0.0 || size.y < 0.0 {
                return Err(Error::NegativeSize);
            }
        }
        for (index, item) in items.iter_mut().enumerate() {
            item.set_index(index);
        }
        ddebug!(count = items.len(), "ListModel::set_items");
        self.items = items;
        Ok(())
    }

    /// Releases every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: ScrollItem + Default> ListModel<T> {
    /// Appends a new item with the given extent at the given position and
    /// returns it. Use [`crate::RangeProvider::create_item`] to have the
    /// position computed for you.
    pub fn create_item(&mut self, size: Vec2, position: Vec2) -> Result<&T> {
        if size.x < 0.0 || size.y < 0.0 {
            return Err(Error::NegativeSize);
        }
        let index = self.items.len();
        dtrace!(index, "ListModel::create_item");
        let mut item = T::default();
        item.set_index(index);
        item.set_size(size);
        item.set_position(position);
        self.items.push(item);
        Ok(&self.items[index])
    }
}
