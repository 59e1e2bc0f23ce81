use crate::item::ScrollItem;
use crate::types::EPSILON;
use crate::{Error, ListModel, Orientation, Padding, PositionIndex, Result, Vec2};

/// Scrollbar fractions carry a tiny bias so the extremes survive the
/// host's own float round-trip without jitter.
const BAR_EPSILON: f32 = 1e-5;

/// Derives everything the host needs per scroll tick: how many visual
/// nodes to keep alive, the total content extent, the scrollbar fraction,
/// the spacer insets standing in for the off-screen items, and the signed
/// number of items to roll from one window edge to the other.
///
/// Owns the `(index, count) → max offset` cache; one calculator per list,
/// never shared. Callers must apply the returned insets before the host's
/// layout pass re-flows children, or stale offsets will flicker.
#[derive(Clone, Debug)]
pub struct WindowCalculator {
    finder: PositionIndex,
    cached: Option<(usize, usize)>,
    max_offset: f32,
}

impl WindowCalculator {
    pub fn new() -> Self {
        Self {
            finder: PositionIndex::new(),
            cached: None,
            max_offset: 0.0,
        }
    }

    /// Number of visual nodes that can ever be on screen at once:
    /// `ceil(viewport / smallest item) + 1`, clamped to the item count.
    pub fn instance_count<T: ScrollItem>(&self, model: &ListModel<T>) -> Result<usize> {
        let min = model.item_min_length()?;
        if min <= 0.0 {
            // Zero-extent items give no usable bound; any item may be on
            // screen at once.
            return Ok(model.len());
        }
        let number = (model.view_length() / min).ceil() as usize + 1;
        Ok(number.min(model.len()))
    }

    /// Pooled node slots to reserve. Preloading doubles the pool (to
    /// pre-stage slow content off-screen) without doubling the active
    /// window.
    pub fn pool_capacity<T: ScrollItem>(&self, model: &ListModel<T>) -> Result<usize> {
        let count = self.instance_count(model)?;
        Ok(if model.preload() { count * 2 } else { count })
    }

    /// Full content extent: the accumulated primary length paired with
    /// the configured cross extent.
    pub fn content_size<T: ScrollItem>(&self, model: &ListModel<T>) -> Result<Vec2> {
        let length = model.content_length(model.len(), 0)?;
        Ok(match model.orientation() {
            Orientation::Vertical => Vec2::new(model.content_size().x, length),
            Orientation::Horizontal => Vec2::new(length, model.content_size().y),
        })
    }

    /// Normalized scrollbar fraction putting the item at `index` at the
    /// viewport's leading edge. 1.0 is the top (vertical) or left
    /// (horizontal) extreme; the mirrored convention applies across
    /// orientations.
    pub fn bar_position<T: ScrollItem>(&self, model: &ListModel<T>, index: usize) -> Result<f32> {
        let scrollable = model.content_length(model.len(), 0)? - model.view_length();
        let consumed = model.content_length(index, 0)?;
        let vertical = (1.0 - consumed / scrollable - BAR_EPSILON).clamp(0.0, 1.0);

        Ok(match model.orientation() {
            Orientation::Vertical => vertical,
            Orientation::Horizontal => 1.0 - vertical,
        })
    }

    /// Computes the four-component spacer inset for a window of `count`
    /// nodes starting at `index`, given the host's current content
    /// position.
    ///
    /// The content position is clamped into the valid scrollable range
    /// (negative → origin, at or past the far edge → the cached max
    /// offset), the boundary item is resolved through the position index,
    /// and the accumulated length of everything before it becomes the
    /// leading spacer, packed with the orthogonal default paddings.
    ///
    /// The max offset — total length minus the window's own length — is
    /// recomputed only when `(index, count)` differs from the previous
    /// call.
    pub fn offset<T: ScrollItem>(
        &mut self,
        model: &ListModel<T>,
        index: usize,
        count: usize,
        content_pos: Vec2,
    ) -> Result<Padding> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        if model.is_empty() {
            return Err(Error::EmptyItems);
        }

        let content_length = model.content_length(model.len(), 0)?;

        if self.cached != Some((index, count)) {
            self.max_offset = content_length - model.content_length(count, index)?;
            self.cached = Some((index, count));
            ddebug!(index, count, max_offset = self.max_offset, "offset cache refresh");
        }

        // Clamp into the scrollable range before the lookup: behind the
        // origin snaps to zero, at or past the far edge snaps to the max
        // offset (expressed per the orientation's sign convention).
        let mut pos = content_pos;
        if (-pos.x).min(pos.y) < 0.0 {
            pos = Vec2::ZERO;
        }
        if (-pos.x).max(pos.y) >= content_length {
            pos = match model.orientation() {
                Orientation::Vertical => Vec2::splat(self.max_offset),
                Orientation::Horizontal => Vec2::splat(-self.max_offset),
            };
        }

        let boundary = self
            .finder
            .by_position(model, pos)
            .ok_or(Error::EmptyItems)?;
        let spacer = model
            .content_length(boundary, 0)?
            .clamp(0.0, self.max_offset);

        dtrace!(boundary, spacer, "WindowCalculator::offset");
        Ok(self.pack_spacer(model, spacer))
    }

    /// Signed number of items that must be retired from one window edge
    /// and appended to the other so the window matches the new spacer.
    /// Walks per-item costs from `start_index` (the window's first item)
    /// until the leading-inset difference is within tolerance; positive
    /// means the window rolls toward the list tail.
    pub fn rolling<T: ScrollItem>(
        &self,
        model: &ListModel<T>,
        current: Padding,
        new: Padding,
        start_index: usize,
    ) -> Result<i32> {
        if !current.is_non_negative() || !new.is_non_negative() {
            return Err(Error::NegativePadding);
        }

        let orientation = model.orientation();
        let mut diff = new.leading(orientation) - current.leading(orientation);
        let mut rolling = 0i32;
        let mut index = start_index;

        if diff > EPSILON {
            while diff > EPSILON {
                rolling += 1;
                diff -= model.item_size(index)?;
                index += 1;
            }
        } else if diff < -EPSILON {
            while diff < -EPSILON {
                rolling -= 1;
                let prev = index.checked_sub(1).ok_or(Error::IndexOutOfRange {
                    index: 0,
                    len: model.len(),
                })?;
                diff += model.item_size(prev)?;
                index = prev;
            }
        }

        dtrace!(start_index, rolling, "WindowCalculator::rolling");
        Ok(rolling)
    }

    fn pack_spacer<T: ScrollItem>(&self, model: &ListModel<T>, spacer: f32) -> Padding {
        let padding = model.padding();
        match model.orientation() {
            Orientation::Vertical => Padding::new(
                spacer + padding.top,
                0.0,
                padding.left,
                padding.right,
            ),
            Orientation::Horizontal => Padding::new(
                padding.top,
                padding.bottom,
                spacer + padding.left,
                0.0,
            ),
        }
    }
}

impl Default for WindowCalculator {
    fn default() -> Self {
        Self::new()
    }
}
