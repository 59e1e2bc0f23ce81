use crate::pool::{NodeFactory, RecyclePool};

/// One window slot: a logical item index bound to a pooled node handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment<N> {
    pub index: usize,
    pub node: N,
}

/// The ordered set of (logical index → node) assignments currently backed
/// by an active visual node.
///
/// Rolling rotates assignments between the window edges instead of
/// recreating them: the retired node is re-bound to the newly exposed
/// index through the `bind` callback (where the host pushes the item's
/// data into the node) and moves to the opposite edge. Nodes only return
/// to the pool through [`Self::clear_into`].
#[derive(Clone, Debug, Default)]
pub struct Window<N> {
    slots: Vec<Assignment<N>>,
}

impl<N> Window<N> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Fills the window with `count` nodes from the pool, bound to the
    /// consecutive indices starting at `start_index`.
    pub fn populate<F>(
        &mut self,
        pool: &mut RecyclePool<F>,
        start_index: usize,
        count: usize,
        mut bind: impl FnMut(usize, &mut N),
    ) where
        F: NodeFactory<Node = N>,
    {
        self.clear_into(pool);
        self.slots.reserve(count);
        for (offset, mut node) in pool.get(count).into_iter().enumerate() {
            let index = start_index + offset;
            bind(index, &mut node);
            self.slots.push(Assignment { index, node });
        }
    }

    /// Rolls the window by `delta` items: positive retires assignments at
    /// the leading edge and re-binds them past the trailing edge, negative
    /// goes the other way. Stops early rather than rolling past index 0;
    /// returns the delta actually applied.
    ///
    /// `delta` comes from [`crate::WindowCalculator::rolling`], which
    /// derives it from the spacer change, so a full roll is the normal
    /// case.
    pub fn roll(&mut self, delta: i32, mut bind: impl FnMut(usize, &mut N)) -> i32 {
        if self.slots.is_empty() {
            return 0;
        }

        let mut applied = 0i32;
        if delta > 0 {
            for _ in 0..delta {
                let last = self.slots[self.slots.len() - 1].index;
                let mut slot = self.slots.remove(0);
                slot.index = last + 1;
                bind(slot.index, &mut slot.node);
                self.slots.push(slot);
                applied += 1;
            }
        } else {
            for _ in 0..(-delta) {
                let Some(first) = self.slots[0].index.checked_sub(1) else {
                    dwarn!(delta, applied, "Window::roll stopped at the list head");
                    break;
                };
                let mut slot = match self.slots.pop() {
                    Some(slot) => slot,
                    None => break,
                };
                slot.index = first;
                bind(slot.index, &mut slot.node);
                self.slots.insert(0, slot);
                applied -= 1;
            }
        }

        dtrace!(delta, applied, "Window::roll");
        applied
    }

    /// Releases every node back to the pool and empties the window.
    pub fn clear_into<F>(&mut self, pool: &mut RecyclePool<F>)
    where
        F: NodeFactory<Node = N>,
    {
        for slot in self.slots.drain(..) {
            pool.release(slot.node);
        }
    }

    /// The current assignments, leading edge first.
    pub fn assignments(&self) -> &[Assignment<N>] {
        &self.slots
    }

    /// Logical index bound at the leading edge.
    pub fn first_index(&self) -> Option<usize> {
        self.slots.first().map(|slot| slot.index)
    }

    /// Logical index bound at the trailing edge.
    pub fn last_index(&self) -> Option<usize> {
        self.slots.last().map(|slot| slot.index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
