use std::collections::VecDeque;

/// Node lifecycle capabilities injected into the pool.
///
/// The pool stays host-framework-agnostic: whatever attaching/detaching
/// a visual node means (reparenting a widget, toggling visibility) lives
/// behind these four operations.
pub trait NodeFactory {
    type Node;

    /// Builds a brand-new node, inactive.
    fn create(&mut self) -> Self::Node;

    /// Prepares a node for use in the window (initialize, attach, show).
    fn activate(&mut self, node: &mut Self::Node);

    /// Retires a node from the window (hide, detach).
    fn deactivate(&mut self, node: &mut Self::Node);

    /// Destroys a node for good.
    fn destroy(&mut self, node: Self::Node);
}

/// A queue-backed pool of reusable visual-node handles.
///
/// Nodes are either *pooled* (inactive, owned by the queue) or *active*
/// (handed out, owned by the caller's window). Reuse is FIFO; a node is
/// never handed out twice without an intervening [`Self::release`].
pub struct RecyclePool<F: NodeFactory> {
    pooled: VecDeque<F::Node>,
    factory: F,
}

impl<F: NodeFactory> RecyclePool<F> {
    pub fn new(factory: F) -> Self {
        Self {
            pooled: VecDeque::new(),
            factory,
        }
    }

    /// Pre-sizes the queue storage (the capacity reported by
    /// [`crate::WindowCalculator::pool_capacity`]).
    pub fn with_capacity(factory: F, capacity: usize) -> Self {
        Self {
            pooled: VecDeque::with_capacity(capacity),
            factory,
        }
    }

    /// Takes `amount` active nodes: pooled ones first (oldest out), fresh
    /// ones for the shortfall. Every returned node has been activated.
    pub fn get(&mut self, amount: usize) -> Vec<F::Node> {
        let mut nodes = Vec::with_capacity(amount);
        for _ in 0..amount {
            nodes.push(self.get_one());
        }
        nodes
    }

    /// Single-node variant of [`Self::get`].
    pub fn get_one(&mut self) -> F::Node {
        let mut node = match self.pooled.pop_front() {
            Some(node) => node,
            None => self.factory.create(),
        };
        self.factory.activate(&mut node);
        node
    }

    /// Deactivates a node and requeues it for reuse.
    pub fn release(&mut self, mut node: F::Node) {
        self.factory.deactivate(&mut node);
        self.pooled.push_back(node);
    }

    /// Destroys every pooled node and empties the queue. Active nodes are
    /// unaffected.
    pub fn clear(&mut self) {
        ddebug!(pooled = self.pooled.len(), "RecyclePool::clear");
        while let Some(node) = self.pooled.pop_front() {
            self.factory.destroy(node);
        }
    }

    /// Number of currently pooled (inactive) nodes.
    pub fn len(&self) -> usize {
        self.pooled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pooled.is_empty()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
