//! A headless windowing engine for dynamic scroll views.
//!
//! This crate keeps a small, bounded window of visual nodes consistent
//! with an arbitrarily large virtual list whose items can change size at
//! runtime: per-item positioning math, fast offset → index lookup,
//! window sizing, spacer-inset computation, incremental rolling deltas,
//! and a FIFO recycling pool for node handles.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport geometry and the current content position per scroll event
//! - a node factory (create/activate/deactivate/destroy) for the pool
//! - the layout scalars (orientation, padding, spacing) from its own
//!   configuration
//!
//! Per tick the host feeds the raw content position to
//! [`WindowCalculator::offset`], applies the returned spacer inset
//! *before* its layout pass, and rolls the window by
//! [`WindowCalculator::rolling`]'s delta, re-binding nodes with data from
//! [`RangeProvider`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod calc;
mod error;
mod index;
mod item;
mod model;
mod options;
mod pool;
mod range;
mod types;
mod window;


pub use calc::WindowCalculator;
pub use error::{Error, Result};
pub use index::PositionIndex;
pub use item::{ListItem, ScrollItem, SizeChange};
pub use model::ListModel;
pub use options::LayoutOptions;
pub use pool::{NodeFactory, RecyclePool};
pub use range::RangeProvider;
pub use types::{Orientation, Padding, Pivot, Vec2};
pub use window::{Assignment, Window};
