use crate::{Error, Orientation, Padding, Result, Vec2};

/// Layout configuration for a [`crate::ListModel`].
///
/// These are already-validated scalars the host sources from its own
/// layout configuration; the engine never reaches out to storage itself.
/// Build with `new` plus the `with_*` methods, then hand the options to
/// [`crate::ListModel::new`], which performs the validation.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    pub orientation: Orientation,
    /// Default inset around the whole list. The leading component doubles
    /// as the gap before item 0.
    pub padding: Padding,
    /// Space inserted between consecutive items.
    pub spacing: f32,
    /// Viewport extent; the primary-axis component must be positive.
    pub view_length: Vec2,
    /// Cross-axis extent of the scrollable content. The primary-axis
    /// component is ignored (the engine derives it from the items).
    pub content_size: Vec2,
    /// Reserve twice the pooled node slots so slow-loading content can be
    /// pre-staged off-screen. The active window itself is not doubled.
    pub preload: bool,
    /// Hosts that re-bind the visible window on every tick (not only when
    /// the window rolls) set this; the engine just carries the flag.
    pub always_refresh: bool,
}

impl LayoutOptions {
    pub fn new(orientation: Orientation, view_length: Vec2) -> Self {
        Self {
            orientation,
            padding: Padding::ZERO,
            spacing: 0.0,
            view_length,
            content_size: Vec2::ZERO,
            preload: false,
            always_refresh: false,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_content_size(mut self, content_size: Vec2) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn with_always_refresh(mut self, always_refresh: bool) -> Self {
        self.always_refresh = always_refresh;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.padding.is_non_negative() {
            return Err(Error::NegativePadding);
        }
        if self.spacing < 0.0 {
            return Err(Error::NegativeSpacing);
        }
        if self.view_length.x <= 0.0 || self.view_length.y <= 0.0 {
            return Err(Error::InvalidViewLength);
        }
        Ok(())
    }
}
