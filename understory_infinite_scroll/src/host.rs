// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the engine and the surface that renders the list.

use kurbo::Rect;
use understory_element_source::ElementData;

use crate::ViewBinder;

/// Identifier of a view instance inside the host's content container.
///
/// Identity survives rebinding: recycling keeps the id and swaps the data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ViewId(pub u32);

impl ViewId {
    /// Returns the id as a `usize`, suitable for indexing host-side storage.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Token for one scroll-position listener registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(pub u64);

/// Presentation state applied by the hide/show strategy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    /// Fully opaque and hit-testable.
    #[default]
    Visible,
    /// Fully transparent and ignored by hit testing.
    Hidden,
}

impl Visibility {
    /// Maps an overlap test result onto a visibility.
    #[must_use]
    pub fn from_overlap(overlaps: bool) -> Self {
        if overlaps { Self::Visible } else { Self::Hidden }
    }

    /// Opacity to render with.
    #[must_use]
    pub fn alpha(self) -> f32 {
        match self {
            Self::Visible => 1.0,
            Self::Hidden => 0.0,
        }
    }

    /// Whether the element accepts input and blocks hit tests.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// The rendering surface an infinite list lives in.
///
/// The host owns the viewport, the content container, and every view. The
/// engine only queries geometry, asks for new children, reorders them, and
/// nudges the content offset.
///
/// Conventions:
/// - World space is y-up: `Rect::y0` is the bottom edge, `Rect::y1` the top.
/// - [`normalized_position`](Self::normalized_position) is `1.0` at the top of
///   the content and `0.0` at the bottom.
/// - Inserting or rebinding a child may leave layout pending; the engine
///   re-queries geometry instead of assuming it changed synchronously.
pub trait ScrollHost {
    /// The concrete view type instantiated for each item.
    type View: ViewBinder;

    /// Local height of the viewport.
    fn viewport_height(&self) -> f64;

    /// Local height of the content container.
    fn content_height(&self) -> f64;

    /// World-space rectangle of the viewport.
    fn viewport_world_rect(&self) -> Rect;

    /// Normalized vertical scroll position.
    fn normalized_position(&self) -> f64;

    /// Moves the content by `dy` in world space (positive is up).
    fn shift_content(&mut self, dy: f64);

    /// Instantiates a new view as the last child of the content container.
    fn insert_child(&mut self) -> ViewId;

    /// Mutable access to a view instance.
    fn view_mut(&mut self, id: ViewId) -> &mut Self::View;

    /// Binds `data` onto a view.
    ///
    /// Hosts that measure on bind override this to invalidate layout as well.
    fn bind_view(&mut self, id: ViewId, data: &ElementData) {
        self.view_mut(id).setup(data);
    }

    /// Moves a child to `index` among its siblings.
    fn set_sibling_index(&mut self, id: ViewId, index: usize);

    /// World-space rectangle of a child.
    fn child_world_rect(&self, id: ViewId) -> Rect;

    /// Current rendered height of a child.
    fn child_height(&self, id: ViewId) -> f64;

    /// Applies opacity and interactivity to a child.
    fn set_visibility(&mut self, id: ViewId, visibility: Visibility);

    /// Registers a scroll-position listener.
    fn subscribe(&mut self) -> SubscriptionId;

    /// Removes a listener previously returned by [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, id: SubscriptionId);
}
