// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`ScrollHost`] with a simple stacked layout.
//!
//! [`HeadlessHost`] stands in for a real UI surface in tests, demos, and
//! benchmarks. Its layout model:
//!
//! - The viewport occupies world `y ∈ [0, viewport_height]` and
//!   `x ∈ [0, width]`.
//! - Children stack downward from the content's top edge, in sibling order.
//! - The scroll offset is the distance the content's top edge sits above the
//!   viewport's top edge, clamped to `[0, content_height - viewport_height]`
//!   whenever it is moved or the viewport is resized.
//! - Child heights are measured from their bound text with [`RowMetrics`] and
//!   updated synchronously on every bind. A bind never moves the offset, so a
//!   rebind followed by [`ScrollHost::shift_content`] lands exactly.

use kurbo::Rect;
use understory_element_source::ElementData;

use crate::{ElementView, ScrollHost, SubscriptionId, ViewBinder, ViewId, Visibility};

/// Text measurement used by [`HeadlessHost`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// Height of one wrapped line.
    pub line_height: f64,
    /// Characters that fit on one line before wrapping.
    pub chars_per_line: usize,
    /// Vertical padding added to every row.
    pub padding: f64,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            line_height: 40.0,
            chars_per_line: 40,
            padding: 10.0,
        }
    }
}

impl RowMetrics {
    /// Height of a row showing `text`. Empty text still takes one line.
    #[must_use]
    pub fn measure(&self, text: &str) -> f64 {
        let chars = text.chars().count();
        let lines = chars.div_ceil(self.chars_per_line.max(1)).max(1);
        self.padding + self.line_height * lines as f64
    }
}

#[derive(Clone, Debug)]
struct Child {
    view: ElementView,
    height: f64,
    visibility: Visibility,
}

/// In-memory reference host.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    viewport_height: f64,
    width: f64,
    metrics: RowMetrics,
    /// Indexed by [`ViewId::index`].
    children: Vec<Child>,
    /// Sibling order, top to bottom.
    order: Vec<ViewId>,
    offset: f64,
    listeners: Vec<SubscriptionId>,
    next_subscription: u64,
}

impl HeadlessHost {
    /// Creates an empty host with a viewport of the given height.
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
            width: 320.0,
            metrics: RowMetrics::default(),
            children: Vec::new(),
            order: Vec::new(),
            offset: 0.0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the text measurement.
    #[must_use]
    pub fn with_metrics(mut self, metrics: RowMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Resizes the viewport, keeping the offset in range.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
        self.clamp_offset();
    }

    /// Scroll offset from the top of the content.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Scrolls by `delta` (positive scrolls toward the bottom), as a drag would.
    ///
    /// Returns `true` if the position changed, i.e. whether a listener should
    /// be notified.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let before = self.offset;
        self.offset += delta;
        self.clamp_offset();
        self.offset != before
    }

    /// Scrolls to the very bottom. Returns `true` if the position changed.
    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_by(self.max_offset() - self.offset)
    }

    /// Scrolls to the very top. Returns `true` if the position changed.
    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_by(-self.offset)
    }

    /// Number of children in the content container.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.order.len()
    }

    /// Children in sibling order, top to bottom.
    #[must_use]
    pub fn sibling_order(&self) -> &[ViewId] {
        &self.order
    }

    /// Read access to a view instance.
    #[must_use]
    pub fn view(&self, id: ViewId) -> &ElementView {
        &self.children[id.index()].view
    }

    /// Visibility last applied to a child.
    #[must_use]
    pub fn visibility(&self, id: ViewId) -> Visibility {
        self.children[id.index()].visibility
    }

    /// Number of live scroll listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn content_top(&self) -> f64 {
        self.viewport_height + self.offset
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}

impl ScrollHost for HeadlessHost {
    type View = ElementView;

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn content_height(&self) -> f64 {
        self.order
            .iter()
            .map(|id| self.children[id.index()].height)
            .sum()
    }

    fn viewport_world_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.viewport_height)
    }

    fn normalized_position(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 1.0;
        }
        1.0 - self.offset.clamp(0.0, max) / max
    }

    fn shift_content(&mut self, dy: f64) {
        self.offset += dy;
        self.clamp_offset();
    }

    fn insert_child(&mut self) -> ViewId {
        let id = view_id_for(self.children.len());
        self.children.push(Child {
            view: ElementView::default(),
            height: self.metrics.measure(""),
            visibility: Visibility::Visible,
        });
        self.order.push(id);
        id
    }

    fn view_mut(&mut self, id: ViewId) -> &mut ElementView {
        &mut self.children[id.index()].view
    }

    // No clamp: the shift that follows a rebind clamps against the final layout.
    fn bind_view(&mut self, id: ViewId, data: &ElementData) {
        let child = &mut self.children[id.index()];
        child.view.setup(data);
        child.height = self.metrics.measure(&child.view.text);
    }

    fn set_sibling_index(&mut self, id: ViewId, index: usize) {
        if let Some(current) = self.order.iter().position(|&other| other == id) {
            self.order.remove(current);
            let index = index.min(self.order.len());
            self.order.insert(index, id);
        }
    }

    fn child_world_rect(&self, id: ViewId) -> Rect {
        let mut top = self.content_top();
        for &other in &self.order {
            let height = self.children[other.index()].height;
            if other == id {
                return Rect::new(0.0, top - height, self.width, top);
            }
            top -= height;
        }
        Rect::ZERO
    }

    fn child_height(&self, id: ViewId) -> f64 {
        self.children[id.index()].height
    }

    fn set_visibility(&mut self, id: ViewId, visibility: Visibility) {
        self.children[id.index()].visibility = visibility;
    }

    fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|&listener| listener != id);
    }
}

/// Child slots are ids; running out of `u32` ids is a hard error.
fn view_id_for(slot: usize) -> ViewId {
    ViewId(u32::try_from(slot).expect("HeadlessHost: too many children for u32 ViewId"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_wraps_long_text() {
        let metrics = RowMetrics {
            line_height: 10.0,
            chars_per_line: 4,
            padding: 2.0,
        };
        assert_eq!(metrics.measure(""), 12.0);
        assert_eq!(metrics.measure("abcd"), 12.0);
        assert_eq!(metrics.measure("abcde"), 22.0);
    }

    #[test]
    fn children_stack_down_from_the_content_top() {
        let mut host = HeadlessHost::new(100.0);
        let a = host.insert_child();
        let b = host.insert_child();
        let c = host.insert_child();
        assert_eq!(host.content_height(), 150.0);
        assert_eq!(host.child_world_rect(a), Rect::new(0.0, 50.0, 320.0, 100.0));
        assert_eq!(host.child_world_rect(c), Rect::new(0.0, -50.0, 320.0, 0.0));

        host.set_sibling_index(c, 0);
        assert_eq!(host.sibling_order(), &[c, a, b]);
        assert_eq!(host.child_world_rect(c), Rect::new(0.0, 50.0, 320.0, 100.0));
    }

    #[test]
    fn position_is_one_at_top_and_zero_at_bottom() {
        let mut host = HeadlessHost::new(100.0);
        assert_eq!(host.normalized_position(), 1.0);
        for _ in 0..4 {
            host.insert_child();
        }
        assert_eq!(host.normalized_position(), 1.0);
        assert!(host.scroll_to_bottom());
        assert_eq!(host.offset(), 100.0);
        assert_eq!(host.normalized_position(), 0.0);
        assert!(!host.scroll_by(10.0));

        host.shift_content(-50.0);
        assert_eq!(host.normalized_position(), 0.5);
    }

    #[test]
    fn listeners_are_tracked_per_token() {
        let mut host = HeadlessHost::new(100.0);
        let first = host.subscribe();
        let second = host.subscribe();
        assert_ne!(first, second);
        assert_eq!(host.listener_count(), 2);
        host.unsubscribe(first);
        host.unsubscribe(first);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn view_ids_follow_insertion_order() {
        assert_eq!(view_id_for(0), ViewId(0));
        assert_eq!(view_id_for(u32::MAX as usize), ViewId(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "too many children")]
    fn view_ids_do_not_alias_past_u32() {
        let _ = view_id_for(u32::MAX as usize + 1);
    }

    #[test]
    fn rebinding_keeps_the_offset_until_the_next_shift() {
        let mut host = HeadlessHost::new(100.0);
        let ids: Vec<ViewId> = (0..4).map(|_| host.insert_child()).collect();
        let long = ElementData::text_only("x".repeat(100));
        host.bind_view(ids[0], &long);
        assert!(host.scroll_to_bottom());
        assert_eq!(host.offset(), 180.0);

        // Shrinking a row leaves the offset past the end until the shift lands.
        host.bind_view(ids[0], &ElementData::text_only("short"));
        assert_eq!(host.offset(), 180.0);
        assert_eq!(host.normalized_position(), 0.0);
        host.shift_content(-130.0);
        assert_eq!(host.offset(), 50.0);
    }
}
